//! Writers for built models: Wavefront OBJ geometry and PNG atlases.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use voxquad_mesh_cpu::VoxelMesh;

/// Writes `mesh` as a single OBJ object. Texture V is flipped to the bottom-left
/// origin OBJ viewers expect.
pub fn write_obj<W: Write>(mesh: &VoxelMesh, name: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "# voxquad")?;
    writeln!(out, "o {}", name)?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv[0], 1.0 - uv[1])?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(out, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }
    Ok(())
}

pub fn save_obj(mesh: &VoxelMesh, name: &str, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(mesh, name, &mut out)?;
    out.flush()
}

/// Saves each atlas as `<stem>_albedo<i>.png` in `dir` and returns the written paths.
pub fn save_atlases(
    textures: &[RgbaImage],
    dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>, image::ImageError> {
    let mut written = Vec::with_capacity(textures.len());
    for (i, tex) in textures.iter().enumerate() {
        let path = dir.join(format!("{stem}_albedo{i}.png"));
        tex.save(&path)?;
        log::debug!("wrote {} ({}x{})", path.display(), tex.width(), tex.height());
        written.push(path);
    }
    Ok(written)
}
