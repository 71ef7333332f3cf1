use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use voxquad::export::{save_atlases, save_obj};
use voxquad::shapes;
use voxquad::{ImportSettings, Importer, load_settings_from_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Shape {
    Box,
    Sphere,
    HollowSphere,
    Checkerboard,
}

#[derive(Parser, Debug)]
#[command(about = "Mesh a voxel volume into merged textured quads", long_about = None)]
struct Args {
    /// TOML file with import settings; defaults apply when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Demo volume to mesh
    #[arg(long, value_enum, default_value_t = Shape::Sphere)]
    shape: Shape,

    /// Edge length of the demo volume in voxels
    #[arg(long, default_value_t = 16)]
    size: u16,

    /// Output directory for the OBJ and atlas PNGs
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Model name; defaults to the shape name
    #[arg(long)]
    name: Option<String>,

    /// Override the scale factor (world units per voxel)
    #[arg(long)]
    scale: Option<f32>,

    /// Override the maximum occlusion percent (0-100)
    #[arg(long)]
    max_occlusion: Option<u8>,

    /// Seal cavities unreachable from outside
    #[arg(long)]
    fill_voids: bool,

    /// Keep every face a single voxel
    #[arg(long)]
    no_merge: bool,
}

fn settings_from_args(args: &Args) -> Result<ImportSettings, Box<dyn Error>> {
    let mut settings = match &args.settings {
        Some(path) => load_settings_from_path(path)?,
        None => ImportSettings::default(),
    };
    if let Some(scale) = args.scale {
        settings.scale_factor = scale;
    }
    if let Some(p) = args.max_occlusion {
        settings.max_occlusion_percent = p;
    }
    if args.fill_voids {
        settings.fill_voids = true;
    }
    if args.no_merge {
        settings.merge_faces = false;
    }
    Ok(settings)
}

fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    let settings = settings_from_args(&args)?;
    let importer = Importer::new(settings)?;
    let n = args.size;
    let decoded = match args.shape {
        Shape::Box => shapes::solid_box([n, n, n]),
        Shape::Sphere => shapes::sphere(n),
        Shape::HollowSphere => shapes::hollow_sphere(n, (n / 8).max(1)),
        Shape::Checkerboard => shapes::checkerboard([n, n, n]),
    };
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| format!("{:?}", args.shape).to_lowercase());

    let outcome = importer.run(&name, &decoded);
    println!("{}", outcome.message);
    let Some(model) = outcome.model else {
        return Ok(false);
    };

    fs::create_dir_all(&args.out)?;
    let obj = args.out.join(format!("{name}.obj"));
    save_obj(&model.mesh, &name, &obj)?;
    log::info!("wrote {}", obj.display());
    for path in save_atlases(&model.textures, &args.out, &name)? {
        log::info!("wrote {}", path.display());
    }
    Ok(outcome.success)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
