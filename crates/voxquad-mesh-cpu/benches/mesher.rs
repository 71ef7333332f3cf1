use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use voxquad_geom::Coordinate;
use voxquad_mesh_cpu::{MeshParams, build_voxel_mesh};
use voxquad_volume::{Voxel, VoxelVolume, classify};

fn sphere_volume(r: i16) -> VoxelVolume {
    let d = 2 * r + 1;
    let size = Coordinate::new(d, d, d);
    let mut vol = VoxelVolume::new(size).unwrap();
    let rr = (r as i32).pow(2);
    for c in Coordinate::solid(Coordinate::ZERO, size) {
        let q = c - Coordinate::new(r, r, r);
        if (q.x as i32).pow(2) + (q.y as i32).pow(2) + (q.z as i32).pow(2) <= rr {
            vol.set(c, Voxel::visible((c.y % 16) as u8 + 1)).unwrap();
        }
    }
    classify(&mut vol, true);
    vol
}

fn bench_build_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_voxel_mesh_sphere");
    group.measurement_time(Duration::from_secs(5));
    let vol = sphere_volume(24);
    for (name, p) in [("strict_p0", 0.0), ("default_p40", 0.4), ("loose_p100", 1.0)] {
        let params = MeshParams {
            max_occlusion: p,
            ..MeshParams::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                let out = build_voxel_mesh(black_box(&vol), &params);
                black_box(out.map(|m| m.vertex_count()).ok());
            })
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_fill_voids");
    let base = {
        let mut vol = sphere_volume(24);
        vol.replace(voxquad_volume::VoxelKind::Empty, voxquad_volume::VoxelKind::Unknown);
        vol.replace(voxquad_volume::VoxelKind::Occluded, voxquad_volume::VoxelKind::Unknown);
        vol
    };
    group.bench_function("sphere_r24", |b| {
        b.iter(|| {
            let mut vol = base.clone();
            classify(&mut vol, true);
            black_box(vol.len());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build_sphere, bench_classify);
criterion_main!(benches);
