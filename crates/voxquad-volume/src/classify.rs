use crate::voxel::VoxelKind;
use crate::volume::VoxelVolume;

/// How [`classify_with`] walks the volume when separating exterior air from
/// enclosed cavities. Both produce the same volume.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FloodStrategy {
    /// Breadth-first queue seeded from the outer shell.
    #[default]
    Queue,
    /// Repeated inward shell passes until nothing changes.
    ShrinkingShell,
}

/// Classifies a freshly populated volume.
///
/// With `fill_voids`, every `Unknown` cell reachable from outside becomes `Empty`
/// and the rest become `Occluded`, so sealed cavities never produce faces. Without
/// it the volume is left alone and `Unknown` cells act as open space.
pub fn classify(volume: &mut VoxelVolume, fill_voids: bool) {
    classify_with(volume, fill_voids, FloodStrategy::default());
}

pub fn classify_with(volume: &mut VoxelVolume, fill_voids: bool, strategy: FloodStrategy) {
    if !fill_voids {
        return;
    }
    let outside = match strategy {
        FloodStrategy::Queue => volume.flood(VoxelKind::Unknown, VoxelKind::Empty),
        FloodStrategy::ShrinkingShell => {
            volume.flood_shrinking_shell(VoxelKind::Unknown, VoxelKind::Empty)
        }
    };
    let enclosed = volume.replace(VoxelKind::Unknown, VoxelKind::Occluded);
    log::debug!(
        "classified volume {}: {} exterior, {} enclosed ({:?})",
        volume.size(),
        outside,
        enclosed,
        strategy
    );
}
