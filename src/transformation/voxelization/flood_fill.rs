use crate::transformation::voxelization::{Connectivity, VoxelGrid, VoxelTag};
use std::collections::VecDeque;

/// Tags `Outside` every `Unknown` voxel 6-connected to `seed` through `Unknown` voxels.
///
/// The seed itself is recorded as the grid flood seed. Nothing is flooded if it is `None`.
pub(crate) fn flood_exterior(grid: &mut VoxelGrid, seed: Option<usize>) {
    grid.set_flood_seed(seed);

    let Some(seed) = seed else {
        log::warn!(
            "No voxel of the outer grid shell is free of the boundary: flood-fill skipped, \
             every unclassified voxel will be considered inside."
        );
        return;
    };

    let layout = grid.layout();
    let mut queue = VecDeque::new();

    if grid.tag(seed) == Some(VoxelTag::Unknown) {
        grid.tags_mut()[seed] = VoxelTag::Outside;
        queue.push_back(seed);
    }

    while let Some(index) = queue.pop_front() {
        let ijk = layout.grid_coords(index);

        for neighbor in grid.neighbors(&ijk, Connectivity::Face) {
            let neighbor_index = layout.linear_index(&neighbor);
            let tag = &mut grid.tags_mut()[neighbor_index];

            if *tag == VoxelTag::Unknown {
                *tag = VoxelTag::Outside;
                queue.push_back(neighbor_index);
            }
        }
    }
}

/// Tags `Inside` every voxel still `Unknown`.
pub(crate) fn mark_residual_inside(grid: &mut VoxelGrid) {
    for tag in grid.tags_mut() {
        if *tag == VoxelTag::Unknown {
            *tag = VoxelTag::Inside;
        }
    }
}
