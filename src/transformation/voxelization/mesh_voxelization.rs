use crate::bounding_volume::Aabb;
use crate::partitioning::{Octree, OctreeParameters};
use crate::query::details::intersection_test_aabb_triangle;
use crate::shape::PolygonMesh;
use crate::transformation::voxelization::chunks::classify_chunks;
use crate::transformation::voxelization::flood_fill::{flood_exterior, mark_residual_inside};
use crate::transformation::voxelization::voxel_grid::GridLayout;
use crate::transformation::voxelization::{VoxelGrid, VoxelTag, VoxelizationError};

/// Voxelizes a closed polygon mesh over its own bounding box.
///
/// See [`voxelize_mesh_within`] for details. The default [`OctreeParameters`] are used.
pub fn voxelize_mesh(
    mesh: &(impl PolygonMesh + ?Sized),
    resolution: u32,
) -> Result<VoxelGrid, VoxelizationError> {
    voxelize_mesh_within(mesh, &mesh.aabb(), resolution, &OctreeParameters::default())
}

/// Voxelizes a closed polygon mesh over the given bounding volume.
///
/// The grid covers `volume`, with `resolution` voxels along its longest axis. Voxels are then
/// classified in three passes:
/// 1. every voxel intersected by a triangle of the mesh becomes [`VoxelTag::Boundary`];
/// 2. starting from the first voxel of the lower grid faces (`i == 0`, `j == 0`, or `k == 0`)
///    that is not boundary, every voxel reachable through face-adjacent non-boundary voxels
///    becomes [`VoxelTag::Outside`];
/// 3. every remaining voxel becomes [`VoxelTag::Inside`].
///
/// The result is only meaningful if the mesh surface is closed within `volume`: a hole in the
/// surface lets the exterior leak inside. If no flood seed exists, step 2 is skipped and a
/// warning is logged. This is reported by [`VoxelGrid::flood_seed`].
pub fn voxelize_mesh_within(
    mesh: &(impl PolygonMesh + ?Sized),
    volume: &Aabb,
    resolution: u32,
    params: &OctreeParameters,
) -> Result<VoxelGrid, VoxelizationError> {
    let mut grid = VoxelGrid::new(*volume, resolution)?;
    let seed = {
        let octree = Octree::from_mesh(mesh, params);
        mark_boundary(&mut grid, &octree)
    };

    flood_exterior(&mut grid, seed);
    mark_residual_inside(&mut grid);

    Ok(grid)
}

/// Tags `Boundary` every voxel intersecting a triangle of `octree`.
///
/// Returns the smallest linear index of a non-boundary voxel lying on a lower face of the grid.
fn mark_boundary(grid: &mut VoxelGrid, octree: &Octree) -> Option<usize> {
    let layout = grid.layout();

    classify_chunks(grid.tags_mut(), |start, chunk| {
        mark_boundary_in_chunk(&layout, octree, start, chunk)
    })
}

fn mark_boundary_in_chunk(
    layout: &GridLayout,
    octree: &Octree,
    start: usize,
    chunk: &mut [VoxelTag],
) -> Option<usize> {
    let mut candidates = vec![];
    let mut seed = None;

    for (k, tag) in chunk.iter_mut().enumerate() {
        let index = start + k;
        let ijk = layout.grid_coords(index);
        let aabb = layout.voxel_aabb(&ijk);

        octree.intersect_aabb(&aabb, &mut candidates);
        let on_boundary = candidates
            .iter()
            .any(|id| intersection_test_aabb_triangle(&aabb, octree.triangle(*id)));

        if on_boundary {
            *tag = VoxelTag::Boundary;
        } else if seed.is_none() && (ijk.x == 0 || ijk.y == 0 || ijk.z == 0) {
            seed = Some(index);
        }
    }

    seed
}
