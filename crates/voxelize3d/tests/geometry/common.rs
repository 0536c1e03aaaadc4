use na::Point3;
use voxelize3d::math::Real;
use voxelize3d::shape::PolyMesh;
use voxelize3d::transformation::voxelization::{Connectivity, VoxelGrid, VoxelTag};

/// The closed octahedron `|x| + |y| + |z| = r`.
pub fn octahedron(r: Real) -> PolyMesh {
    let vertices = vec![
        Point3::new(r, 0.0, 0.0),
        Point3::new(-r, 0.0, 0.0),
        Point3::new(0.0, r, 0.0),
        Point3::new(0.0, -r, 0.0),
        Point3::new(0.0, 0.0, r),
        Point3::new(0.0, 0.0, -r),
    ];
    let mut triangles = vec![];

    for x in [0, 1] {
        for y in [2, 3] {
            for z in [4, 5] {
                triangles.push([x, y, z]);
            }
        }
    }

    PolyMesh::from_triangles(vertices, triangles).unwrap()
}

/// Checks that no `Inside` voxel shares a face with an `Outside` voxel.
pub fn assert_inside_and_outside_are_separated(grid: &VoxelGrid) {
    for (ijk, tag) in grid.iter() {
        if tag == VoxelTag::Inside {
            for neighbor in grid.neighbors(&ijk, Connectivity::Face) {
                assert_ne!(
                    grid.tag_at(&neighbor),
                    Some(VoxelTag::Outside),
                    "inside voxel {ijk:?} touches outside voxel {neighbor:?}"
                );
            }
        }
    }
}

pub fn assert_fully_classified(grid: &VoxelGrid) {
    let dims = grid.dimensions();
    assert_eq!(grid.len(), (dims.x * dims.y * dims.z) as usize);
    assert_eq!(grid.count(VoxelTag::Unknown), 0);
}
