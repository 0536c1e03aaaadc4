use crate::common::{assert_fully_classified, assert_inside_and_outside_are_separated, octahedron};
use na::Point3;
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Real;
use voxelize3d::partitioning::OctreeParameters;
use voxelize3d::transformation::voxelization::{voxelize_mesh_within, VoxelTag};

// Smallest and largest values of |x| + |y| + |z| over a box.
fn l1_range(aabb: &Aabb) -> (Real, Real) {
    let mut min = 0.0;
    let mut max = 0.0;

    for i in 0..3 {
        let (lo, hi) = (aabb.mins[i], aabb.maxs[i]);
        if lo > 0.0 {
            min += lo;
        } else if hi < 0.0 {
            min += -hi;
        }
        max += lo.abs().max(hi.abs());
    }

    (min, max)
}

#[test]
fn octahedron_voxels_match_the_l1_ball() {
    let r = 0.3;
    let volume = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
    let grid =
        voxelize_mesh_within(&octahedron(r), &volume, 16, &OctreeParameters::default()).unwrap();

    assert_fully_classified(&grid);
    assert_eq!(grid.flood_seed(), Some(0));

    for (ijk, tag) in grid.iter() {
        let (min, max) = l1_range(&grid.voxel_aabb(&ijk));
        let expected = if min > r {
            VoxelTag::Outside
        } else if max < r {
            VoxelTag::Inside
        } else {
            VoxelTag::Boundary
        };
        assert_eq!(tag, expected, "voxel {ijk:?}");
    }

    assert!(grid.count(VoxelTag::Inside) > 0);
    assert_inside_and_outside_are_separated(&grid);
}

#[test]
fn octahedron_on_a_grid_spanning_several_chunks() {
    let volume = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
    let grid =
        voxelize_mesh_within(&octahedron(0.3), &volume, 64, &OctreeParameters::default()).unwrap();

    assert!(grid.len() > 2 * voxelize3d::transformation::voxelization::PARALLEL_CHUNK_SIZE);
    assert_fully_classified(&grid);
    assert_eq!(grid.flood_seed(), Some(0));
    assert_eq!(
        grid.tag_at(&Point3::new(32, 32, 32)),
        Some(VoxelTag::Inside)
    );
    assert_inside_and_outside_are_separated(&grid);
}
