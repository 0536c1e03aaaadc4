use crate::common::{assert_fully_classified, assert_inside_and_outside_are_separated};
use na::Point3;
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::partitioning::OctreeParameters;
use voxelize3d::shape::{PolyMesh, PolygonIndices};
use voxelize3d::transformation::voxelization::{voxelize_mesh_within, VoxelTag};

/// A unit-height prism over an L whose notch is at `x > 1, y > 1`.
///
/// Both caps are single hexagons whose ring starts at the convex corner `(2, 0)`.
fn l_prism() -> PolyMesh {
    let ring = [
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
        [0.0, 0.0],
    ];
    let n = ring.len() as u32;
    let vertices = [0.0, 1.0]
        .iter()
        .flat_map(|z| ring.iter().map(move |[x, y]| Point3::new(*x, *y, *z)))
        .collect();

    let mut polygons: Vec<PolygonIndices> = vec![(0..n).rev().collect(), (n..2 * n).collect()];
    for i in 0..n {
        let next = (i + 1) % n;
        polygons.push([i, next, next + n, i + n].into_iter().collect());
    }

    PolyMesh::new(vertices, polygons).unwrap()
}

#[test]
fn l_prism_notch_stays_outside() {
    let volume = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(3.0, 3.0, 2.0));
    let grid =
        voxelize_mesh_within(&l_prism(), &volume, 16, &OctreeParameters::default()).unwrap();

    assert_fully_classified(&grid);
    assert_inside_and_outside_are_separated(&grid);
    assert!(grid.count(VoxelTag::Inside) > 0);

    let mut notch_voxels = 0;
    for (ijk, tag) in grid.iter() {
        let aabb = grid.voxel_aabb(&ijk);
        if aabb.mins.x > 1.0 && aabb.mins.y > 1.0 {
            notch_voxels += 1;
            assert_eq!(tag, VoxelTag::Outside, "voxel {ijk:?} at {aabb:?}");
        }
    }
    assert_eq!(notch_voxels, 7 * 7 * 12);
}
