use crate::common::assert_fully_classified;
use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::shape::PolyMesh;
use voxelize3d::transformation::voxelization::{voxelize_mesh, VoxelTag};

#[test]
fn unit_cube_fills_its_bounding_box() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let grid = voxelize_mesh(&PolyMesh::from_aabb(&aabb), 4).unwrap();

    assert_fully_classified(&grid);
    assert_eq!(grid.dimensions(), Vector3::new(4, 4, 4));
    assert_eq!(grid.edge_length(), 0.25);
    assert_eq!(grid.count(VoxelTag::Boundary), 56);
    assert_eq!(grid.count(VoxelTag::Inside), 8);
    assert_eq!(grid.count(VoxelTag::Outside), 0);

    // Every voxel of the outer shell touches the surface: there is nothing to flood from.
    assert_eq!(grid.flood_seed(), None);
}

#[test]
fn unit_cube_with_quads_and_triangles_agree() {
    let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let quads = PolyMesh::from_aabb(&aabb);
    let vertices = aabb.vertices().to_vec();
    let triangles: Vec<[u32; 3]> = quads
        .polygons()
        .iter()
        .flat_map(|q| [[q[0], q[1], q[2]], [q[0], q[2], q[3]]])
        .collect();
    let triangulated = PolyMesh::from_triangles(vertices, triangles).unwrap();

    let a = voxelize_mesh(&quads, 8).unwrap();
    let b = voxelize_mesh(&triangulated, 8).unwrap();
    assert_eq!(a.tags(), b.tags());
}
