use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Real;
use voxelize3d::shape::PolyMesh;
use voxelize3d::transformation::voxelization::{
    voxelize_implicit, voxelize_mesh, VoxelGrid, VoxelTag, VoxelizationError,
};

#[test]
fn grid_indices_are_a_bijection() {
    let volume = Aabb::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 8.0));
    let grid = VoxelGrid::new(volume, 5).unwrap();
    assert_eq!(grid.dimensions(), Vector3::new(3, 4, 5));

    for index in 0..grid.len() {
        let ijk = grid.grid_coords(index).unwrap();
        assert_eq!(grid.linear_index(&ijk), Some(index));
    }

    for (index, (ijk, _)) in grid.iter().enumerate() {
        assert_eq!(grid.linear_index(&ijk), Some(index));
        let center = grid.voxel_center(&ijk);
        assert_eq!(grid.voxel_containing_point(&center), Some(ijk));
    }
}

#[test]
fn configuration_errors_are_reported_before_voxelizing() {
    let unit = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let sphere = |pt: &Point3<Real>| pt.coords.norm() - 0.5;

    assert_eq!(
        voxelize_implicit(&sphere, &unit, 0),
        Err(VoxelizationError::ZeroResolution)
    );
    assert_eq!(
        voxelize_implicit(&sphere, &Aabb::new(unit.maxs, unit.mins), 4),
        Err(VoxelizationError::InvalidVolume)
    );

    // All the vertices of this mesh coincide.
    let flat = PolyMesh::from_triangles(vec![Point3::new(1.0, 1.0, 1.0); 3], vec![[0, 1, 2]])
        .unwrap();
    assert_eq!(
        voxelize_mesh(&flat, 8),
        Err(VoxelizationError::DegenerateVolume)
    );
}

#[test]
fn flat_mesh_is_voxelized_as_a_single_layer() {
    let square = PolyMesh::from_triangles(
        vec![
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();
    let grid = voxelize_mesh(&square, 4).unwrap();

    assert_eq!(grid.dimensions(), Vector3::new(4, 4, 1));
    assert_eq!(grid.count(VoxelTag::Boundary), 16);
    assert_eq!(grid.flood_seed(), None);
}
