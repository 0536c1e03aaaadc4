use crate::common::octahedron;
use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Real;
use voxelize3d::partitioning::OctreeParameters;
use voxelize3d::shape::{PolyMesh, PolygonMesh};
use voxelize3d::transformation::voxelization::{
    voxelize_implicit, voxelize_mesh, voxelize_mesh_within,
};

fn jittered_octahedron(seed: u64) -> PolyMesh {
    let mut rng = oorandom::Rand32::new(seed);
    let base = octahedron(1.0);
    let vertices = base
        .vertices()
        .iter()
        .map(|pt| pt + Vector3::repeat((rng.rand_float() as Real - 0.5) * 0.2))
        .collect();
    PolyMesh::new(vertices, base.polygons().to_vec()).unwrap()
}

#[test]
fn mesh_voxelization_is_deterministic() {
    let mesh = jittered_octahedron(1234);
    let a = voxelize_mesh(&mesh, 24).unwrap();
    let b = voxelize_mesh(&mesh, 24).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.flood_seed(), Some(0));
}

#[test]
fn mesh_voxelization_does_not_depend_on_the_octree_shape() {
    let mesh = jittered_octahedron(99);
    let volume = mesh.aabb();
    let flat = OctreeParameters {
        max_depth: 0,
        max_items_per_leaf: 1,
    };
    let deep = OctreeParameters {
        max_depth: 10,
        max_items_per_leaf: 1,
    };

    let a = voxelize_mesh_within(&mesh, &volume, 20, &flat).unwrap();
    let b = voxelize_mesh_within(&mesh, &volume, 20, &deep).unwrap();
    let c = voxelize_mesh_within(&mesh, &volume, 20, &OctreeParameters::default()).unwrap();

    assert_eq!(a.tags(), b.tags());
    assert_eq!(a.tags(), c.tags());
}

#[test]
fn implicit_voxelization_is_deterministic() {
    let torus = |pt: &Point3<Real>| {
        let q = (pt.x * pt.x + pt.z * pt.z).sqrt() - 0.6;
        (q * q + pt.y * pt.y).sqrt() - 0.25
    };
    let volume = Aabb::new(Point3::new(-1.0, -0.5, -1.0), Point3::new(1.0, 0.5, 1.0));

    let a = voxelize_implicit(&torus, &volume, 32).unwrap();
    let b = voxelize_implicit(&torus, &volume, 32).unwrap();
    assert_eq!(a, b);
}
