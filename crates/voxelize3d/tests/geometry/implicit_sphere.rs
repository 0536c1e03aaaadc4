use crate::common::{assert_fully_classified, assert_inside_and_outside_are_separated};
use na::Point3;
use std::collections::VecDeque;
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Real;
use voxelize3d::transformation::voxelization::{voxelize_implicit, Connectivity, VoxelTag};

#[test]
fn implicit_sphere_has_a_connected_boundary_shell() {
    let sphere = |pt: &Point3<Real>| pt.coords.norm() - 0.5;
    let volume = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let grid = voxelize_implicit(&sphere, &volume, 16).unwrap();

    assert_fully_classified(&grid);
    assert_eq!(grid.flood_seed(), None);
    assert_eq!(grid.tag_at(&Point3::new(0, 0, 0)), Some(VoxelTag::Outside));
    assert_eq!(grid.tag_at(&Point3::new(7, 7, 7)), Some(VoxelTag::Inside));
    let num_classified = grid.count(VoxelTag::Inside)
        + grid.count(VoxelTag::Outside)
        + grid.count(VoxelTag::Boundary);
    assert_eq!(num_classified, grid.len());
    assert_inside_and_outside_are_separated(&grid);

    // Walk the boundary voxels from one of them.
    let boundary: Vec<_> = grid
        .iter()
        .filter(|(_, tag)| *tag == VoxelTag::Boundary)
        .map(|(ijk, _)| ijk)
        .collect();
    assert!(!boundary.is_empty());

    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::from([boundary[0]]);
    let mut num_visited = 1;
    visited[grid.linear_index(&boundary[0]).unwrap()] = true;

    while let Some(ijk) = queue.pop_front() {
        for neighbor in grid.neighbors(&ijk, Connectivity::Vertex) {
            let index = grid.linear_index(&neighbor).unwrap();
            if !visited[index] && grid.tag(index) == Some(VoxelTag::Boundary) {
                visited[index] = true;
                num_visited += 1;
                queue.push_back(neighbor);
            }
        }
    }

    assert_eq!(num_visited, boundary.len());
}

#[test]
fn implicit_boundary_contains_the_surface() {
    let sphere = |pt: &Point3<Real>| pt.coords.norm() - 0.5;
    let volume = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let grid = voxelize_implicit(&sphere, &volume, 16).unwrap();

    for (ijk, tag) in grid.iter() {
        let center = grid.voxel_center(&ijk);
        let distance = sphere(&center).abs();
        // Voxels far from the surface can't be boundary.
        if distance > grid.edge_length() {
            assert_ne!(tag, VoxelTag::Boundary, "voxel {ijk:?}");
        }
    }
}
