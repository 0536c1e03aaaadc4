use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::{Cuboid, Triangle};

/// Tests if a triangle intersects an `Aabb`.
///
/// Boundaries count: a triangle merely touching a face, an edge, or a corner of the box
/// intersects it. Degenerate triangles (see [`Triangle::is_affinely_dependent`]) never intersect
/// anything. Triangles with non-finite coordinates are conservatively reported as intersecting.
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    if !triangle2.is_finite() {
        return true;
    }

    if triangle2.is_affinely_dependent() {
        return false;
    }

    let cuboid1 = Cuboid::new(aabb1.half_extents());
    let triangle2 = triangle2.translated(&-aabb1.center().coords);
    intersection_test_cuboid_triangle(&cuboid1, &triangle2)
}

/// Tests if a triangle, expressed in the local frame of a cuboid, intersects that cuboid.
#[inline]
pub fn intersection_test_cuboid_triangle(cube1: &Cuboid, triangle2: &Triangle) -> bool {
    let sep1 = sat::cuboid_triangle_find_local_separating_normal_oneway(cube1, triangle2).0;
    if sep1 > 0.0 {
        return false;
    }

    let sep2 = sat::triangle_cuboid_find_local_separating_normal_oneway(triangle2, cube1).0;
    if sep2 > 0.0 {
        return false;
    }

    let sep3 = sat::cuboid_triangle_find_local_separating_edge_twoway(cube1, triangle2).0;
    sep3 <= 0.0
}
