use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::sat;
use crate::shape::{Cuboid, SupportMap, Triangle};

/// Finds the best separating axis among the cross products of the cuboid edges and the
/// triangle edges.
///
/// The triangle must be expressed in the local frame of the cuboid.
pub fn cuboid_triangle_find_local_separating_edge_twoway(
    cube1: &Cuboid,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    let [x2, y2, z2] = triangle2.edges_scaled_directions();

    // We have 3 * 3 = 9 axes to test.
    let axes = [
        // Vector::{x, y ,z}().cross(x2)
        Vector::new(0.0, -x2.z, x2.y),
        Vector::new(x2.z, 0.0, -x2.x),
        Vector::new(-x2.y, x2.x, 0.0),
        // Vector::{x, y ,z}().cross(y2)
        Vector::new(0.0, -y2.z, y2.y),
        Vector::new(y2.z, 0.0, -y2.x),
        Vector::new(-y2.y, y2.x, 0.0),
        // Vector::{x, y ,z}().cross(z2)
        Vector::new(0.0, -z2.z, z2.y),
        Vector::new(z2.z, 0.0, -z2.x),
        Vector::new(-z2.y, z2.x, 0.0),
    ];

    sat::cuboid_support_map_find_local_separating_edge_twoway(cube1, triangle2, &axes)
}

/// Finds the best separating normal among the face normals of the cuboid.
///
/// The triangle must be expressed in the local frame of the cuboid.
pub fn cuboid_triangle_find_local_separating_normal_oneway(
    cube1: &Cuboid,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    sat::cuboid_support_map_find_local_separating_normal_oneway(cube1, triangle2)
}

/// Computes the separation of a cuboid from the supporting plane of a triangle.
///
/// The triangle must be expressed in the local frame of the cuboid. The plane normal is oriented
/// toward the cuboid center. Returns `-Real::MAX` if the triangle has no well-defined normal.
pub fn triangle_cuboid_find_local_separating_normal_oneway(
    triangle1: &Triangle,
    cube2: &Cuboid,
) -> (Real, Vector<Real>) {
    let normal = triangle1.scaled_normal();

    if normal.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        return (-Real::MAX, Vector::zeros());
    }

    let axis1 = if normal.dot(&-triangle1.a.coords) >= 0.0 {
        normal
    } else {
        -normal
    };
    let pt2 = cube2.local_support_point(&-axis1);

    ((pt2 - triangle1.a).dot(&axis1), axis1)
}
