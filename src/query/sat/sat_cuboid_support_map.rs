use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Cuboid, SupportMap};

/// Computes the separation between a cuboid and a convex shape along both directions of `axis1`.
///
/// Both shapes are expressed in the local frame of `cube1`. The returned axis is either `axis1`
/// or `-axis1`, whichever gives the largest separation.
pub fn cuboid_support_map_compute_separation_wrt_local_line(
    cube1: &Cuboid,
    shape2: &impl SupportMap,
    axis1: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let separation1 = {
        let pt2 = shape2.local_support_point(&-axis1);
        pt2.coords.dot(axis1) - cube1.support_extent(axis1)
    };

    let separation2 = {
        let axis = -axis1;
        let pt2 = shape2.local_support_point(axis1);
        pt2.coords.dot(&axis) - cube1.support_extent(&axis)
    };

    if separation1 > separation2 {
        (separation1, *axis1)
    } else {
        (separation2, -axis1)
    }
}

/// Finds the best separating axis among `axes`, tested in both directions.
///
/// Axes with a (near-)zero norm are skipped: they come from parallel edges and cannot separate
/// anything. Returns `-Real::MAX` if every axis was skipped.
pub fn cuboid_support_map_find_local_separating_edge_twoway(
    cube1: &Cuboid,
    shape2: &impl SupportMap,
    axes: &[Vector<Real>],
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for axis1 in axes {
        if axis1.norm_squared() > DEFAULT_EPSILON * DEFAULT_EPSILON {
            let (separation, axis1) =
                cuboid_support_map_compute_separation_wrt_local_line(cube1, shape2, axis1);

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis1;
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating normal among the face normals of the cuboid.
pub fn cuboid_support_map_find_local_separating_normal_oneway<S: SupportMap>(
    cube1: &Cuboid,
    shape2: &S,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..3 {
        for sign in [1.0, -1.0] {
            let mut axis1 = Vector::zeros();
            axis1[i] = sign;
            let pt2 = shape2.local_support_point(&-axis1);
            let separation = pt2[i] * sign - cube1.half_extents[i];

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis1;
            }
        }
    }

    (best_separation, best_dir)
}
