//! Application of the Separating Axis Theorem (SAT) for intersection tests.
//!
//! Two convex shapes do not intersect if, and only if, there exists an axis onto which their
//! projections do not overlap. For a box and a triangle, 13 candidate axes are enough: the three
//! box face normals, the triangle normal, and the nine cross products between a box edge and a
//! triangle edge.
//!
//! Every function of this module works in the local frame of the cuboid (centered at the
//! origin), and returns the best separation found together with the axis it was measured along.
//! A positive separation means the shapes are disjoint. Axes are **not** normalized: separations
//! are scaled by the axis norm, which keeps their sign exact on inputs representable in binary.

pub use self::sat_cuboid_support_map::*;
pub use self::sat_cuboid_triangle::*;

mod sat_cuboid_support_map;
mod sat_cuboid_triangle;
