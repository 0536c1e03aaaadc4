//! Non-persistent geometric queries.
//!
//! The voxelizers only need a single kind of query: deciding whether a triangle of the input
//! surface touches a voxel. It is answered by [`details::intersection_test_aabb_triangle`], which
//! relies on the Separating Axis Theorem building blocks exported by [`sat`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule have the form
//! `[operation]_[shape1]_[shape2]()`, where `[shape1]` and `[shape2]` identify the types of the
//! shapes passed to the function.

pub mod sat;

mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
