//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// The separating-axis helpers of [`crate::query::sat`] only rely on this function to project a
/// shape on a candidate axis.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The extent of this shape along `dir`, i.e., `max(p · dir)` for all `p` in the shape.
    ///
    /// The value is scaled by the norm of `dir`.
    #[inline]
    fn support_extent(&self, dir: &Vector<Real>) -> Real {
        self.local_support_point(dir).coords.dot(dir)
    }
}
