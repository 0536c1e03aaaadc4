//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

use na::Unit;

/// A triangle shape.
///
/// This is the only boundary primitive understood by the mesh voxelizer: every polygon of the
/// input surface is reduced to triangles before being indexed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The directions of the edges of this triangle: `[AB, BC, CA]`, not normalized.
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Tests if this triangle is affinely dependent, i.e., its points are almost aligned.
    ///
    /// Such a triangle has no well-defined normal and (almost) zero area. The test is relative
    /// to the length of the triangle edges so it behaves the same at every scale.
    pub fn is_affinely_dependent(&self) -> bool {
        const EPS: Real = crate::math::DEFAULT_EPSILON * 100.0;

        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        let scale = p1p2.norm_squared() * p1p3.norm_squared();
        relative_eq!(
            p1p2.cross(&p1p3).norm_squared(),
            0.0,
            epsilon = EPS * EPS * scale
        )
    }

    /// Checks that all the coordinates of this triangle are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.vertices()
            .iter()
            .all(|pt| pt.coords.iter().all(|x| x.is_finite()))
    }

    /// Returns this triangle translated by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// Computes the local-space `Aabb` of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let mins = self.a.inf(&self.b).inf(&self.c);
        let maxs = self.a.sup(&self.b).sup(&self.c);
        Aabb::new(mins, maxs)
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let d1 = self.a.coords.dot(dir);
        let d2 = self.b.coords.dot(dir);
        let d3 = self.c.coords.dot(dir);

        if d1 > d2 {
            if d1 > d3 {
                self.a
            } else {
                self.c
            }
        } else if d2 > d3 {
            self.b
        } else {
            self.c
        }
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::shape::{SupportMap, Triangle};

    #[test]
    fn triangle_area_and_normal() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        );

        assert_relative_eq!(tri.area(), 2.0);
        assert_eq!(tri.normal().map(|n| n.into_inner()), Some(Vector::z()));
        assert!(!tri.is_affinely_dependent());
    }

    #[test]
    fn degenerate_triangles_are_detected() {
        let collinear = Triangle::new(
            Point::origin(),
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0),
        );
        let coincident = Triangle::new(Point::origin(), Point::origin(), Point::origin());

        assert!(collinear.is_affinely_dependent());
        assert!(collinear.normal().is_none());
        assert!(coincident.is_affinely_dependent());
        assert_eq!(coincident.area(), 0.0);

        let tiny = Triangle::new(
            Point::origin(),
            Point::new(1.0e-3, 0.0, 0.0),
            Point::new(0.0, 1.0e-3, 0.0),
        );
        assert!(!tiny.is_affinely_dependent());
    }

    #[test]
    fn triangle_aabb_and_support() {
        let tri = Triangle::new(
            Point::new(1.0, -1.0, 0.0),
            Point::new(-2.0, 0.5, 3.0),
            Point::new(0.0, 4.0, -1.0),
        );
        let aabb = tri.local_aabb();

        assert_eq!(aabb.mins, Point::new(-2.0, -1.0, -1.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 3.0));
        assert_eq!(tri.local_support_point(&Vector::y()), tri.c);
        assert_eq!(tri.local_support_point(&-Vector::x()), tri.b);
        assert_eq!(tri.support_extent(&Vector::z()), 3.0);
    }
}
