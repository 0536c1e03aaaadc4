//! Triangulation of simple planar polygons embedded in 3D.

use crate::math::{Point, Real, Vector};
use na::Point2;

#[derive(Eq, PartialEq, Debug)]
enum Direction {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line), or undefined because of a NaN.
    None,
}

/// Returns the direction of the turn made by the path `p1 -> p2 -> p3`.
fn corner_direction(p1: &Point2<Real>, p2: &Point2<Real>, p3: &Point2<Real>) -> Direction {
    let cross = (p2 - p1).perp(&(p3 - p2));

    if cross > 0.0 {
        Direction::Ccw
    } else if cross < 0.0 {
        Direction::Cw
    } else {
        Direction::None
    }
}

/// Returns `true` if `p` lies inside, or on the border of, the counter-clockwise triangle
/// `(v1, v2, v3)`.
fn is_point_in_triangle(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
) -> bool {
    corner_direction(v1, v2, p) != Direction::Cw
        && corner_direction(v2, v3, p) != Direction::Cw
        && corner_direction(v3, v1, p) != Direction::Cw
}

/// Twice the signed area of a 2D polygon, positive when it is counter-clockwise.
fn signed_area2(points: &[Point2<Real>]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| points[i].coords.perp(&points[(i + 1) % n].coords))
        .sum()
}

/// The normal of a 3D polygon computed with Newell’s method.
///
/// Its norm is twice the area of the polygon projected on the plane orthogonal to it.
pub(crate) fn newell_normal(points: &[Point<Real>]) -> Vector<Real> {
    let n = points.len();
    let mut normal = Vector::zeros();

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }

    normal
}

/// Projects a 3D polygon onto the coordinate plane orthogonal to the dominant axis of its
/// Newell normal.
///
/// Returns `None` if the polygon has no well-defined normal.
pub(crate) fn project_on_dominant_plane(points: &[Point<Real>]) -> Option<Vec<Point2<Real>>> {
    let normal = newell_normal(points);
    let dominant = normal.iamax();

    if !(normal[dominant].abs() > 0.0) {
        return None;
    }

    let (u, v) = ((dominant + 1) % 3, (dominant + 2) % 3);
    Some(points.iter().map(|p| Point2::new(p[u], p[v])).collect())
}

/// Returns `true` if the 2D polygon never turns clockwise along its boundary, once oriented
/// counter-clockwise.
pub(crate) fn is_convex(points: &[Point2<Real>]) -> bool {
    let n = points.len();
    let expected = if signed_area2(points) >= 0.0 {
        Direction::Cw
    } else {
        Direction::Ccw
    };

    (0..n).all(|i| {
        corner_direction(&points[i], &points[(i + 1) % n], &points[(i + 2) % n]) != expected
    })
}

/// The information stored for each vertex in the ear clipping algorithm.
#[derive(Clone, Default)]
struct VertexInfo {
    /// Whether the vertex has not been clipped yet.
    is_active: bool,
    /// Whether the vertex is the tip of an ear.
    is_ear: bool,
    /// How small the angle of the ear is. Ears with a smaller angle are clipped first.
    pointiness: Real,
    p_prev: usize,
    p_next: usize,
}

/// Updates `pointiness` and `is_ear` for the vertex `idx`.
///
/// Returns `false` if the pointiness is undefined (duplicate or non-finite points).
fn update_vertex(idx: usize, info: &mut [VertexInfo], points: &[Point2<Real>]) -> bool {
    let (p_prev, p_next) = (info[idx].p_prev, info[idx].p_next);
    let p = points[idx];
    let p1 = points[p_prev];
    let p3 = points[p_next];

    let vec1 = (p1 - p).normalize();
    let vec3 = (p3 - p).normalize();
    let pointiness = vec1.dot(&vec3);
    if pointiness.is_nan() {
        return false;
    }

    // An ear is a convex corner with no other remaining vertex inside the triangle it spans.
    // Vertices coincident with one of the corners don’t block it.
    let is_ear = corner_direction(&p1, &p, &p3) == Direction::Ccw
        && (0..points.len())
            .filter(|&i| info[i].is_active && i != p_prev && i != idx && i != p_next)
            .filter(|&i| points[i] != p1 && points[i] != p && points[i] != p3)
            .all(|i| !is_point_in_triangle(&points[i], &p1, &p, &p3));

    info[idx].pointiness = pointiness;
    info[idx].is_ear = is_ear;
    true
}

/// Ear clipping triangulation of a simple 2D polygon.
///
/// The polygon may be given in either orientation, and the output triangles share it. Their
/// indices refer to `vertices`. Returns `None` if the algorithm fails, which happens for
/// degenerate or self-intersecting polygons.
pub(crate) fn triangulate_ear_clipping(vertices: &[Point2<Real>]) -> Option<Vec<[u32; 3]>> {
    let n_vertices = vertices.len();
    if n_vertices < 3 {
        return None;
    }

    let area2 = signed_area2(vertices);
    if !(area2.abs() > 0.0) {
        return None;
    }

    // Work on a counter-clockwise copy, keeping track of the original indices.
    let reversed = area2 < 0.0;
    let mut order: Vec<usize> = (0..n_vertices).collect();
    if reversed {
        order.reverse();
    }
    let points: Vec<_> = order.iter().map(|i| vertices[*i]).collect();

    let mut vertex_info = vec![VertexInfo::default(); n_vertices];
    for (i, info) in vertex_info.iter_mut().enumerate() {
        info.is_active = true;
        info.p_prev = if i == 0 { n_vertices - 1 } else { i - 1 };
        info.p_next = if i == n_vertices - 1 { 0 } else { i + 1 };
    }
    if !(0..n_vertices).all(|i| update_vertex(i, &mut vertex_info, &points)) {
        return None;
    }

    let to_original = |[a, b, c]: [usize; 3]| {
        if reversed {
            [order[c] as u32, order[b] as u32, order[a] as u32]
        } else {
            [order[a] as u32, order[b] as u32, order[c] as u32]
        }
    };
    let mut output_indices = Vec::with_capacity(n_vertices - 2);

    for _ in 0..n_vertices - 3 {
        // Clip the pointiest ear.
        let (ear_i, _) = vertex_info
            .iter()
            .enumerate()
            .filter(|(_, info)| info.is_active && info.is_ear)
            .max_by(|(_, info1), (_, info2)| info1.pointiness.total_cmp(&info2.pointiness))?;

        vertex_info[ear_i].is_active = false;
        let VertexInfo { p_prev, p_next, .. } = vertex_info[ear_i];
        output_indices.push(to_original([p_prev, ear_i, p_next]));

        vertex_info[p_prev].p_next = p_next;
        vertex_info[p_next].p_prev = p_prev;

        if !update_vertex(p_prev, &mut vertex_info, &points)
            || !update_vertex(p_next, &mut vertex_info, &points)
        {
            return None;
        }
    }

    let (last, info) = vertex_info
        .iter()
        .enumerate()
        .find(|(_, info)| info.is_active)?;
    output_indices.push(to_original([info.p_prev, last, info.p_next]));

    Some(output_indices)
}
