//! Polygonal surface meshes, as consumed by the mesh voxelizer.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{ear_clipping, Triangle};
use smallvec::SmallVec;

/// The index buffer of a single polygon.
///
/// Triangles and quads are stored inline.
pub type PolygonIndices = SmallVec<[u32; 4]>;

/// Error indicating that a polygon mesh could not be created.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolyMeshBuilderError {
    /// A polygon mesh must contain at least one polygon.
    #[error("A polygon mesh must contain at least one polygon.")]
    EmptyPolygons,
    /// A polygon has less than three vertices.
    #[error("Polygon {polygon} has only {num_vertices} vertices (at least 3 are needed).")]
    DegeneratePolygon {
        /// The index of the faulty polygon.
        polygon: usize,
        /// The number of vertices of the faulty polygon.
        num_vertices: usize,
    },
    /// A polygon references a vertex that does not exist.
    #[error("Polygon {polygon} references vertex {vertex}, but the mesh only has {num_vertices} vertices.")]
    VertexOutOfBounds {
        /// The index of the faulty polygon.
        polygon: usize,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A polygonal surface mesh.
///
/// This is the abstraction the mesh voxelizer relies on: a set of vertices, and an enumerable
/// set of (possibly non-triangular) polygons indexing them. Polygons are reduced to triangles
/// with [`PolygonMesh::triangles`] before being indexed by an [`Octree`](crate::partitioning::Octree).
pub trait PolygonMesh {
    /// The vertex buffer of this mesh.
    fn vertices(&self) -> &[Point<Real>];

    /// The number of polygons of this mesh.
    fn num_polygons(&self) -> usize;

    /// The vertex indices of the `i`-th polygon, in order along its boundary.
    fn polygon(&self, i: usize) -> &[u32];

    /// The `Aabb` of the vertices of this mesh.
    fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices().iter().copied())
    }

    /// Splits every polygon of this mesh into triangles.
    ///
    /// A polygon with `n` vertices yields `n - 2` triangles. Triangles and convex polygons are
    /// fan-triangulated around their first vertex. Other polygons are projected on the
    /// coordinate plane where their area is largest and ear-clipped there, falling back to a fan
    /// if the polygon is degenerate or self-intersecting. Polygons with less than three
    /// vertices, or referencing vertices that don’t exist, are skipped.
    fn triangles(&self) -> Vec<Triangle> {
        let vertices = self.vertices();
        let mut result = Vec::with_capacity(self.num_polygons());

        for i in 0..self.num_polygons() {
            let poly = self.polygon(i);
            let Some(pts) = poly
                .iter()
                .map(|vid| vertices.get(*vid as usize).copied())
                .collect::<Option<SmallVec<[Point<Real>; 4]>>>()
            else {
                log::warn!("Skipping polygon {i} referencing a missing vertex.");
                continue;
            };

            if pts.len() > 3 {
                if let Some(projected) = ear_clipping::project_on_dominant_plane(&pts) {
                    if !ear_clipping::is_convex(&projected) {
                        if let Some(indices) = ear_clipping::triangulate_ear_clipping(&projected) {
                            result.extend(indices.iter().map(|[a, b, c]| {
                                Triangle::new(pts[*a as usize], pts[*b as usize], pts[*c as usize])
                            }));
                            continue;
                        }

                        log::warn!("Failed to ear-clip polygon {i}, fan-triangulating it instead.");
                    }
                }
            }

            for k in 1..pts.len().saturating_sub(1) {
                result.push(Triangle::new(pts[0], pts[k], pts[k + 1]));
            }
        }

        result
    }
}

/// A surface mesh made of arbitrary polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PolyMesh {
    vertices: Vec<Point<Real>>,
    polygons: Vec<PolygonIndices>,
}

impl PolyMesh {
    /// Creates a new polygon mesh from a vertex buffer and the index buffers of its polygons.
    ///
    /// Every polygon must have at least three vertices, and every index must be smaller than
    /// `vertices.len()`.
    pub fn new(
        vertices: Vec<Point<Real>>,
        polygons: Vec<PolygonIndices>,
    ) -> Result<Self, PolyMeshBuilderError> {
        if polygons.is_empty() {
            return Err(PolyMeshBuilderError::EmptyPolygons);
        }

        for (polygon, indices) in polygons.iter().enumerate() {
            if indices.len() < 3 {
                return Err(PolyMeshBuilderError::DegeneratePolygon {
                    polygon,
                    num_vertices: indices.len(),
                });
            }

            if let Some(vertex) = indices.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(PolyMeshBuilderError::VertexOutOfBounds {
                    polygon,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self { vertices, polygons })
    }

    /// Creates a new polygon mesh whose polygons are all triangles.
    pub fn from_triangles(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, PolyMeshBuilderError> {
        let polygons = indices
            .into_iter()
            .map(|idx| PolygonIndices::from_slice(&idx))
            .collect();
        Self::new(vertices, polygons)
    }

    /// The closed surface of the given `Aabb`, made of six outward-facing quads.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let vertices = aabb.vertices().to_vec();
        let quads: [[u32; 4]; 6] = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [3, 7, 6, 2],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ];
        let polygons = quads.iter().map(|q| PolygonIndices::from_slice(q)).collect();

        Self { vertices, polygons }
    }

    /// The polygons of this mesh.
    pub fn polygons(&self) -> &[PolygonIndices] {
        &self.polygons
    }
}

impl PolygonMesh for PolyMesh {
    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    #[inline]
    fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    fn polygon(&self, i: usize) -> &[u32] {
        &self.polygons[i]
    }
}
