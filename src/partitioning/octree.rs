use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::shape::{PolygonMesh, Triangle};
use smallvec::SmallVec;

/// Parameters controlling the subdivision of an [`Octree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OctreeParameters {
    /// The maximum depth of a leaf. The root has depth 0.
    pub max_depth: u32,
    /// A leaf holding more items than this is subdivided, unless it reached `max_depth`.
    pub max_items_per_leaf: usize,
}

impl Default for OctreeParameters {
    fn default() -> Self {
        Self {
            max_depth: 7,
            max_items_per_leaf: 16,
        }
    }
}

#[derive(Clone, Debug)]
struct OctreeNode {
    aabb: Aabb,
    // Index of the first of eight consecutive children.
    children: Option<u32>,
    items: Vec<u32>,
}

impl OctreeNode {
    fn leaf(aabb: Aabb, items: Vec<u32>) -> Self {
        Self {
            aabb,
            children: None,
            items,
        }
    }
}

/// An octree indexing a set of triangles by their `Aabb`.
///
/// This is the broad phase of the mesh voxelizer: given the box of a voxel, it returns the few
/// triangles that may intersect it. The tree is built once, then only read, so it can be shared
/// between threads.
///
/// A triangle is stored in every leaf its `Aabb` overlaps. Triangles with non-finite
/// coordinates can’t be located and are reported by every query.
#[derive(Clone, Debug)]
pub struct Octree {
    triangles: Vec<Triangle>,
    item_aabbs: Vec<Aabb>,
    nodes: Vec<OctreeNode>,
    unbounded: Vec<u32>,
    depth: u32,
}

impl Octree {
    /// Builds an octree indexing the given triangles.
    ///
    /// The id of a triangle is its index in `triangles`.
    pub fn new(triangles: Vec<Triangle>, params: &OctreeParameters) -> Self {
        let item_aabbs: Vec<_> = triangles.iter().map(|tri| tri.local_aabb()).collect();
        let mut unbounded = vec![];
        let mut root_items = vec![];
        let mut root_aabb = Aabb::new_invalid();

        for (id, aabb) in item_aabbs.iter().enumerate() {
            if aabb.is_valid() {
                root_aabb.merge(aabb);
                root_items.push(id as u32);
            } else {
                unbounded.push(id as u32);
            }
        }

        let mut result = Self {
            triangles,
            item_aabbs,
            nodes: vec![],
            unbounded,
            depth: 0,
        };

        if !root_items.is_empty() {
            result.nodes.push(OctreeNode::leaf(root_aabb, root_items));
            result.subdivide(params);
        }

        log::debug!(
            "Built octree over {} triangles: {} nodes, depth {}, {} unbounded triangles.",
            result.triangles.len(),
            result.nodes.len(),
            result.depth,
            result.unbounded.len()
        );

        result
    }

    /// Builds an octree indexing the triangles of the given mesh.
    ///
    /// The mesh polygons are split into triangles with [`PolygonMesh::triangles`].
    pub fn from_mesh(mesh: &(impl PolygonMesh + ?Sized), params: &OctreeParameters) -> Self {
        Self::new(mesh.triangles(), params)
    }

    fn subdivide(&mut self, params: &OctreeParameters) {
        let mut stack = vec![(0u32, 0u32)];

        while let Some((node_id, depth)) = stack.pop() {
            self.depth = self.depth.max(depth);
            let first_child = self.nodes.len() as u32;
            let node = &mut self.nodes[node_id as usize];

            if depth >= params.max_depth || node.items.len() <= params.max_items_per_leaf {
                continue;
            }

            let items = std::mem::take(&mut node.items);
            node.children = Some(first_child);
            let parts = node.aabb.split_at_center();

            for (k, part) in parts.into_iter().enumerate() {
                let child_items = items
                    .iter()
                    .copied()
                    .filter(|id| self.item_aabbs[*id as usize].intersects(&part))
                    .collect();
                self.nodes.push(OctreeNode::leaf(part, child_items));
                stack.push((first_child + k as u32, depth + 1));
            }
        }
    }

    /// Collects the ids of the triangles whose `Aabb` intersects `aabb`.
    ///
    /// `out` is cleared first. On return, it is sorted and free of duplicates.
    pub fn intersect_aabb(&self, aabb: &Aabb, out: &mut Vec<u32>) {
        out.clear();

        let mut stack: SmallVec<[u32; 64]> = SmallVec::new();
        if !self.nodes.is_empty() {
            stack.push(0);
        }

        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id as usize];

            if !node.aabb.intersects(aabb) {
                continue;
            }

            match node.children {
                Some(first) => stack.extend(first..first + 8),
                None => out.extend(
                    node.items
                        .iter()
                        .copied()
                        .filter(|id| self.item_aabbs[*id as usize].intersects(aabb)),
                ),
            }
        }

        out.extend_from_slice(&self.unbounded);
        out.sort_unstable();
        out.dedup();
    }

    /// The triangle with the given id.
    #[inline]
    pub fn triangle(&self, id: u32) -> &Triangle {
        &self.triangles[id as usize]
    }

    /// All the triangles indexed by this octree.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The number of triangles indexed by this octree.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Does this octree index no triangle at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The number of nodes, internal and leaves, of this octree.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The depth of the deepest leaf of this octree.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The `Aabb` of the root node, i.e., of every triangle with finite coordinates.
    ///
    /// Returns `None` if there is no such triangle.
    pub fn root_aabb(&self) -> Option<&Aabb> {
        self.nodes.first().map(|node| &node.aabb)
    }
}
