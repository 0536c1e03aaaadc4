use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::transformation::voxelization::VoxelizationError;
use arrayvec::ArrayVec;

/// The classification of a single voxel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum VoxelTag {
    /// Not classified yet. No voxel keeps this tag once a voxelization returns.
    #[default]
    Unknown,
    /// The voxel intersects the boundary of the voxelized shape.
    Boundary,
    /// The voxel lies strictly inside the voxelized shape.
    Inside,
    /// The voxel lies strictly outside the voxelized shape.
    Outside,
}

static_assertions::assert_eq_size!(VoxelTag, u8);

/// The set of neighbors considered around a voxel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// The 6 voxels sharing a face with the voxel.
    Face,
    /// The 18 voxels sharing a face or an edge with the voxel.
    Edge,
    /// The 26 voxels sharing a face, an edge, or a vertex with the voxel.
    Vertex,
}

impl Connectivity {
    /// The number of neighbors of a voxel far from the grid boundary.
    pub fn max_neighbors(self) -> usize {
        match self {
            Connectivity::Face => 6,
            Connectivity::Edge => 18,
            Connectivity::Vertex => 26,
        }
    }

    // Max number of coordinates a neighbor may differ by.
    fn max_offset_order(self) -> u32 {
        match self {
            Connectivity::Face => 1,
            Connectivity::Edge => 2,
            Connectivity::Vertex => 3,
        }
    }
}

/// The shape of a voxel grid: where it starts, how large its voxels are, and how many of them
/// there are along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct GridLayout {
    pub origin: Point<Real>,
    pub edge_length: Real,
    pub dimensions: Vector<u32>,
}

impl GridLayout {
    pub fn new(volume: &Aabb, resolution: u32) -> Result<Self, VoxelizationError> {
        if resolution == 0 {
            return Err(VoxelizationError::ZeroResolution);
        }

        let extents = volume.extents();
        let max_extent = extents.max();

        if !volume.is_valid() || !max_extent.is_finite() {
            return Err(VoxelizationError::InvalidVolume);
        }

        let edge_length = max_extent / resolution as Real;

        if max_extent <= 0.0 || edge_length <= 0.0 {
            return Err(VoxelizationError::DegenerateVolume);
        }

        let counts = extents.map(|extent| voxel_count(extent, edge_length));
        let too_large = || VoxelizationError::GridTooLarge {
            dimensions: [counts.x as u64, counts.y as u64, counts.z as u64],
        };

        if counts.iter().any(|n| *n > u32::MAX as Real) {
            return Err(too_large());
        }

        let dimensions = counts.map(|n| n as u32);
        let _ = (dimensions.x as usize)
            .checked_mul(dimensions.y as usize)
            .and_then(|n| n.checked_mul(dimensions.z as usize))
            .ok_or_else(too_large)?;

        Ok(Self {
            origin: volume.mins,
            edge_length,
            dimensions,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dimensions.x as usize * self.dimensions.y as usize * self.dimensions.z as usize
    }

    #[inline]
    pub fn contains_coords(&self, ijk: &Point<u32>) -> bool {
        ijk.x < self.dimensions.x && ijk.y < self.dimensions.y && ijk.z < self.dimensions.z
    }

    #[inline]
    pub fn linear_index(&self, ijk: &Point<u32>) -> usize {
        let dy = self.dimensions.y as usize;
        let dz = self.dimensions.z as usize;
        ijk.x as usize * dy * dz + ijk.y as usize * dz + ijk.z as usize
    }

    #[inline]
    pub fn grid_coords(&self, index: usize) -> Point<u32> {
        let dy = self.dimensions.y as usize;
        let dz = self.dimensions.z as usize;
        Point::new(
            (index / (dy * dz)) as u32,
            ((index / dz) % dy) as u32,
            (index % dz) as u32,
        )
    }

    #[inline]
    pub fn voxel_aabb(&self, ijk: &Point<u32>) -> Aabb {
        let mins = ijk.coords.map(|x| x as Real * self.edge_length);
        let maxs = ijk.coords.map(|x| (x as Real + 1.0) * self.edge_length);
        Aabb::new(self.origin + mins, self.origin + maxs)
    }

    #[inline]
    pub fn grid_aabb(&self) -> Aabb {
        let extents = self.dimensions.map(|n| n as Real * self.edge_length);
        Aabb::new(self.origin, self.origin + extents)
    }
}

// Number of voxels of length `edge_length` needed to cover `extent`. Quotients within a few
// ulps of an integer are snapped to it, so `1 / (1 / 3)` gives 3 and not 4.
fn voxel_count(extent: Real, edge_length: Real) -> Real {
    let quotient = extent / edge_length;
    let nearest = quotient.round();
    let count = if (quotient - nearest).abs() <= nearest.max(1.0) * Real::EPSILON * 4.0 {
        nearest
    } else {
        quotient.ceil()
    };

    count.max(1.0)
}

/// A regular grid of cubic voxels, each tagged with its position relative to a boundary.
///
/// The grid covers a bounding volume, starting at its minimum corner. All voxels have the same
/// edge length, chosen so that `resolution` voxels span the longest extent of the volume. Along
/// the other axes, the voxel count is rounded up so the whole volume is covered.
///
/// Voxels are addressed either by their grid coordinates `(i, j, k)` or by their linear index
/// `i * (dim_y * dim_z) + j * dim_z + k` (the `z` coordinate varies fastest).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    volume: Aabb,
    layout: GridLayout,
    tags: Vec<VoxelTag>,
    flood_seed: Option<usize>,
}

impl VoxelGrid {
    /// Creates a grid covering `volume`, with `resolution` voxels along its longest axis.
    ///
    /// Every voxel is initially [`VoxelTag::Unknown`]. The configuration is validated before the
    /// tag buffer is allocated.
    pub fn new(volume: Aabb, resolution: u32) -> Result<Self, VoxelizationError> {
        let layout = GridLayout::new(&volume, resolution)?;
        let tags = vec![VoxelTag::Unknown; layout.len()];

        Ok(Self {
            volume,
            layout,
            tags,
            flood_seed: None,
        })
    }

    pub(crate) fn layout(&self) -> GridLayout {
        self.layout
    }

    pub(crate) fn tags_mut(&mut self) -> &mut [VoxelTag] {
        &mut self.tags
    }

    pub(crate) fn set_flood_seed(&mut self, seed: Option<usize>) {
        self.flood_seed = seed;
    }

    /// The bounding volume this grid was built from.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.volume
    }

    /// The region actually covered by the voxels of this grid.
    ///
    /// It starts at the minimum corner of [`Self::aabb`] and may extend slightly beyond its
    /// maximum corner along the shortest axes.
    #[inline]
    pub fn grid_aabb(&self) -> Aabb {
        self.layout.grid_aabb()
    }

    /// The length of the edges of every voxel.
    #[inline]
    pub fn edge_length(&self) -> Real {
        self.layout.edge_length
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn dimensions(&self) -> Vector<u32> {
        self.layout.dimensions
    }

    /// The total number of voxels of this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Is this grid empty?
    ///
    /// Always `false`: a successfully created grid has at least one voxel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The tags of all the voxels, ordered by linear index.
    #[inline]
    pub fn tags(&self) -> &[VoxelTag] {
        &self.tags
    }

    /// The tag of the voxel with the given linear index.
    ///
    /// Returns `None` if `index >= self.len()`.
    #[inline]
    pub fn tag(&self, index: usize) -> Option<VoxelTag> {
        self.tags.get(index).copied()
    }

    /// The tag of the voxel with the given grid coordinates.
    ///
    /// Returns `None` if `ijk` lies outside of the grid.
    #[inline]
    pub fn tag_at(&self, ijk: &Point<u32>) -> Option<VoxelTag> {
        if self.layout.contains_coords(ijk) {
            self.tag(self.layout.linear_index(ijk))
        } else {
            None
        }
    }

    /// The number of voxels with the given tag.
    pub fn count(&self, tag: VoxelTag) -> usize {
        self.tags.iter().filter(|t| **t == tag).count()
    }

    /// Iterates through the grid coordinates and tag of every voxel, by increasing linear index.
    pub fn iter(&self) -> impl Iterator<Item = (Point<u32>, VoxelTag)> + '_ {
        let layout = self.layout;
        self.tags
            .iter()
            .enumerate()
            .map(move |(index, tag)| (layout.grid_coords(index), *tag))
    }

    /// The linear index of the voxel with the given grid coordinates.
    ///
    /// Returns `None` if `ijk` lies outside of the grid.
    #[inline]
    pub fn linear_index(&self, ijk: &Point<u32>) -> Option<usize> {
        if self.layout.contains_coords(ijk) {
            Some(self.layout.linear_index(ijk))
        } else {
            None
        }
    }

    /// The grid coordinates of the voxel with the given linear index.
    ///
    /// Returns `None` if `index >= self.len()`.
    #[inline]
    pub fn grid_coords(&self, index: usize) -> Option<Point<u32>> {
        if index < self.len() {
            Some(self.layout.grid_coords(index))
        } else {
            None
        }
    }

    /// The world-space box of the voxel with the given grid coordinates.
    ///
    /// Coordinates outside of the grid are accepted: the box is extrapolated.
    #[inline]
    pub fn voxel_aabb(&self, ijk: &Point<u32>) -> Aabb {
        self.layout.voxel_aabb(ijk)
    }

    /// The world-space center of the voxel with the given grid coordinates.
    #[inline]
    pub fn voxel_center(&self, ijk: &Point<u32>) -> Point<Real> {
        self.voxel_aabb(ijk).center()
    }

    /// The eight world-space corners of the voxel with the given grid coordinates.
    ///
    /// They are ordered as [`Aabb::vertices`].
    #[inline]
    pub fn voxel_corners(&self, ijk: &Point<u32>) -> [Point<Real>; 8] {
        self.voxel_aabb(ijk).vertices()
    }

    /// The grid coordinates of the voxel containing the given point.
    ///
    /// Points shared by several voxels are attributed to the one with the largest coordinates,
    /// except on the upper faces of the grid. Returns `None` if the point is outside of the
    /// grid.
    pub fn voxel_containing_point(&self, pt: &Point<Real>) -> Option<Point<u32>> {
        if !self.grid_aabb().contains_local_point(pt) {
            return None;
        }

        let local = (pt - self.layout.origin) / self.layout.edge_length;
        let mut result = Point::origin();

        for i in 0..DIM {
            let max_index = self.layout.dimensions[i] - 1;
            result[i] = (local[i].floor().max(0.0) as u32).min(max_index);
        }

        Some(result)
    }

    /// The grid coordinates of the neighbors of the voxel `ijk` that lie inside of the grid.
    pub fn neighbors(
        &self,
        ijk: &Point<u32>,
        connectivity: Connectivity,
    ) -> ArrayVec<Point<u32>, 26> {
        let mut result = ArrayVec::new();
        let max_order = connectivity.max_offset_order();
        let dims = self.layout.dimensions;

        for di in -1i64..=1 {
            for dj in -1i64..=1 {
                for dk in -1i64..=1 {
                    let order = di.unsigned_abs() + dj.unsigned_abs() + dk.unsigned_abs();
                    if order == 0 || order > max_order as u64 {
                        continue;
                    }

                    let i = ijk.x as i64 + di;
                    let j = ijk.y as i64 + dj;
                    let k = ijk.z as i64 + dk;

                    if i >= 0
                        && j >= 0
                        && k >= 0
                        && i < dims.x as i64
                        && j < dims.y as i64
                        && k < dims.z as i64
                    {
                        result.push(Point::new(i as u32, j as u32, k as u32));
                    }
                }
            }
        }

        result
    }

    /// The linear index of the voxel the exterior flood-fill started from.
    ///
    /// This is `None` if the grid was produced by the implicit voxelizer, or if the mesh
    /// voxelizer found no voxel of the outer shell free of the boundary. In the latter case
    /// every voxel not touching the boundary ends up [`VoxelTag::Inside`].
    #[inline]
    pub fn flood_seed(&self) -> Option<usize> {
        self.flood_seed
    }
}
