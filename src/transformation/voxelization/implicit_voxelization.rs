use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::transformation::voxelization::chunks::classify_chunks;
use crate::transformation::voxelization::{VoxelGrid, VoxelTag, VoxelizationError};

/// A scalar function whose zero level set is the boundary of a shape.
///
/// The shape is the set of points where the function is negative. Any closure
/// `Fn(&Point<Real>) -> Real + Sync` is an implicit function.
pub trait ImplicitFunction: Sync {
    /// Evaluates this function at the given point.
    fn eval(&self, pt: &Point<Real>) -> Real;
}

impl<F> ImplicitFunction for F
where
    F: Fn(&Point<Real>) -> Real + Sync,
{
    #[inline]
    fn eval(&self, pt: &Point<Real>) -> Real {
        self(pt)
    }
}

/// The signs of an implicit function seen at the corners of a voxel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CornerSigns(u8);

bitflags::bitflags! {
    impl CornerSigns: u8 {
        /// The function is positive on at least one corner.
        const POSITIVE = 1 << 0;
        /// The function is negative on at least one corner.
        const NEGATIVE = 1 << 1;
        /// The function is zero on at least one corner.
        const ZERO = 1 << 2;
        /// The function is NaN on at least one corner.
        const UNDEFINED = 1 << 3;
    }
}

impl CornerSigns {
    /// The sign flag of a single value.
    pub fn of(value: Real) -> Self {
        if value > 0.0 {
            Self::POSITIVE
        } else if value < 0.0 {
            Self::NEGATIVE
        } else if value == 0.0 {
            Self::ZERO
        } else {
            Self::UNDEFINED
        }
    }

    /// The tag of a voxel whose corners have these signs.
    ///
    /// Only a consistent strict sign decides between inside and outside. Anything else,
    /// including a corner lying exactly on the boundary, is a boundary voxel.
    pub fn voxel_tag(self) -> VoxelTag {
        if self == Self::POSITIVE {
            VoxelTag::Outside
        } else if self == Self::NEGATIVE {
            VoxelTag::Inside
        } else {
            VoxelTag::Boundary
        }
    }
}

/// Voxelizes the shape described by an implicit function.
///
/// The grid covers `volume`, with `resolution` voxels along its longest axis. Each voxel is
/// classified by the signs `f` takes at its eight corners (see [`CornerSigns::voxel_tag`]). A
/// sign change happening strictly inside a voxel, without reaching its corners, goes unnoticed.
///
/// No flood-fill is performed: the resulting grid has no flood seed.
pub fn voxelize_implicit(
    f: &(impl ImplicitFunction + ?Sized),
    volume: &Aabb,
    resolution: u32,
) -> Result<VoxelGrid, VoxelizationError> {
    let mut grid = VoxelGrid::new(*volume, resolution)?;
    let layout = grid.layout();

    let _ = classify_chunks(grid.tags_mut(), |start, chunk| {
        for (k, tag) in chunk.iter_mut().enumerate() {
            let ijk = layout.grid_coords(start + k);
            let signs = layout
                .voxel_aabb(&ijk)
                .vertices()
                .iter()
                .fold(CornerSigns::empty(), |acc, pt| acc | CornerSigns::of(f.eval(pt)));
            *tag = signs.voxel_tag();
        }

        None
    });

    Ok(grid)
}
