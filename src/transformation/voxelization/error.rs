/// Errors that can occur before a voxelization starts.
///
/// They all describe an invalid configuration and are reported before the voxel grid is
/// allocated. Geometric degeneracies of the input surface are never errors: they are resolved
/// voxel by voxel, conservatively.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelizationError {
    /// The requested resolution is zero.
    #[error("The voxelization resolution must be at least 1.")]
    ZeroResolution,
    /// The bounding volume has non-finite or inverted bounds.
    #[error("The bounding volume to voxelize has non-finite or inverted bounds.")]
    InvalidVolume,
    /// The bounding volume has a zero extent along every axis.
    #[error("The bounding volume to voxelize is degenerate (its longest extent is zero).")]
    DegenerateVolume,
    /// The total number of voxels can’t be represented in memory.
    #[error("The voxel grid would be too large: {dimensions:?} voxels.")]
    GridTooLarge {
        /// The number of voxels requested along each axis, saturated to `u64::MAX`.
        dimensions: [u64; 3],
    },
}
