//! Transformation of boundary representations.

/// Voxelization of a 3D polygon mesh or implicit function.
pub mod voxelization;
