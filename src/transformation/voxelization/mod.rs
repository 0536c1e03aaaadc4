//! Conversion of boundary representations into voxel grids.
//!
//! Two kinds of boundaries are supported:
//! - closed polygon meshes, with [`voxelize_mesh`] and [`voxelize_mesh_within`];
//! - implicit functions, with [`voxelize_implicit`].
//!
//! Both produce a [`VoxelGrid`] where every voxel is tagged [`VoxelTag::Inside`],
//! [`VoxelTag::Outside`], or [`VoxelTag::Boundary`].

pub use self::chunks::PARALLEL_CHUNK_SIZE;
pub use self::error::VoxelizationError;
pub use self::implicit_voxelization::{voxelize_implicit, CornerSigns, ImplicitFunction};
pub use self::mesh_voxelization::{voxelize_mesh, voxelize_mesh_within};
pub use self::voxel_grid::{Connectivity, VoxelGrid, VoxelTag};

mod chunks;
mod error;
mod flood_fill;
mod implicit_voxelization;
mod mesh_voxelization;
mod voxel_grid;
