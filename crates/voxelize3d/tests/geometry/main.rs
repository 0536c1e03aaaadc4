extern crate nalgebra as na;

mod common;
mod grid_indexing;
mod implicit_sphere;
mod non_convex_prism;
mod octahedron_voxelization;
mod unit_cube_voxelization;
mod voxelization_determinism;
