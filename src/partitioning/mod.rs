//! Spatial partitioning tools.

pub use self::octree::{Octree, OctreeParameters};

mod octree;
