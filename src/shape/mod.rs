//! Shapes supported by voxelize3d.

pub use self::cuboid::Cuboid;
pub use self::polygon_mesh::{PolyMesh, PolyMeshBuilderError, PolygonIndices, PolygonMesh};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod cuboid;
mod ear_clipping;
mod polygon_mesh;
#[doc(hidden)]
pub mod support_map;
mod triangle;
