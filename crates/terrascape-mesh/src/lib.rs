//! Indexed triangle mesh accumulation: a growable vertex/index builder,
//! quad and cube emitters, and the finished mesh handed to the renderer.

pub mod builder;
pub mod mesh;
pub mod primitives;

pub use builder::GeometryBuilder;
pub use mesh::Mesh;
pub use primitives::CubeFace;
