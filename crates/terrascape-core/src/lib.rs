//! Shared types for the terrascape generators: the GPU vertex record,
//! workspace-wide constants and the error type used by configuration loading.

pub mod constants;
pub mod error;
pub mod types;

pub use error::TerrainError;
pub use types::{MeshVertex, Vertex2, Vertex3};
