//! Voxel terrain assembly: turns noise-field column heights into stacks of
//! cubes in a single indexed mesh.

pub mod config;
pub mod terrain;

pub use config::{load_config_from_path, load_config_from_str, NoiseLayer, TerrainConfig};
pub use terrain::{TerrainGenerator, TerrainMesh, TerrainStats};

use terrascape_core::TerrainError;

/// Validate `config`, seed a noise field from it and build the terrain mesh.
pub fn generate(config: TerrainConfig) -> Result<TerrainMesh, TerrainError> {
    Ok(TerrainGenerator::new(config)?.generate())
}
