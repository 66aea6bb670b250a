use glam::Vec3;
use serde::{Deserialize, Serialize};
use terrascape_core::constants::{CUBE_INDICES, CUBE_VERTICES};
use terrascape_core::{TerrainError, Vertex3};
use terrascape_mesh::{GeometryBuilder, Mesh};
use terrascape_noise::{NoiseField, NoiseSeed};

use crate::config::{NoiseLayer, TerrainConfig};

/// Summary of one terrain build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainStats {
    pub columns: u32,
    pub cubes: u32,
    /// Most cubes emitted by a single column.
    pub tallest_column: u32,
    pub min_height: f32,
    pub max_height: f32,
}

/// Finished terrain: the mesh plus what went into it.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    pub mesh: Mesh<Vertex3>,
    pub stats: TerrainStats,
}

/// Voxel-column terrain generator driven by two noise layers.
pub struct TerrainGenerator {
    field: NoiseField,
    config: TerrainConfig,
}

impl TerrainGenerator {
    /// Validate `config` and build a noise field from its seed.
    pub fn new(config: TerrainConfig) -> Result<Self, TerrainError> {
        let field = NoiseField::from_seed(NoiseSeed::from(config.seed));
        Self::with_field(field, config)
    }

    /// Use an existing field; `config.seed` is ignored.
    pub fn with_field(field: NoiseField, config: TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        Ok(Self { field, config })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    fn layer_height(&self, layer: &NoiseLayer, x: i32, z: i32) -> f32 {
        let sample = self.field.sample(
            &layer.settings(),
            x as f32 + layer.x_offset,
            z as f32 + layer.z_offset,
        );
        sample * self.config.amplitude_of(layer) + layer.bias
    }

    /// Height bound for the column at lattice cell `(x, z)`: cubes are
    /// emitted for every integer `y` from the floor while `y < height`.
    pub fn column_height(&self, x: i32, z: i32) -> f32 {
        self.layer_height(&self.config.base, x, z) + self.layer_height(&self.config.detail, x, z)
    }

    /// Checkerboard colour of cell `(x, z)`.
    pub fn column_color(&self, x: i32, z: i32) -> Vec3 {
        Vec3::from(self.config.palette[(x + z).rem_euclid(2) as usize])
    }

    /// Number of cubes the column with this height bound receives: one per
    /// integer `y` from the floor while `y < height`.
    pub fn column_cubes(&self, height: f32) -> u32 {
        if height.is_nan() {
            return 0;
        }
        let top = height.ceil() as i64;
        top.saturating_sub(self.config.floor as i64)
            .clamp(0, self.config.max_column_cubes() as i64) as u32
    }

    /// Emit every terrain cube into `builder` and report what was emitted.
    pub fn build_into(&self, builder: &mut GeometryBuilder<Vertex3>) -> TerrainStats {
        let size = self.config.size_xz as i32;
        let half = self.config.half_extent();
        let origin = Vec3::new(-half as f32, 0.0, -half as f32);

        let mut stats = TerrainStats {
            min_height: f32::INFINITY,
            max_height: f32::NEG_INFINITY,
            ..Default::default()
        };

        for x in 0..size {
            for z in 0..size {
                let color = self.column_color(x, z);
                let height = self.column_height(x, z);
                let cubes = self.column_cubes(height);

                builder.reserve(
                    (cubes * CUBE_VERTICES) as usize,
                    (cubes * CUBE_INDICES) as usize,
                );
                for dy in 0..cubes as i32 {
                    let y = self.config.floor + dy;
                    let position = origin + Vec3::new(x as f32, y as f32, z as f32);
                    builder.push_cube(self.config.tile_scale, position, color);
                }

                stats.columns += 1;
                stats.cubes += cubes;
                stats.tallest_column = stats.tallest_column.max(cubes);
                stats.min_height = stats.min_height.min(height);
                stats.max_height = stats.max_height.max(height);
            }
        }

        log::debug!(
            "Terrain heights span [{:.2}, {:.2}], tallest column {} cubes",
            stats.min_height,
            stats.max_height,
            stats.tallest_column
        );
        stats
    }

    /// Build the complete terrain mesh.
    pub fn generate(&self) -> TerrainMesh {
        let mut builder = GeometryBuilder::new();
        let stats = self.build_into(&mut builder);
        if stats.cubes == 0 {
            log::warn!(
                "Terrain config produced no cubes (floor {}, max height {:.2})",
                self.config.floor,
                stats.max_height
            );
        }
        let mesh = builder.finish();
        log::info!(
            "Generated {}x{} terrain: {} cubes, {} vertices ({} bytes), {} indices ({} bytes)",
            self.config.size_xz,
            self.config.size_xz,
            stats.cubes,
            mesh.vertex_count(),
            mesh.vertices_size_bytes(),
            mesh.index_count(),
            mesh.indices_size_bytes()
        );
        TerrainMesh { mesh, stats }
    }
}
