use std::path::Path;

use serde::{Deserialize, Serialize};
use terrascape_core::constants::{CUBE_VERTICES, MAX_COLUMN_HEIGHT, MAX_OCTAVES};
use terrascape_core::{MeshVertex, TerrainError, Vertex3};
use terrascape_noise::FractalSettings;

/// Largest accepted grid side. Configs must also keep their worst-case
/// vertex buffer within `u32` bytes, see [`TerrainConfig::max_vertex_bytes`].
pub const MAX_GRID_SIZE: u32 = 4096;

/// One fractal noise term contributing to a column height:
/// `perlin2d(x + x_offset, z + z_offset) * amplitude + bias`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    pub frequency: f32,
    pub octaves: u32,
    /// Lattice shift so layers sharing a field sample different regions.
    pub x_offset: f32,
    pub z_offset: f32,
    /// Height multiplier. `None` uses the config's `size_y`.
    pub amplitude: Option<f32>,
    pub bias: f32,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self::base()
    }
}

impl NoiseLayer {
    /// Broad low-frequency layer shaping hills and valleys.
    pub fn base() -> Self {
        Self {
            frequency: 0.03,
            octaves: 3,
            x_offset: 100.0,
            z_offset: 0.0,
            amplitude: None,
            bias: -10.0,
        }
    }

    /// Fine single-octave roughness added on top of the base.
    pub fn detail() -> Self {
        Self {
            frequency: 0.11,
            octaves: 1,
            x_offset: 0.0,
            z_offset: 0.0,
            amplitude: Some(4.0),
            bias: 0.0,
        }
    }

    pub fn settings(&self) -> FractalSettings {
        FractalSettings::new(self.frequency, self.octaves)
    }

    fn validate(&self, name: &'static str) -> Result<(), TerrainError> {
        if !self.frequency.is_finite() {
            return Err(TerrainError::invalid(name, "frequency must be finite"));
        }
        if self.octaves > MAX_OCTAVES {
            return Err(TerrainError::invalid(
                name,
                format!("octaves {} exceeds maximum {MAX_OCTAVES}", self.octaves),
            ));
        }
        let finite = [self.x_offset, self.z_offset, self.bias, self.amplitude.unwrap_or(0.0)]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(TerrainError::invalid(
                name,
                "offsets, amplitude and bias must be finite",
            ));
        }
        Ok(())
    }
}

/// Parameters for voxel terrain assembly. `Default` reproduces the stock
/// 100x100 demo landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Cells along X and Z.
    pub size_xz: u32,
    /// Vertical scale of the base layer.
    pub size_y: u32,
    /// Edge length of each emitted cube.
    pub tile_scale: f32,
    /// First Y level emitted in every column.
    pub floor: i32,
    pub base: NoiseLayer,
    pub detail: NoiseLayer,
    /// Checkerboard colours, indexed by `(x + z) % 2`.
    pub palette: [[f32; 3]; 2],
    /// Fixed noise seed; `None` shuffles from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size_xz: 100,
            size_y: 20,
            tile_scale: 0.2,
            floor: -5,
            base: NoiseLayer::base(),
            detail: NoiseLayer::detail(),
            palette: [[0.0, 0.8, 0.0], [0.0, 0.5, 0.0]],
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Amplitude applied to `layer`, resolving `None` to `size_y`.
    pub fn amplitude_of(&self, layer: &NoiseLayer) -> f32 {
        layer.amplitude.unwrap_or(self.size_y as f32)
    }

    /// Largest magnitude `layer` can add to a column height. Fractal samples
    /// lie in `[0, 2)`.
    fn layer_reach(&self, layer: &NoiseLayer) -> f32 {
        self.amplitude_of(layer).abs() * 2.0 + layer.bias.abs()
    }

    /// Upper bound on any column height this config can produce.
    pub fn height_reach(&self) -> f32 {
        self.layer_reach(&self.base) + self.layer_reach(&self.detail)
    }

    /// Most cubes a single column can receive.
    pub fn max_column_cubes(&self) -> u32 {
        let top = self.height_reach().ceil() as i64;
        top.saturating_sub(self.floor as i64).clamp(0, u32::MAX as i64) as u32
    }

    /// Vertex buffer size if every column reached `height_reach`.
    pub fn max_vertex_bytes(&self) -> u64 {
        let columns = self.size_xz as u64 * self.size_xz as u64;
        let vertex_bytes = (CUBE_VERTICES as usize * Vertex3::STRIDE) as u64;
        columns
            .saturating_mul(self.max_column_cubes() as u64)
            .saturating_mul(vertex_bytes)
    }

    /// Integer half extent used to centre the grid on the origin.
    pub fn half_extent(&self) -> i32 {
        (self.size_xz / 2) as i32
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.size_xz == 0 {
            return Err(TerrainError::invalid("size_xz", "grid must have at least one cell"));
        }
        if self.size_xz > MAX_GRID_SIZE {
            return Err(TerrainError::invalid(
                "size_xz",
                format!("{} exceeds maximum {MAX_GRID_SIZE}", self.size_xz),
            ));
        }
        if !self.tile_scale.is_finite() || self.tile_scale <= 0.0 {
            return Err(TerrainError::invalid(
                "tile_scale",
                format!("must be positive and finite, got {}", self.tile_scale),
            ));
        }
        if self.palette.iter().flatten().any(|c| !c.is_finite()) {
            return Err(TerrainError::invalid("palette", "colours must be finite"));
        }
        self.base.validate("base")?;
        self.detail.validate("detail")?;
        if self.floor.unsigned_abs() > MAX_COLUMN_HEIGHT as u32 {
            return Err(TerrainError::invalid(
                "floor",
                format!("{} is outside +-{MAX_COLUMN_HEIGHT}", self.floor),
            ));
        }
        let reach = self.height_reach();
        if reach > MAX_COLUMN_HEIGHT as f32 {
            return Err(TerrainError::invalid(
                "height",
                format!("amplitudes and biases reach {reach}, maximum is {MAX_COLUMN_HEIGHT}"),
            ));
        }
        let bytes = self.max_vertex_bytes();
        if bytes > u32::MAX as u64 {
            return Err(TerrainError::invalid(
                "size_xz",
                format!("worst-case vertex buffer of {bytes} bytes exceeds u32"),
            ));
        }
        Ok(())
    }
}

/// Parse a terrain config from RON text. Missing fields take their defaults.
pub fn load_config_from_str(ron_str: &str) -> Result<TerrainConfig, TerrainError> {
    let options = ron::Options::default();
    let config: TerrainConfig = options.from_str(ron_str)?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a RON terrain config file.
pub fn load_config_from_path(path: &Path) -> Result<TerrainConfig, TerrainError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TerrainError::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    let config = load_config_from_str(&contents)?;
    log::debug!("Loaded terrain config from {}", path.display());
    Ok(config)
}
