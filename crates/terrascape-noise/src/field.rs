use terrascape_core::constants::MAX_HASH_VALUE;

use crate::fractal::FractalSettings;
use crate::permutation::{NoiseSeed, PermutationTable};

/// Value-noise field over the integer lattice, backed by one permutation table.
///
/// Every function is total: lattice coordinates wrap modulo 256, so any finite
/// input stays in bounds.
#[derive(Debug, Clone)]
pub struct NoiseField {
    table: PermutationTable,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseField {
    /// Field with a freshly shuffled, non-reproducible table.
    pub fn new() -> Self {
        Self::from_seed(NoiseSeed::Entropy)
    }

    /// Reproducible field: the same seed always yields the same values.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_seed(NoiseSeed::Fixed(seed))
    }

    pub fn from_seed(seed: NoiseSeed) -> Self {
        Self::from_table(PermutationTable::shuffled(seed))
    }

    /// Field over an explicit, pre-built permutation.
    pub fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Hash a single lattice coordinate into `[0, 256)`.
    #[inline]
    pub fn noise1d(&self, x: i32) -> i32 {
        self.table.get(x)
    }

    /// Hash a 2D lattice coordinate into `[0, 256)`.
    #[inline]
    pub fn noise(&self, x: i32, y: i32) -> i32 {
        self.table.get(self.table.get(x).wrapping_add(y))
    }

    /// `a + t * (b - a)`.
    #[inline]
    pub fn lin_inter(a: f32, b: f32, t: f32) -> f32 {
        a + t * (b - a)
    }

    /// Linear interpolation after a smoothstep ease of `t`, so the field has
    /// a continuous first derivative across lattice lines.
    #[inline]
    pub fn smooth_inter(a: f32, b: f32, t: f32) -> f32 {
        Self::lin_inter(a, b, t * t * (3.0 - 2.0 * t))
    }

    /// Smoothed value noise at a real-valued position, in `[0, 1]`.
    pub fn noise2d(&self, x: f32, y: f32) -> f32 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let x_int = x_floor as i32;
        let y_int = y_floor as i32;
        let x_frac = x - x_floor;
        let y_frac = y - y_floor;

        let corner = |dx: i32, dy: i32| {
            self.noise(x_int.wrapping_add(dx), y_int.wrapping_add(dy)) as f32 / MAX_HASH_VALUE
        };

        let low = Self::smooth_inter(corner(0, 0), corner(1, 0), x_frac);
        let high = Self::smooth_inter(corner(0, 1), corner(1, 1), x_frac);
        Self::smooth_inter(low, high, y_frac)
    }

    /// Fractal sum of `octaves` noise layers. Octave `i` samples at
    /// `frequency * 2^i` with weight `1 / 2^i`. The sum is not normalized;
    /// it lies in `[0, 2)` for any octave count.
    pub fn perlin2d(&self, x: f32, y: f32, frequency: f32, octaves: u32) -> f32 {
        let mut sum = 0.0f32;
        let mut amplitude = 1.0f32;
        let mut freq = frequency;

        for _ in 0..octaves {
            sum += self.noise2d(x * freq, y * freq) * amplitude;
            amplitude *= 0.5;
            freq *= 2.0;
        }

        sum
    }

    /// `perlin2d` divided by the total octave weight, giving `[0, 1]`.
    pub fn perlin2d_normalized(&self, x: f32, y: f32, frequency: f32, octaves: u32) -> f32 {
        let weight = FractalSettings::new(frequency, octaves).total_weight();
        if weight > 0.0 {
            self.perlin2d(x, y, frequency, octaves) / weight
        } else {
            0.0
        }
    }

    /// Evaluate `perlin2d` with a settings bundle.
    pub fn sample(&self, settings: &FractalSettings, x: f32, y: f32) -> f32 {
        self.perlin2d(x, y, settings.frequency, settings.octaves)
    }
}
