use serde::{Deserialize, Serialize};

/// Parameters for one fractal noise evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalSettings {
    /// Sampling frequency of the first octave.
    pub frequency: f32,
    /// Number of octaves; each doubles the frequency and halves the weight.
    pub octaves: u32,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            frequency: 0.03,
            octaves: 3,
        }
    }
}

impl FractalSettings {
    pub fn new(frequency: f32, octaves: u32) -> Self {
        Self { frequency, octaves }
    }

    /// Sum of all octave weights (`1 + 1/2 + ... + 1/2^(octaves-1)`).
    pub fn total_weight(&self) -> f32 {
        (0..self.octaves).map(|i| 0.5f32.powi(i as i32)).sum()
    }
}
