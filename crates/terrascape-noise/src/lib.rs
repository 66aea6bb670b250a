//! Permutation-table value noise with smoothstep interpolation and
//! multi-octave fractal summation.

pub mod field;
pub mod fractal;
pub mod permutation;

pub use field::NoiseField;
pub use fractal::FractalSettings;
pub use permutation::{NoiseSeed, PermutationTable};
