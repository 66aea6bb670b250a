use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use terrascape_core::constants::PERMUTATION_SIZE;

/// Where the shuffle driving a permutation table gets its randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoiseSeed {
    /// OS-seeded thread RNG; every construction yields a different field.
    #[default]
    Entropy,
    /// Seeded `StdRng`; identical seeds give identical tables.
    Fixed(u64),
}

impl From<Option<u64>> for NoiseSeed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(NoiseSeed::Entropy, NoiseSeed::Fixed)
    }
}

/// 256-entry table holding each of `0..=255` exactly once, used to hash
/// integer lattice coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; PERMUTATION_SIZE],
}

impl PermutationTable {
    /// The unshuffled table `[0, 1, ..., 255]`.
    pub fn identity() -> Self {
        let mut values = [0u8; PERMUTATION_SIZE];
        for (i, val) in values.iter_mut().enumerate() {
            *val = i as u8;
        }
        Self { values }
    }

    /// Identity table shuffled with Fisher-Yates.
    pub fn shuffled(seed: NoiseSeed) -> Self {
        let mut table = Self::identity();
        match seed {
            NoiseSeed::Entropy => table.values.shuffle(&mut rand::thread_rng()),
            NoiseSeed::Fixed(seed) => table.values.shuffle(&mut StdRng::seed_from_u64(seed)),
        }
        log::debug!("Built permutation table ({seed:?})");
        table
    }

    /// Wrap a pre-built table. `values` must be a permutation of `0..=255`;
    /// this is a caller precondition and is only checked in debug builds.
    pub fn from_values(values: [u8; PERMUTATION_SIZE]) -> Self {
        let table = Self { values };
        debug_assert!(table.is_permutation(), "table is not a permutation of 0..=255");
        table
    }

    /// True when every value in `0..=255` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; PERMUTATION_SIZE];
        for &v in &self.values {
            if seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }

    /// Look up the entry at `index`, wrapped modulo 256 (negative indices too).
    #[inline]
    pub fn get(&self, index: i32) -> i32 {
        self.values[index.rem_euclid(PERMUTATION_SIZE as i32) as usize] as i32
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}
