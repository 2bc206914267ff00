//! Seeded gradient permutation table with periodic tiling
//!
//! The table is built once per generation call from the seed and shared
//! read-only by every kernel evaluation, so parallel sampling needs no
//! synchronization. Lattice coordinates wrap at a fixed period before
//! lookup, which makes the noise tile seamlessly along every axis.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, Result};

/// Coordinate distance after which the noise pattern repeats exactly
pub const REPEAT_PERIOD: i32 = 1024;

/// Immutable permutation table mapping wrapped lattice coordinates to
/// gradient selections
///
/// Holds a seed-shuffled permutation of 0..=255, doubled to 512 entries so
/// nested corner lookups never index out of bounds.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    perm: [u8; 512],
    period: i32,
}

impl PermutationTable {
    /// Build a table from the given seed with the standard tiling period
    pub fn new(seed: u32) -> Self {
        Self::build(seed, REPEAT_PERIOD)
    }

    /// Build a table with an explicit tiling period
    ///
    /// Periods that are multiples of 256 tile without biasing the gradient
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the period is not positive.
    pub fn with_period(seed: u32, period: i32) -> Result<Self> {
        if period <= 0 {
            return Err(NoiseError::InvalidParameter(format!(
                "tiling period must be positive (got {})",
                period
            )));
        }
        Ok(Self::build(seed, period))
    }

    fn build(seed: u32, period: i32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().take(256).enumerate() {
            *p = i as u8;
        }

        // Fisher-Yates shuffle of the first half
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            perm.swap(i, j);
        }

        // Duplicate so perm[perm[x] + y] stays in bounds
        let (lo, hi) = perm.split_at_mut(256);
        hi.copy_from_slice(lo);

        Self { perm, period }
    }

    /// Tiling period of this table
    #[inline]
    pub fn period(&self) -> i32 {
        self.period
    }

    /// Wrap a lattice coordinate into the table's index range
    #[inline]
    fn wrap(&self, v: i32) -> usize {
        (v.rem_euclid(self.period) & 255) as usize
    }

    /// Hash a 1D lattice corner
    #[inline]
    pub fn corner1(&self, x: i32) -> u8 {
        self.perm[self.wrap(x)]
    }

    /// Hash a 2D lattice corner
    #[inline]
    pub fn corner2(&self, x: i32, y: i32) -> u8 {
        self.perm[self.perm[self.wrap(x)] as usize + self.wrap(y)]
    }

    /// Hash a 3D lattice corner
    #[inline]
    pub fn corner3(&self, x: i32, y: i32, z: i32) -> u8 {
        let a = self.perm[self.wrap(x)] as usize + self.wrap(y);
        self.perm[self.perm[a] as usize + self.wrap(z)]
    }
}
