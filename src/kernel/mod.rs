//! Gradient noise kernel
//!
//! Per-dimension coherent noise evaluators (1D, 2D, 3D) over a seeded,
//! periodically tiling gradient permutation table, plus the fractal
//! Brownian motion driver that layers octaves of the kernel.

mod fbm;
mod perlin;
mod perm;

pub use fbm::{fbm_1d, fbm_2d, fbm_3d};
pub use perlin::{perlin_1d, perlin_2d, perlin_3d};
pub use perm::{PermutationTable, REPEAT_PERIOD};
