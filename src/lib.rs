//! Perlin gradient noise field generation over integer lattices
//!
//! A standalone library for generating coherent gradient noise fields over
//! 1D, 2D, or 3D lattices, with multi-octave fractal summation, seamless
//! periodic tiling, deterministic seeding, and half-precision storage.
//! The resulting flat array is ready for downstream exporters and plotters.
//!
//! # Quick Start
//!
//! ```rust
//! use perlin_lattice::*;
//!
//! // Generate a 50x50x50 fractal noise field
//! let config = NoiseConfigBuilder::new(3, 50)
//!     .scale(30.0).unwrap()
//!     .octaves(3).unwrap()
//!     .persistence(0.5)
//!     .lacunarity(2.0)
//!     .seed(40)
//!     .normalize(true)
//!     .build().unwrap();
//!
//! let field = NoiseField::generate(&config).unwrap();
//! assert_eq!(field.shape(), vec![50, 50, 50]);
//!
//! // Hand the flat row-major array to an exporter
//! let data: Vec<f32> = field.to_f32_vec();
//! assert_eq!(data.len(), 50 * 50 * 50);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration types

// Modules
pub mod config;
pub mod error;
pub mod field;
pub mod kernel;

// Re-export core types for convenience
pub use config::{Dimension, NoiseConfig, NoiseConfigBuilder};
pub use error::{NoiseError, Result};
pub use field::NoiseField;
pub use kernel::{PermutationTable, REPEAT_PERIOD};

// Re-export glam vector types used by the kernel API
pub use glam::{Vec2, Vec3};
