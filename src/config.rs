//! Noise Field Configuration and Builder
//!
//! This module provides configuration types for deterministic gradient noise
//! field generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// Lattice dimensionality of a generated noise field
///
/// Only 1D, 2D, and 3D lattices are supported; any other requested dimension
/// is rejected before generation begins.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// 1D lattice: field of length `size`
    One,
    /// 2D lattice: field of `size` x `size`
    Two,
    /// 3D lattice: field of `size` x `size` x `size`
    Three,
}

impl Dimension {
    /// Convert a raw dimension index into a `Dimension`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for any value outside {1, 2, 3}.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            1 => Ok(Dimension::One),
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(NoiseError::InvalidDimension(other)),
        }
    }

    /// Number of lattice axes (1, 2, or 3)
    #[inline]
    pub fn axes(self) -> usize {
        match self {
            Dimension::One => 1,
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// Total element count of a field with the given per-axis extent
    ///
    /// `size` for 1D, `size^2` for 2D, `size^3` for 3D.
    #[inline]
    pub fn element_count(self, size: usize) -> usize {
        size.pow(self.axes() as u32)
    }
}

/// Configuration for deterministic gradient noise field generation
///
/// The same configuration will always produce the identical field. The
/// tiling period of the underlying gradient lattice is fixed at
/// [`REPEAT_PERIOD`](crate::kernel::REPEAT_PERIOD) along every axis.
///
/// # Example
///
/// ```rust
/// use perlin_lattice::*;
///
/// let config = NoiseConfigBuilder::new(2, 64)
///     .seed(42)
///     .octaves(4)
///     .unwrap()
///     .normalize(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.dimension, Dimension::Two);
/// assert_eq!(config.element_count(), 64 * 64);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Lattice dimensionality of the output field
    pub dimension: Dimension,

    /// Grid extent per axis (number of samples along each dimension)
    pub size: usize,

    /// Spatial frequency divisor: lattice index `i` samples coordinate
    /// `i / scale`, so larger values produce smoother, lower-frequency
    /// features
    pub scale: f32,

    /// Number of fractal octaves summed per sample
    pub octaves: u32,

    /// Amplitude multiplier applied to each successive octave
    pub persistence: f32,

    /// Frequency multiplier applied to each successive octave
    pub lacunarity: f32,

    /// Seed for the gradient permutation table
    ///
    /// The same seed (with the same other parameters) always produces the
    /// exact same field.
    pub seed: u32,

    /// Remap the finished field from [-1, 1] to [0, 1]
    pub normalize: bool,
}

impl NoiseConfig {
    /// Total element count of the field this configuration generates
    #[inline]
    pub fn element_count(&self) -> usize {
        self.dimension.element_count(self.size)
    }
}

/// Builder for creating `NoiseConfig` with validation
///
/// Dimension and size are required up front; everything else has a default.
/// Validation happens in the fallible setters and in `build()`, so an
/// invalid configuration can never reach the sampler.
///
/// # Example
///
/// ```rust
/// use perlin_lattice::*;
///
/// // Defaults: scale 50.0, 1 octave, persistence 0.5, lacunarity 2.0,
/// // seed 0, no normalization
/// let config = NoiseConfigBuilder::new(3, 50).build().unwrap();
///
/// // Customize
/// let config = NoiseConfigBuilder::new(2, 256)
///     .scale(30.0)
///     .unwrap()
///     .octaves(3)
///     .unwrap()
///     .persistence(0.5)
///     .lacunarity(2.0)
///     .seed(40)
///     .normalize(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct NoiseConfigBuilder {
    dimension: usize,
    size: usize,
    scale: f32,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
    seed: u32,
    normalize: bool,
}

impl NoiseConfigBuilder {
    /// Create a new builder for a field of the given dimension and extent
    ///
    /// Defaults:
    /// - scale: 50.0
    /// - octaves: 1
    /// - persistence: 0.5
    /// - lacunarity: 2.0
    /// - seed: 0
    /// - normalize: false
    ///
    /// Dimension and size are validated when `build()` is called.
    pub fn new(dimension: usize, size: usize) -> Self {
        Self {
            dimension,
            size,
            scale: 50.0,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
            normalize: false,
        }
    }

    /// Set the spatial frequency divisor
    ///
    /// Larger scales zoom in on the noise, producing smoother features.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if scale is not a positive finite number.
    pub fn scale(mut self, scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(NoiseError::InvalidParameter(format!(
                "scale must be positive and finite (got {})",
                scale
            )));
        }
        self.scale = scale;
        Ok(self)
    }

    /// Set the number of fractal octaves
    ///
    /// One octave is a single gradient noise evaluation; each additional
    /// octave layers detail at a higher frequency and lower amplitude.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if octaves is 0.
    pub fn octaves(mut self, octaves: u32) -> Result<Self> {
        if octaves == 0 {
            return Err(NoiseError::InvalidParameter(
                "octaves must be at least 1".to_string(),
            ));
        }
        self.octaves = octaves;
        Ok(self)
    }

    /// Set the amplitude decay per octave
    ///
    /// Typical values lie in (0, 1]; values above 1 emphasize high
    /// frequencies and push the raw octave sum further outside [-1, 1].
    pub fn persistence(mut self, persistence: f32) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the frequency growth per octave (typically >= 1)
    pub fn lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Set the seed for the gradient permutation table
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Request remapping of the finished field from [-1, 1] to [0, 1]
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the dimension is not 1, 2, or 3, and
    /// `InvalidParameter` if size is 0.
    pub fn build(self) -> Result<NoiseConfig> {
        let dimension = Dimension::from_index(self.dimension)?;
        if self.size == 0 {
            return Err(NoiseError::InvalidParameter(
                "size must be at least 1".to_string(),
            ));
        }

        Ok(NoiseConfig {
            dimension,
            size: self.size,
            scale: self.scale,
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            seed: self.seed,
            normalize: self.normalize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_from_index() {
        assert_eq!(Dimension::from_index(1).unwrap(), Dimension::One);
        assert_eq!(Dimension::from_index(2).unwrap(), Dimension::Two);
        assert_eq!(Dimension::from_index(3).unwrap(), Dimension::Three);
    }

    #[test]
    fn test_dimension_invalid_index() {
        assert_eq!(
            Dimension::from_index(0),
            Err(NoiseError::InvalidDimension(0))
        );
        assert_eq!(
            Dimension::from_index(4),
            Err(NoiseError::InvalidDimension(4))
        );
    }

    #[test]
    fn test_element_count() {
        assert_eq!(Dimension::One.element_count(7), 7);
        assert_eq!(Dimension::Two.element_count(7), 49);
        assert_eq!(Dimension::Three.element_count(7), 343);
    }

    #[test]
    fn test_builder_defaults() {
        let config = NoiseConfigBuilder::new(2, 64).build().unwrap();
        assert_eq!(config.dimension, Dimension::Two);
        assert_eq!(config.size, 64);
        assert_eq!(config.scale, 50.0);
        assert_eq!(config.octaves, 1);
        assert_eq!(config.persistence, 0.5);
        assert_eq!(config.lacunarity, 2.0);
        assert_eq!(config.seed, 0);
        assert!(!config.normalize);
    }

    #[test]
    fn test_builder_custom() {
        let config = NoiseConfigBuilder::new(3, 50)
            .scale(30.0)
            .unwrap()
            .octaves(3)
            .unwrap()
            .persistence(0.5)
            .lacunarity(2.0)
            .seed(40)
            .normalize(true)
            .build()
            .unwrap();

        assert_eq!(config.dimension, Dimension::Three);
        assert_eq!(config.size, 50);
        assert_eq!(config.scale, 30.0);
        assert_eq!(config.octaves, 3);
        assert_eq!(config.seed, 40);
        assert!(config.normalize);
    }

    #[test]
    fn test_builder_invalid_dimension() {
        assert!(matches!(
            NoiseConfigBuilder::new(0, 16).build(),
            Err(NoiseError::InvalidDimension(0))
        ));
        assert!(matches!(
            NoiseConfigBuilder::new(4, 16).build(),
            Err(NoiseError::InvalidDimension(4))
        ));
    }

    #[test]
    fn test_builder_invalid_size() {
        assert!(matches!(
            NoiseConfigBuilder::new(2, 0).build(),
            Err(NoiseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_builder_invalid_scale() {
        assert!(NoiseConfigBuilder::new(2, 16).scale(0.0).is_err());
        assert!(NoiseConfigBuilder::new(2, 16).scale(-10.0).is_err());
        assert!(NoiseConfigBuilder::new(2, 16).scale(f32::NAN).is_err());
    }

    #[test]
    fn test_builder_invalid_octaves() {
        assert!(NoiseConfigBuilder::new(2, 16).octaves(0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = NoiseConfigBuilder::new(2, 128)
            .seed(12345)
            .octaves(4)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: NoiseConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
