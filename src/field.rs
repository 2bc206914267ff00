//! Noise field generation and storage
//!
//! [`NoiseField`] owns the sampled lattice as a flat, row-major,
//! half-precision array. Generation validates the configuration, builds the
//! seeded permutation table, fills every lattice index at coordinate
//! `index / scale` through the fractal driver, and optionally remaps the
//! finished field from [-1, 1] to [0, 1].
//!
//! Sampling is data-parallel: every element depends only on its own
//! coordinates and the shared read-only permutation table, so the fill is
//! split across the first axis with rayon.

use glam::{Vec2, Vec3};
use half::f16;
use rayon::prelude::*;

use crate::config::{Dimension, NoiseConfig};
use crate::error::{NoiseError, Result};
use crate::kernel::{fbm_1d, fbm_2d, fbm_3d, PermutationTable};

/// A generated gradient noise field over a 1D, 2D, or 3D lattice
///
/// Stores `size^dimension` half-precision scalars in row-major order.
/// Values lie in [-1, 1] for a single octave (raw fractal sums may slightly
/// exceed that range), or [0, 1] after normalization. The field is owned
/// exclusively by the caller; the generator keeps no state between calls.
///
/// # Example
///
/// ```
/// use perlin_lattice::*;
///
/// let config = NoiseConfigBuilder::new(2, 64)
///     .scale(30.0)
///     .unwrap()
///     .octaves(3)
///     .unwrap()
///     .seed(40)
///     .normalize(true)
///     .build()
///     .unwrap();
///
/// let field = NoiseField::generate(&config).unwrap();
/// assert_eq!(field.shape(), vec![64, 64]);
/// assert_eq!(field.len(), 64 * 64);
///
/// // Hand the flat array to an exporter or plotter
/// let flat: Vec<f32> = field.to_f32_vec();
/// assert!(flat.iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    /// Flat row-major samples
    data: Vec<f16>,

    /// Lattice dimensionality
    dimension: Dimension,

    /// Extent along each axis
    size: usize,
}

impl NoiseField {
    /// Generate a noise field from the given configuration
    ///
    /// Parameters are re-validated here (the config's fields are public and
    /// may have been modified after building), before any allocation. The
    /// field is allocated once at its final shape and filled in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if size is 0, scale is not positive and
    /// finite, or octaves is 0. No field is allocated on a rejected call.
    pub fn generate(config: &NoiseConfig) -> Result<Self> {
        validate(config)?;

        let table = PermutationTable::new(config.seed);
        let mut field = Self {
            data: sample(config, &table),
            dimension: config.dimension,
            size: config.size,
        };

        if config.normalize {
            field.normalize();
        }

        Ok(field)
    }

    /// Remap every element from [-1, 1] to [0, 1] in place
    ///
    /// Applies `(x + 1) / 2` element-wise. Pure and total; applying it to an
    /// already-normalized field simply remaps again.
    pub fn normalize(&mut self) {
        for v in &mut self.data {
            *v = f16::from_f32((v.to_f32() + 1.0) / 2.0);
        }
    }

    /// Lattice dimensionality of this field
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Extent along each axis
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shape of the field: one extent per axis
    pub fn shape(&self) -> Vec<usize> {
        vec![self.size; self.dimension.axes()]
    }

    /// Total number of elements (`size^dimension`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major view of the samples
    #[inline]
    pub fn as_slice(&self) -> &[f16] {
        &self.data
    }

    /// Copy of the samples upcast to single precision
    ///
    /// Exporters and plotters that want full-width floats consume this.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.data.iter().map(|v| v.to_f32()).collect()
    }

    /// Element at the given lattice index
    ///
    /// Expects one index per axis: `&[i]` for 1D, `&[i, j]` for 2D,
    /// `&[i, j, k]` for 3D. Returns `None` if the index count does not
    /// match the dimension or any index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use perlin_lattice::*;
    ///
    /// let config = NoiseConfigBuilder::new(2, 8).build().unwrap();
    /// let field = NoiseField::generate(&config).unwrap();
    ///
    /// assert!(field.get(&[3, 5]).is_some());
    /// assert!(field.get(&[3, 8]).is_none());
    /// assert!(field.get(&[3]).is_none());
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<f16> {
        if index.len() != self.dimension.axes() {
            return None;
        }
        if index.iter().any(|&i| i >= self.size) {
            return None;
        }

        let flat = index.iter().fold(0, |acc, &i| acc * self.size + i);
        Some(self.data[flat])
    }
}

/// Fail fast on any invalid parameter, before allocation
fn validate(config: &NoiseConfig) -> Result<()> {
    if config.size == 0 {
        return Err(NoiseError::InvalidParameter(
            "size must be at least 1".to_string(),
        ));
    }
    if !(config.scale.is_finite() && config.scale > 0.0) {
        return Err(NoiseError::InvalidParameter(format!(
            "scale must be positive and finite (got {})",
            config.scale
        )));
    }
    if config.octaves == 0 {
        return Err(NoiseError::InvalidParameter(
            "octaves must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Fill the flat row-major sample array, parallel over the first axis
fn sample(config: &NoiseConfig, table: &PermutationTable) -> Vec<f16> {
    let size = config.size;
    let octaves = config.octaves;
    let persistence = config.persistence;
    let lacunarity = config.lacunarity;
    // Reciprocal multiply instead of dividing every index by scale
    let inv_scale = 1.0 / config.scale;

    match config.dimension {
        Dimension::One => (0..size)
            .into_par_iter()
            .map(|i| {
                let x = i as f32 * inv_scale;
                f16::from_f32(fbm_1d(x, table, octaves, persistence, lacunarity))
            })
            .collect(),
        Dimension::Two => (0..size)
            .into_par_iter()
            .flat_map_iter(|i| {
                let x = i as f32 * inv_scale;
                (0..size).map(move |j| {
                    let pos = Vec2::new(x, j as f32 * inv_scale);
                    f16::from_f32(fbm_2d(pos, table, octaves, persistence, lacunarity))
                })
            })
            .collect(),
        Dimension::Three => (0..size)
            .into_par_iter()
            .flat_map_iter(|i| {
                let x = i as f32 * inv_scale;
                (0..size).flat_map(move |j| {
                    let y = j as f32 * inv_scale;
                    (0..size).map(move |k| {
                        let pos = Vec3::new(x, y, k as f32 * inv_scale);
                        f16::from_f32(fbm_3d(pos, table, octaves, persistence, lacunarity))
                    })
                })
            })
            .collect(),
    }
}
