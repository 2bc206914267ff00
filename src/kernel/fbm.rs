//! Fractal Brownian motion over the gradient noise kernel
//!
//! Each driver layers `octaves` kernel evaluations, multiplying the
//! frequency by `lacunarity` and the amplitude by `persistence` per octave.
//! The returned value is the raw octave sum: it is NOT divided by the
//! accumulated amplitude, so for more than one octave it may slightly
//! exceed [-1, 1] depending on persistence. Callers that want a bounded
//! field apply normalization after sampling. With a single octave each
//! driver reduces to one direct kernel evaluation.

use glam::{Vec2, Vec3};

use super::perlin::{perlin_1d, perlin_2d, perlin_3d};
use super::perm::PermutationTable;

/// Raw 1D fractal sum at a continuous coordinate
pub fn fbm_1d(
    x: f32,
    table: &PermutationTable,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for _ in 0..octaves {
        total += perlin_1d(x * frequency, table) * amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total
}

/// Raw 2D fractal sum at a continuous coordinate
pub fn fbm_2d(
    pos: Vec2,
    table: &PermutationTable,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for _ in 0..octaves {
        total += perlin_2d(pos * frequency, table) * amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total
}

/// Raw 3D fractal sum at a continuous coordinate
pub fn fbm_3d(
    pos: Vec3,
    table: &PermutationTable,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for _ in 0..octaves {
        total += perlin_3d(pos * frequency, table) * amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_octave_equals_kernel() {
        let table = PermutationTable::new(42);

        for i in 0..30 {
            let x = i as f32 * 0.29;
            assert_eq!(fbm_1d(x, &table, 1, 0.5, 2.0), perlin_1d(x, &table));

            let p2 = Vec2::new(x, x * 0.8);
            assert_eq!(fbm_2d(p2, &table, 1, 0.5, 2.0), perlin_2d(p2, &table));

            let p3 = Vec3::new(x, x * 0.8, x * 1.4);
            assert_eq!(fbm_3d(p3, &table, 1, 0.5, 2.0), perlin_3d(p3, &table));
        }
    }

    #[test]
    fn test_determinism() {
        let table = PermutationTable::new(123);
        let pos = Vec3::new(0.5, 0.5, 0.5);

        let v1 = fbm_3d(pos, &table, 4, 0.5, 2.0);
        let v2 = fbm_3d(pos, &table, 4, 0.5, 2.0);
        assert_eq!(v1, v2);
    }

    #[test]
    fn test_raw_sum_bounded_by_amplitude_sum() {
        let table = PermutationTable::new(7);
        let octaves = 4;
        let persistence = 0.5f32;

        // Geometric amplitude bound: 1 + 0.5 + 0.25 + 0.125
        let bound: f32 = (0..octaves).map(|o| persistence.powi(o)).sum();

        for i in 0..100 {
            let p = Vec2::new(i as f32 * 0.41, i as f32 * 0.23);
            let v = fbm_2d(p, &table, octaves as u32, persistence, 2.0);
            assert!(
                v.abs() <= bound,
                "fbm value {} exceeds amplitude bound {}",
                v,
                bound
            );
        }
    }

    #[test]
    fn test_octaves_add_detail() {
        let table = PermutationTable::new(11);

        // With midpoint sampling the higher octave must change some values
        let differs = (0..40).any(|i| {
            let p = Vec2::new(i as f32 + 0.5, i as f32 * 0.3 + 0.25);
            fbm_2d(p, &table, 1, 0.5, 2.0) != fbm_2d(p, &table, 3, 0.5, 2.0)
        });
        assert!(differs, "adding octaves should change the field");
    }
}
