//! Perlin gradient noise evaluators for 1D, 2D, and 3D coordinates
//!
//! Each evaluator finds the lattice cell containing the point, hashes the
//! cell corners through the seeded [`PermutationTable`], takes the dot
//! product of each corner's gradient with the offset to the point, and
//! blends the corners with a quintic ease curve. Output is spatially
//! coherent, deterministic, and lies in [-1, 1]; integer lattice points
//! evaluate to exactly 0.

use glam::{Vec2, Vec3};

use super::perm::PermutationTable;

/// 2D gradient set: the 8 unit directions (axis and diagonal)
const GRAD2: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2],
    [-std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2],
    [std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2],
    [-std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2],
];

/// Quintic smoothstep interpolation (Ken Perlin's improved fade function)
///
/// Formula: 6t⁵ - 15t⁴ + 10t³, C2-continuous with zero first and second
/// derivatives at t=0 and t=1.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// 1D gradient: hash selects slope -1 or +1
#[inline]
fn grad1(hash: u8, x: f32) -> f32 {
    if hash & 1 == 0 {
        -x
    } else {
        x
    }
}

/// 2D gradient: hash selects one of 8 unit directions, dotted with (x, y)
#[inline]
fn grad2(hash: u8, x: f32, y: f32) -> f32 {
    let g = &GRAD2[(hash & 7) as usize];
    g[0] * x + g[1] * y
}

/// 3D gradient: hash selects one of the 12 edge vectors of a unit cube,
/// dotted with (x, y, z)
#[inline]
fn grad3(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;

    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    let sign_u = if (h & 1) == 0 { -u } else { u };
    let sign_v = if (h & 2) == 0 { -v } else { v };

    sign_u + sign_v
}

/// Sample 1D Perlin noise at a continuous coordinate
///
/// # Returns
/// Value in [-1, 1]
pub fn perlin_1d(x: f32, table: &PermutationTable) -> f32 {
    let x0 = x.floor() as i32;
    let xf = x - x.floor();
    let u = fade(xf);

    let a = table.corner1(x0);
    let b = table.corner1(x0 + 1);

    lerp(grad1(a, xf), grad1(b, xf - 1.0), u)
}

/// Sample 2D Perlin noise at a continuous coordinate
///
/// # Returns
/// Value in [-1, 1]
pub fn perlin_2d(pos: Vec2, table: &PermutationTable) -> f32 {
    let x0 = pos.x.floor() as i32;
    let y0 = pos.y.floor() as i32;

    let xf = pos.x - pos.x.floor();
    let yf = pos.y - pos.y.floor();

    let u = fade(xf);
    let v = fade(yf);

    // Hash the 4 cell corners
    let aa = table.corner2(x0, y0);
    let ab = table.corner2(x0, y0 + 1);
    let ba = table.corner2(x0 + 1, y0);
    let bb = table.corner2(x0 + 1, y0 + 1);

    // Gradient contributions and bilinear blend
    let g00 = grad2(aa, xf, yf);
    let g10 = grad2(ba, xf - 1.0, yf);
    let g01 = grad2(ab, xf, yf - 1.0);
    let g11 = grad2(bb, xf - 1.0, yf - 1.0);

    lerp(lerp(g00, g10, u), lerp(g01, g11, u), v)
}

/// Sample 3D Perlin noise at a continuous coordinate
///
/// # Algorithm
/// 1. Find the unit cube containing the point
/// 2. Compute the relative position within the cube
/// 3. Apply fade curves for smooth interpolation
/// 4. Hash all 8 cube corners through the permutation table
/// 5. Compute gradient dot products for each corner
/// 6. Trilinearly interpolate the gradients
///
/// # Returns
/// Value in [-1, 1]
pub fn perlin_3d(pos: Vec3, table: &PermutationTable) -> f32 {
    let x0 = pos.x.floor() as i32;
    let y0 = pos.y.floor() as i32;
    let z0 = pos.z.floor() as i32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;
    let z1 = z0 + 1;

    let xf = pos.x - pos.x.floor();
    let yf = pos.y - pos.y.floor();
    let zf = pos.z - pos.z.floor();

    let u = fade(xf);
    let v = fade(yf);
    let w = fade(zf);

    // Hash coordinates of the 8 cube corners
    let aaa = table.corner3(x0, y0, z0);
    let aba = table.corner3(x0, y1, z0);
    let aab = table.corner3(x0, y0, z1);
    let abb = table.corner3(x0, y1, z1);
    let baa = table.corner3(x1, y0, z0);
    let bba = table.corner3(x1, y1, z0);
    let bab = table.corner3(x1, y0, z1);
    let bbb = table.corner3(x1, y1, z1);

    // Gradient dot products for the 8 corners
    let g_aaa = grad3(aaa, xf, yf, zf);
    let g_baa = grad3(baa, xf - 1.0, yf, zf);
    let g_aba = grad3(aba, xf, yf - 1.0, zf);
    let g_bba = grad3(bba, xf - 1.0, yf - 1.0, zf);
    let g_aab = grad3(aab, xf, yf, zf - 1.0);
    let g_bab = grad3(bab, xf - 1.0, yf, zf - 1.0);
    let g_abb = grad3(abb, xf, yf - 1.0, zf - 1.0);
    let g_bbb = grad3(bbb, xf - 1.0, yf - 1.0, zf - 1.0);

    // Trilinear interpolation of gradients
    let x00 = lerp(g_aaa, g_baa, u);
    let x10 = lerp(g_aba, g_bba, u);
    let x01 = lerp(g_aab, g_bab, u);
    let x11 = lerp(g_abb, g_bbb, u);
    let y0_val = lerp(x00, x10, v);
    let y1_val = lerp(x01, x11, v);

    lerp(y0_val, y1_val, w)
}
