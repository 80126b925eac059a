//! Folding N-dimensional coordinates into a single noise position.
//!
//! Higher axes are weighted by large primes with non-boring bit patterns and summed
//! with 32-bit signed wrapping arithmetic. Overflow only shuffles the pattern further.

use crate::scramble::squirrel_noise5;

/// Weight of the Y axis.
pub const PRIME_Y: i32 = 198_491_317;
/// Weight of the Z axis.
pub const PRIME_Z: i32 = 6_542_989;
/// Weight of the T axis.
pub const PRIME_T: i32 = 357_239;

#[inline]
pub const fn fold_2d(x: i32, y: i32) -> i32 {
    x.wrapping_add(PRIME_Y.wrapping_mul(y))
}

#[inline]
pub const fn fold_3d(x: i32, y: i32, z: i32) -> i32 {
    fold_2d(x, y).wrapping_add(PRIME_Z.wrapping_mul(z))
}

#[inline]
pub const fn fold_4d(x: i32, y: i32, z: i32, t: i32) -> i32 {
    fold_3d(x, y, z).wrapping_add(PRIME_T.wrapping_mul(t))
}

/// Raw noise at `x`. Same as [`squirrel_noise5`].
#[inline]
pub const fn get_1d_noise_uint(x: i32, seed: u32) -> u32 {
    squirrel_noise5(x, seed)
}

#[inline]
pub const fn get_2d_noise_uint(x: i32, y: i32, seed: u32) -> u32 {
    squirrel_noise5(fold_2d(x, y), seed)
}

#[inline]
pub const fn get_3d_noise_uint(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    squirrel_noise5(fold_3d(x, y, z), seed)
}

#[inline]
pub const fn get_4d_noise_uint(x: i32, y: i32, z: i32, t: i32, seed: u32) -> u32 {
    squirrel_noise5(fold_4d(x, y, z, t), seed)
}
