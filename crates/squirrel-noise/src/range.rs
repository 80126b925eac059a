//! Raw noise rescaled into closed float intervals.
//!
//! Both mappings multiply in `f64` and narrow to `f32` once, so results do not depend
//! on the host's single-precision rounding behavior.

use crate::fold::{get_2d_noise_uint, get_3d_noise_uint, get_4d_noise_uint};
use crate::scramble::squirrel_noise5;

const ONE_OVER_MAX_UINT: f64 = 1.0 / u32::MAX as f64;
const ONE_OVER_MAX_INT: f64 = 1.0 / i32::MAX as f64;

/// Maps raw noise onto `[0, 1]`. Only `0` gives 0.0 and only `u32::MAX` gives 1.0.
#[inline]
pub fn zero_to_one(raw: u32) -> f32 {
    (ONE_OVER_MAX_UINT * raw as f64) as f32
}

/// Maps raw noise onto `[-1, 1]` through its two's-complement bit pattern.
///
/// `0x8000_0000` reads as `i32::MIN`, which lands a hair below -1.0 in `f64` and
/// narrows to exactly -1.0.
#[inline]
pub fn neg_one_to_one(raw: u32) -> f32 {
    let signed = raw as i32;
    (ONE_OVER_MAX_INT * signed as f64) as f32
}

pub fn get_1d_noise_zero_to_one(x: i32, seed: u32) -> f32 {
    zero_to_one(squirrel_noise5(x, seed))
}

pub fn get_2d_noise_zero_to_one(x: i32, y: i32, seed: u32) -> f32 {
    zero_to_one(get_2d_noise_uint(x, y, seed))
}

pub fn get_3d_noise_zero_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    zero_to_one(get_3d_noise_uint(x, y, z, seed))
}

pub fn get_4d_noise_zero_to_one(x: i32, y: i32, z: i32, t: i32, seed: u32) -> f32 {
    zero_to_one(get_4d_noise_uint(x, y, z, t, seed))
}

pub fn get_1d_noise_neg_one_to_one(x: i32, seed: u32) -> f32 {
    neg_one_to_one(squirrel_noise5(x, seed))
}

pub fn get_2d_noise_neg_one_to_one(x: i32, y: i32, seed: u32) -> f32 {
    neg_one_to_one(get_2d_noise_uint(x, y, seed))
}

pub fn get_3d_noise_neg_one_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    neg_one_to_one(get_3d_noise_uint(x, y, z, seed))
}

pub fn get_4d_noise_neg_one_to_one(x: i32, y: i32, z: i32, t: i32, seed: u32) -> f32 {
    neg_one_to_one(get_4d_noise_uint(x, y, z, t, seed))
}
