//! The SquirrelNoise5 bit mixer.
//!
//! Hashes a signed 32-bit position and a seed into 32 well-scrambled bits. Version 5
//! makes every input bit influence every output bit; the weakest pair is input bit 30
//! against output bit 0 at roughly 49.99% (50% would be ideal).

pub const SQ5_BIT_NOISE1: u32 = 0xd2a8_0a3f; // 11010010101010000000101000111111
pub const SQ5_BIT_NOISE2: u32 = 0xa884_f197; // 10101000100001001111000110010111
pub const SQ5_BIT_NOISE3: u32 = 0x6c73_6f4b; // 01101100011100110110111101001011
pub const SQ5_BIT_NOISE4: u32 = 0xb79f_3abb; // 10110111100111110011101010111011
pub const SQ5_BIT_NOISE5: u32 = 0x1b56_c4f5; // 00011011010101101100010011110101

/// Hashes `position` into an unrelated-looking `u32`, keyed by `seed`.
///
/// Total over every input. All arithmetic wraps modulo 2³² and every shift is a
/// logical shift on the unsigned bit pattern.
#[inline]
pub const fn squirrel_noise5(position: i32, seed: u32) -> u32 {
    // Reinterpret, not convert: -1 becomes 0xFFFF_FFFF.
    let mut mangled = position as u32;
    mangled = mangled.wrapping_mul(SQ5_BIT_NOISE1);
    mangled = mangled.wrapping_add(seed);
    mangled ^= mangled >> 9;
    mangled = mangled.wrapping_add(SQ5_BIT_NOISE2);
    mangled ^= mangled >> 11;
    mangled = mangled.wrapping_mul(SQ5_BIT_NOISE3);
    mangled ^= mangled >> 13;
    mangled = mangled.wrapping_add(SQ5_BIT_NOISE4);
    mangled ^= mangled >> 15;
    mangled = mangled.wrapping_mul(SQ5_BIT_NOISE5);
    mangled ^= mangled >> 17;
    mangled
}

/// Alias of [`squirrel_noise5`].
#[inline]
pub const fn scramble(position: i32, seed: u32) -> u32 {
    squirrel_noise5(position, seed)
}
