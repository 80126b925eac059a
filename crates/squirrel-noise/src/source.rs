//! A seeded, copyable handle over the free noise functions.
//!
//! [`NoiseSource`] holds nothing but a seed. It exists so code that samples many
//! positions with the same seed can pass one value around; it never caches and never
//! advances, so two copies always agree.

use std::{fmt, str::FromStr};

use crate::{
    error::SeedParseError,
    fold::{fold_2d, fold_3d, fold_4d},
    range::{neg_one_to_one, zero_to_one},
    scramble::squirrel_noise5,
};

/// Coordinates that fold into a single noise position.
///
/// Folding matches the free functions, so `(x, y)` hashes exactly like
/// [`get_2d_noise_uint`](crate::get_2d_noise_uint).
pub trait NoisePosition: Copy {
    fn fold(self) -> i32;
}

impl NoisePosition for i32 {
    #[inline]
    fn fold(self) -> i32 {
        self
    }
}

impl NoisePosition for (i32, i32) {
    #[inline]
    fn fold(self) -> i32 {
        fold_2d(self.0, self.1)
    }
}

impl NoisePosition for (i32, i32, i32) {
    #[inline]
    fn fold(self) -> i32 {
        fold_3d(self.0, self.1, self.2)
    }
}

impl NoisePosition for (i32, i32, i32, i32) {
    #[inline]
    fn fold(self) -> i32 {
        fold_4d(self.0, self.1, self.2, self.3)
    }
}

impl NoisePosition for [i32; 1] {
    #[inline]
    fn fold(self) -> i32 {
        self[0]
    }
}

impl NoisePosition for [i32; 2] {
    #[inline]
    fn fold(self) -> i32 {
        let [x, y] = self;
        fold_2d(x, y)
    }
}

impl NoisePosition for [i32; 3] {
    #[inline]
    fn fold(self) -> i32 {
        let [x, y, z] = self;
        fold_3d(x, y, z)
    }
}

impl NoisePosition for [i32; 4] {
    #[inline]
    fn fold(self) -> i32 {
        let [x, y, z, t] = self;
        fold_4d(x, y, z, t)
    }
}

/// Seeded noise over 1 to 4 integer dimensions.
///
/// Has no `Default`; the caller always picks the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NoiseSource {
    seed: u32,
}

impl NoiseSource {
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    #[inline]
    pub const fn seed(self) -> u32 {
        self.seed
    }

    /// Derives an unrelated source for a sub-stream (a terrain layer, an entity kind...).
    ///
    /// The new seed is this source's raw noise at `salt`, so derivation is as
    /// reproducible as sampling.
    pub fn derive(self, salt: i32) -> Self {
        let derived = Self::new(squirrel_noise5(salt, self.seed));
        tracing::trace!(parent = self.seed, salt, seed = derived.seed, "derived noise source");
        derived
    }

    /// Raw noise at `position`.
    #[inline]
    pub fn uint<P: NoisePosition>(self, position: P) -> u32 {
        squirrel_noise5(position.fold(), self.seed)
    }

    /// Noise at `position` in `[0, 1]`.
    #[inline]
    pub fn zero_to_one<P: NoisePosition>(self, position: P) -> f32 {
        zero_to_one(self.uint(position))
    }

    /// Noise at `position` in `[-1, 1]`.
    #[inline]
    pub fn neg_one_to_one<P: NoisePosition>(self, position: P) -> f32 {
        neg_one_to_one(self.uint(position))
    }
}

impl From<u32> for NoiseSource {
    fn from(seed: u32) -> Self {
        Self::new(seed)
    }
}

impl fmt::Display for NoiseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.seed)
    }
}

impl FromStr for NoiseSource {
    type Err = SeedParseError;

    /// Accepts decimal (`1337`) or hex with a `0x` prefix (`0xDEAD_BEEF`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            tracing::debug!("rejected empty seed string");
            return Err(SeedParseError::Empty);
        }

        let (digits, radix) = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };
        // Digits and `_` only, with `_` strictly between digits. `from_str_radix` alone
        // would also take a sign.
        let is_digit = |c: char| c.is_digit(radix);
        let well_formed = digits.chars().all(|c| c == '_' || is_digit(c))
            && digits.chars().next().is_some_and(is_digit)
            && digits.chars().last().is_some_and(is_digit);
        if !digits.is_empty() && !well_formed {
            tracing::debug!(input = trimmed, "rejected malformed seed string");
            return Err(SeedParseError::Malformed {
                input: trimmed.to_owned(),
            });
        }
        let digits: String = digits.chars().filter(|&c| c != '_').collect();

        match u32::from_str_radix(&digits, radix) {
            Ok(seed) => {
                tracing::debug!(seed, input = trimmed, "parsed noise seed");
                Ok(Self::new(seed))
            }
            Err(source) => {
                tracing::debug!(input = trimmed, %source, "rejected seed string");
                Err(SeedParseError::Invalid {
                    input: trimmed.to_owned(),
                    source,
                })
            }
        }
    }
}
