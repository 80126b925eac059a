//! Rust port of Squirrel Eiserloh's SquirrelNoise5 raw noise functions.
//!
//! Every function here is a pure function of its arguments: the same position and
//! seed always produce the same value, on any thread, in any order, on any machine.
//! Think of it as random access into an infinitely long table of random numbers.
//!
//! - [`squirrel_noise5`] — the 32-bit bit-mixing hash everything else is built on.
//! - [`get_1d_noise_uint`] .. [`get_4d_noise_uint`] — fold 1 to 4 coordinates into
//!   one position with large primes, then hash it.
//! - `get_Nd_noise_zero_to_one` / `get_Nd_noise_neg_one_to_one` — the raw value
//!   rescaled into `[0, 1]` or `[-1, 1]`, both ends inclusive.
//! - [`NoiseSource`] — a `Copy` handle that carries a seed for callers that hash many
//!   positions with the same one.
//!
//! The noise is **not** cryptographically secure.

pub mod error;
pub mod fold;
pub mod range;
pub mod scramble;
pub mod source;

pub use error::SeedParseError as Error;
pub use fold::{get_1d_noise_uint, get_2d_noise_uint, get_3d_noise_uint, get_4d_noise_uint};
pub use range::{
    get_1d_noise_neg_one_to_one, get_1d_noise_zero_to_one, get_2d_noise_neg_one_to_one,
    get_2d_noise_zero_to_one, get_3d_noise_neg_one_to_one, get_3d_noise_zero_to_one,
    get_4d_noise_neg_one_to_one, get_4d_noise_zero_to_one,
};
pub use scramble::{scramble, squirrel_noise5};
pub use source::{NoisePosition, NoiseSource};
