use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedParseError {
    #[error("seed string is empty")]
    Empty,

    #[error("malformed seed {input:?}: expected decimal or 0x hex digits, `_` only between digits")]
    Malformed { input: String },

    #[error("invalid seed {input:?}: {source}")]
    Invalid {
        input: String,
        source: ParseIntError,
    },
}
