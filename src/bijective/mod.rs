//! Bijective base-N numerals over an [`Alphabet`].
//!
//! Digit values run from 1 to N instead of 0 to N-1, so there is no zero
//! symbol and every positive integer has exactly one representation. With the
//! default alphabet this is spreadsheet column naming: `A`..`Z`, `AA`, `AB`, ...

pub mod decode;
pub mod deconstruct;
pub mod encode;

pub use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};

pub use decode::{decode, Decoder};
pub use deconstruct::{deconstruct, Deconstructor};
pub use encode::{encode, Encoder};

/// Largest integer accepted or produced by the codec (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;
