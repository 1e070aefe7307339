use crate::alphabet;
use crate::bijective::{decode, deconstruct, encode, MAX_SAFE_INTEGER};

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(#[from] alphabet::Error),
    #[error("Cannot deconstruct when the alphabet contains numbers: '{character}' at index {index}")]
    UnsupportedAlphabet { character: char, index: usize },
    #[error("Value exceeds the maximum safe integer ({max})", max = MAX_SAFE_INTEGER)]
    Overflow,
}

impl From<encode::Error> for Error {
    fn from(error: encode::Error) -> Self {
        match error {
            encode::Error::Overflow { .. } => Error::Overflow,
        }
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        match error {
            decode::Error::Overflow => Error::Overflow,
        }
    }
}

impl From<deconstruct::Error> for Error {
    fn from(error: deconstruct::Error) -> Self {
        match error {
            deconstruct::Error::UnsupportedAlphabet { character, index } => Error::UnsupportedAlphabet { character, index },
            deconstruct::Error::Overflow => Error::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
