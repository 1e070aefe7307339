pub mod alphabet;
pub mod bijective;
pub mod encoder;
pub mod error;
pub mod options;

pub use self::{
    alphabet::{Alphabet, DEFAULT_ALPHABET},
    bijective::MAX_SAFE_INTEGER,
    encoder::AlphanumericEncoder,
    error::{Error, Result},
    options::Options,
};
