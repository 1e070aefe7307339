use super::{Alphabet, DEFAULT_ALPHABET, MAX_SAFE_INTEGER};
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Decoded value exceeds the maximum safe integer ({max})", max = MAX_SAFE_INTEGER)]
    Overflow,
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Decodes a string of alphabet symbols.
    ///
    /// Returns `Ok(None)` for an empty input or when any character is not a
    /// symbol of the alphabet. Lookup is exact, so case matters.
    pub fn decode(&self, input: impl AsRef<str>) -> Result<Option<u64>, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(None);
        }
        let base = self.alphabet.len() as u64;
        // Saturation only ever lands above MAX_SAFE_INTEGER, which is reported after the scan.
        let mut result: u64 = 0;
        for (index, &value) in input.as_bytes().iter().enumerate() {
            let digit = match self.alphabet.decode(value) {
                Some(position) => position as u64 + 1,
                None => {
                    trace!(index, "character is not in the alphabet");
                    return Ok(None);
                }
            };
            result = result.saturating_mul(base).saturating_add(digit);
        }
        if result > MAX_SAFE_INTEGER {
            return Err(Error::Overflow);
        }
        Ok(Some(result))
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&DEFAULT_ALPHABET);

pub fn decode(input: impl AsRef<str>) -> Result<Option<u64>, Error> {
    Decoder::default().decode(input)
}
