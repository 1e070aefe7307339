use super::{Alphabet, DEFAULT_ALPHABET, MAX_SAFE_INTEGER};

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{value} exceeds the maximum safe integer ({max})", max = MAX_SAFE_INTEGER)]
    Overflow { value: u64 },
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encodes `value`, most significant symbol first.
    ///
    /// Zero has no representation and yields `Ok(None)`.
    pub fn encode(&self, value: u64) -> Result<Option<String>, Error> {
        if value > MAX_SAFE_INTEGER {
            return Err(Error::Overflow { value });
        }
        let base = self.alphabet.len() as u64;
        if base == 1 {
            return self.encode_unary(value);
        }
        let mut remaining = value;
        let mut digits = Vec::new();
        while remaining > 0 {
            let mut digit = remaining % base;
            remaining /= base;
            // An exact multiple of the base ends in the last symbol and borrows one from the quotient.
            if digit == 0 {
                digit = base;
                remaining -= 1;
            }
            digits.push(self.alphabet.encode((digit - 1) as usize));
        }
        if digits.is_empty() {
            return Ok(None);
        }
        Ok(Some(digits.iter().rev().map(|&symbol| symbol as char).collect()))
    }

    /// A one-symbol alphabet repeats its symbol `value` times.
    fn encode_unary(&self, value: u64) -> Result<Option<String>, Error> {
        if value == 0 {
            return Ok(None);
        }
        let len = usize::try_from(value).map_err(|_| Error::Overflow { value })?;
        let mut output = String::new();
        output.try_reserve_exact(len).map_err(|_| Error::Overflow { value })?;
        output.extend(std::iter::repeat(self.alphabet.encode(0) as char).take(len));
        Ok(Some(output))
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&DEFAULT_ALPHABET);

pub fn encode(value: u64) -> Result<Option<String>, Error> {
    Encoder::default().encode(value)
}
