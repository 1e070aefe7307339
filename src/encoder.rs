use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::bijective::{Decoder, Deconstructor, Encoder, MAX_SAFE_INTEGER};
use crate::error::{Error, Result};
use crate::options::Options;
use tracing::debug;

/// Converts integers to and from bijective base-N strings over a configurable alphabet.
///
/// Every operation reads the alphabet in place at call time, so a new alphabet
/// applies to the very next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphanumericEncoder {
    alphabet: Alphabet,
    case_sensitive_alphabet_allowed: bool,
}

impl Default for AlphanumericEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphanumericEncoder {
    pub fn new() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET,
            case_sensitive_alphabet_allowed: false,
        }
    }

    /// Applies the case policy first, then the alphabet, so the policy governs
    /// how the alphabet is normalized.
    pub fn with_options(options: &Options) -> Result<Self> {
        let mut encoder = Self::new();
        encoder.set_case_sensitive_alphabet_allowed(options.case_sensitive_alphabet_allowed);
        if let Some(alphabet) = &options.alphabet {
            encoder.set_alphabet(alphabet)?;
        }
        Ok(encoder)
    }

    pub fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    /// Validates and installs a new alphabet. On failure the current alphabet is kept.
    pub fn set_alphabet(&mut self, alphabet: impl AsRef<str>) -> Result<()> {
        let alphabet = Alphabet::new(alphabet.as_ref().as_bytes(), self.case_sensitive_alphabet_allowed)?;
        debug!(alphabet = alphabet.as_str(), "alphabet replaced");
        self.alphabet = alphabet;
        Ok(())
    }

    pub fn reset_default_alphabet(&mut self) {
        debug!("alphabet reset to default");
        self.alphabet = DEFAULT_ALPHABET;
    }

    pub fn case_sensitive_alphabet_allowed(&self) -> bool {
        self.case_sensitive_alphabet_allowed
    }

    /// Does not touch the current alphabet; only later assignments see the new policy.
    pub fn set_case_sensitive_alphabet_allowed(&mut self, allowed: bool) {
        debug!(allowed, "case sensitive alphabet policy changed");
        self.case_sensitive_alphabet_allowed = allowed;
    }

    /// Negative values and zero have no encoding and yield `Ok(None)`.
    pub fn encode(&self, value: i64) -> Result<Option<String>> {
        match u64::try_from(value) {
            Ok(value) => Ok(Encoder::new(&self.alphabet).encode(value)?),
            Err(_) => Ok(None),
        }
    }

    /// Like [`encode`](Self::encode), flooring fractional values first.
    /// `NaN` yields `Ok(None)`; infinities overflow.
    pub fn encode_f64(&self, value: f64) -> Result<Option<String>> {
        if value.is_nan() || value < 0.0 {
            return Ok(None);
        }
        if !value.is_finite() || value > MAX_SAFE_INTEGER as f64 {
            return Err(Error::Overflow);
        }
        Ok(Encoder::new(&self.alphabet).encode(value.floor() as u64)?)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Option<u64>> {
        Ok(Decoder::new(&self.alphabet).decode(input)?)
    }

    pub fn deconstruct(&self, input: impl AsRef<str>) -> Result<Option<Vec<Option<u64>>>> {
        Ok(Deconstructor::new(&self.alphabet).deconstruct(input)?)
    }
}
