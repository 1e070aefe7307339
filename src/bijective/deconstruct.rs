//! Splitting mixed tokens such as `"AE18"` into alternating letter and digit runs.

use super::{decode, Alphabet, Decoder, DEFAULT_ALPHABET, MAX_SAFE_INTEGER};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Maximal runs of ASCII digits or of anything else.
static RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]+|[^0-9]+").expect("Invalid run pattern"));

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Cannot deconstruct when the alphabet contains numbers: '{character}' at index {index}")]
    UnsupportedAlphabet { character: char, index: usize },
    #[error("Deconstructed value exceeds the maximum safe integer ({max})", max = MAX_SAFE_INTEGER)]
    Overflow,
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        match error {
            decode::Error::Overflow => Error::Overflow,
        }
    }
}

pub struct Deconstructor<'a> {
    alphabet: &'a Alphabet,
    decoder: Decoder<'a>,
}

impl<'a> Deconstructor<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            decoder: Decoder::new(alphabet),
        }
    }

    /// Returns one value per run, in order. Digit runs are read as decimal;
    /// every other run is decoded through the alphabet and is `None` when it
    /// holds a character the alphabet lacks.
    ///
    /// An empty input yields `Ok(None)`. Fails if the alphabet itself contains a
    /// digit, since run boundaries would then be ambiguous.
    pub fn deconstruct(&self, input: impl AsRef<str>) -> Result<Option<Vec<Option<u64>>>, Error> {
        if let Some((character, index)) = self.alphabet.find_digit() {
            return Err(Error::UnsupportedAlphabet { character, index });
        }
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(None);
        }
        RUNS.find_iter(input)
            .map(|run| self.value(run.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn value(&self, run: &str) -> Result<Option<u64>, Error> {
        let value = if run.as_bytes()[0].is_ascii_digit() {
            let value = run.parse::<u64>().map_err(|_| Error::Overflow)?;
            if value > MAX_SAFE_INTEGER {
                return Err(Error::Overflow);
            }
            Some(value)
        } else {
            self.decoder.decode(run)?
        };
        trace!(run, ?value, "deconstructed run");
        Ok(value)
    }

    pub fn default() -> &'static Self {
        &DECONSTRUCTOR
    }
}

const DECONSTRUCTOR: Deconstructor = Deconstructor::new(&DEFAULT_ALPHABET);

pub fn deconstruct(input: impl AsRef<str>) -> Result<Option<Vec<Option<u64>>>, Error> {
    Deconstructor::default().deconstruct(input)
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Deconstructor, Error};
    use test_case::test_case;

    #[test_case("A", &[Some(1)])]
    #[test_case("A1", &[Some(1), Some(1)])]
    #[test_case("C7", &[Some(3), Some(7)])]
    #[test_case("7C", &[Some(7), Some(3)])]
    #[test_case("AE18", &[Some(31), Some(18)])]
    #[test_case("18AE", &[Some(18), Some(31)])]
    #[test_case("1", &[Some(1)])]
    #[test_case("733", &[Some(733)])]
    #[test_case("007", &[Some(7)]; "leading zeros")]
    #[test_case("7C82AA", &[Some(7), Some(3), Some(82), Some(27)])]
    #[test_case("C3ABC123EFGH456", &[Some(3), Some(3), Some(731), Some(123), Some(92126), Some(456)])]
    #[test_case("A1aB2B", &[Some(1), Some(1), None, Some(2), Some(2)])]
    #[test_case("7AC!23A1%", &[Some(7), None, Some(23), Some(1), Some(1), None])]
    #[test_case("&", &[None]; "single unknown symbol")]
    fn deconstruct(input: &str, expected: &[Option<u64>]) {
        assert_eq!(super::deconstruct(input), Ok(Some(expected.to_vec())));
    }

    #[test]
    fn deconstruct_empty() {
        assert_eq!(super::deconstruct(""), Ok(None));
    }

    #[test]
    fn deconstruct_with_alphabet() {
        let alphabet = Alphabet::new(b"EDCBA", false).unwrap();
        let deconstructor = Deconstructor::new(&alphabet);
        assert_eq!(deconstructor.deconstruct("EEE5B"), Ok(Some(vec![Some(31), Some(5), Some(4)])));
    }

    #[test]
    fn unsupported_alphabet() {
        let alphabet = Alphabet::new(b"ABC123", false).unwrap();
        let deconstructor = Deconstructor::new(&alphabet);
        let error = deconstructor.deconstruct("C3").unwrap_err();
        assert_eq!(error, Error::UnsupportedAlphabet { character: '1', index: 3 });
        assert!(error.to_string().contains("alphabet contains numbers"));
        assert_eq!(deconstructor.deconstruct(""), Err(error));
    }

    #[test]
    fn overflow() {
        assert_eq!(super::deconstruct("A9007199254740992"), Err(Error::Overflow));
        assert_eq!(super::deconstruct("A99999999999999999999999"), Err(Error::Overflow));
        assert_eq!(super::deconstruct("BKTXHSOGHKKF1"), Err(Error::Overflow));
        assert_eq!(
            super::deconstruct("9007199254740991"),
            Ok(Some(vec![Some(super::MAX_SAFE_INTEGER)]))
        );
    }
}
