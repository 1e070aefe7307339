/// Largest possible alphabet: every ASCII letter and digit exactly once.
pub const MAX_LEN: usize = 62;

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("The alphabet cannot be empty")]
    Empty,
    #[error("All characters in the alphabet must be alphanumeric: non-ascii byte {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    #[error("All characters in the alphabet must be alphanumeric: '{character}' at index {index}")]
    NonAlphanumericCharacter { character: char, index: usize },
    #[error("The alphabet has at least one repeating symbol: {character} (indexes {first} and {second})")]
    RepeatingSymbol { character: char, first: usize, second: usize },
}

/// An ordered set of unique ASCII alphanumeric symbols.
///
/// Symbol `i` (0-based) stands for the bijective digit value `i + 1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    encode: [u8; MAX_LEN],
    len: usize,
    decode: [Option<u8>; 128],
}

const fn normalize(character: u8, case_sensitive: bool) -> u8 {
    if case_sensitive {
        character
    } else {
        character.to_ascii_uppercase()
    }
}

impl Alphabet {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[..self.len][value]
    }

    /// Returns the 0-based position of `value`, or `None` if it is not a symbol of this alphabet.
    pub fn decode(&self, value: u8) -> Option<u8> {
        if value >= 128 {
            return None;
        }
        self.decode[value as usize]
    }

    /// Validates `characters` and builds the lookup tables.
    ///
    /// Unless `case_sensitive` is set, the characters are uppercased before the
    /// uniqueness check, so `"ABCDa"` is rejected and `"abcd"` becomes `"ABCD"`.
    pub const fn new(characters: &[u8], case_sensitive: bool) -> Result<Self, Error> {
        if characters.is_empty() {
            return Err(Error::Empty);
        }

        let mut index = 0;
        while index < characters.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if !character.is_ascii_alphanumeric() {
                return Err(Error::NonAlphanumericCharacter {
                    character: character as char,
                    index,
                });
            }
            index += 1;
        }

        // The reported symbol is the earliest one in the alphabet that occurs twice.
        let mut seen = [usize::MAX; 128];
        let mut repeated: Option<(usize, usize)> = None;
        index = 0;
        while index < characters.len() {
            let character = normalize(characters[index], case_sensitive) as usize;
            let previous = seen[character];
            if previous == usize::MAX {
                seen[character] = index;
            } else {
                let earlier = match repeated {
                    Some((position, _)) => previous < position,
                    None => true,
                };
                if earlier {
                    repeated = Some((previous, index));
                }
            }
            index += 1;
        }
        if let Some((first, second)) = repeated {
            return Err(Error::RepeatingSymbol {
                character: normalize(characters[first], case_sensitive) as char,
                first,
                second,
            });
        }

        let mut encode = [0u8; MAX_LEN];
        let mut decode: [Option<u8>; 128] = [None; 128];
        index = 0;
        while index < characters.len() {
            let character = normalize(characters[index], case_sensitive);
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self {
            encode,
            len: characters.len(),
            decode,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn as_str(&self) -> &str {
        // Every symbol passed the alphanumeric check, so the bytes are ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.encode[..self.len]) }
    }

    /// Returns the first digit symbol and its index, if the alphabet has one.
    pub fn find_digit(&self) -> Option<(char, usize)> {
        self.as_str().bytes().enumerate().find_map(|(index, character)| {
            if character.is_ascii_digit() {
                Some((character as char, index))
            } else {
                None
            }
        })
    }
}

pub const DEFAULT_ALPHABET: Alphabet = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ", false) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

impl Default for Alphabet {
    fn default() -> Self {
        DEFAULT_ALPHABET
    }
}
