use serde::{Deserialize, Serialize};

/// Construction-time settings for an [`AlphanumericEncoder`](crate::AlphanumericEncoder).
///
/// Field names follow camelCase when (de)serialized, e.g.
/// `{"caseSensitiveAlphabetAllowed": true, "alphabet": "abcd"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Keep the alphabet's case as given instead of uppercasing it.
    pub case_sensitive_alphabet_allowed: bool,
    /// Alphabet to use instead of the default `A`..`Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_sensitive_alphabet_allowed(mut self, allowed: bool) -> Self {
        self.case_sensitive_alphabet_allowed = allowed;
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }
}
