//! Card values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A white or black card
///
/// Cards are opaque text. Leading/trailing whitespace and trailing periods are
/// stripped on construction, so two cards compare equal iff their trimmed text
/// is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Card(String);

impl Card {
    pub fn new(text: impl AsRef<str>) -> Self {
        Card(Self::normalize(text.as_ref()).to_string())
    }

    /// Strip surrounding whitespace and any run of trailing periods
    /// (interleaved with whitespace) from raw card text
    pub fn normalize(raw: &str) -> &str {
        raw.trim()
            .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Card {
    fn from(text: String) -> Self {
        Card::new(text)
    }
}

impl From<&str> for Card {
    fn from(text: &str) -> Self {
        Card::new(text)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl AsRef<str> for Card {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Card {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Card {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
