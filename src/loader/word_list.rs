//! Word list loader (one card per line)

use crate::core::Card;
use crate::{CahError, Result};
use std::fs;
use std::path::Path;

/// Loader for white/black card lists
pub struct WordListLoader;

impl WordListLoader {
    /// Load a word list from a text file
    pub fn load_from_file(path: &Path) -> Result<Vec<Card>> {
        let content = fs::read_to_string(path).map_err(|source| CahError::WordListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let cards = Self::parse(&content);
        tracing::debug!(path = %path.display(), count = cards.len(), "loaded word list");
        Ok(cards)
    }

    /// Parse newline-delimited cards, skipping blank lines
    pub fn parse(content: &str) -> Vec<Card> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Card::new)
            .filter(|card| !card.is_empty())
            .collect()
    }
}
