//! Ordered, mutable card collection (the hand)

use crate::core::Card;

/// An ordered sequence of cards
///
/// Duplicates are allowed and distinct by position. Value-based operations
/// (`find`, `remove`) act on the first match. Nothing here fails for
/// structural reasons: a missing card is reported as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck { cards: Vec::new() }
    }

    pub fn from_cards<I, C>(cards: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Card>,
    {
        Deck {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one card
    pub fn add(&mut self, card: impl Into<Card>) {
        self.cards.push(card.into());
    }

    /// Append many cards, preserving their order
    pub fn add_all<I, C>(&mut self, cards: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Card>,
    {
        self.cards.extend(cards.into_iter().map(Into::into));
    }

    /// Remove and return the last card
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Find the stored card equal by value to `card`
    pub fn find(&self, card: &Card) -> Option<&Card> {
        self.cards.iter().find(|c| *c == card)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.find(card).is_some()
    }

    /// Remove the first card equal by value to `card`
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c == card)?;
        // remove() rather than swap_remove(): prompt numbering follows hand order
        Some(self.cards.remove(pos))
    }

    /// Insert at `index`, shifting later cards; an index past the end appends
    pub fn insert(&mut self, index: usize, card: impl Into<Card>) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card.into());
    }

    /// Unbiased in-place permutation (Fisher-Yates)
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
