//! Per-process game session: the hand, the card collections and the model

use crate::core::{Card, Deck};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::collections::VecDeque;

/// Default number of cards dealt into a hand
pub const DEFAULT_HAND_SIZE: usize = 10;

/// Game session state passed explicitly to every turn
///
/// Holds the single hand, the white collection `deal` samples from, and the
/// queue of black cards `black` draws from. Both collections are shuffled once
/// when the session is created.
#[derive(Debug)]
pub struct Session {
    hand: Deck,
    white: Vec<Card>,
    black: VecDeque<Card>,
    model: String,
    rng: ChaCha12Rng,
}

impl Session {
    /// Create a session; `seed` makes shuffling and dealing reproducible
    pub fn new(
        model: impl Into<String>,
        mut white: Vec<Card>,
        mut black: Vec<Card>,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        white.shuffle(&mut rng);
        black.shuffle(&mut rng);

        Session {
            hand: Deck::new(),
            white,
            black: black.into(),
            model: model.into(),
            rng,
        }
    }

    /// Session with no card collections, for driving turns directly
    pub fn with_hand(model: impl Into<String>, hand: Deck) -> Self {
        let mut session = Session::new(model, Vec::new(), Vec::new(), Some(0));
        session.hand = hand;
        session
    }

    pub fn hand(&self) -> &Deck {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Append a card to the hand
    pub fn add_card(&mut self, card: impl Into<Card>) -> Card {
        let card = card.into();
        self.hand.add(card.clone());
        card
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Replace the hand with up to `count` distinct white cards
    ///
    /// The white collection is sampled, not consumed. Returns the number of
    /// cards dealt.
    pub fn deal(&mut self, count: usize) -> usize {
        let dealt: Vec<Card> = self
            .white
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect();
        self.hand.clear();
        self.hand.add_all(dealt);
        self.hand.len()
    }

    /// Take the next black card off the queue
    pub fn next_black(&mut self) -> Option<Card> {
        self.black.pop_front()
    }

    pub fn black_remaining(&self) -> usize {
        self.black.len()
    }

    pub fn white_count(&self) -> usize {
        self.white.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|n| Card::new(*n)).collect()
    }

    #[test]
    fn test_deal_replaces_hand() {
        let white = cards(&["A", "B", "C", "D", "E"]);
        let mut session = Session::new("m", white.clone(), Vec::new(), Some(7));
        session.add_card("Old");

        assert_eq!(session.deal(3), 3);
        assert_eq!(session.hand().len(), 3);
        assert!(!session.hand().contains(&Card::new("Old")));
        for card in session.hand() {
            assert!(white.contains(card));
        }
        assert_eq!(session.white_count(), 5);
    }

    #[test]
    fn test_deal_is_capped_by_collection() {
        let mut session = Session::new("m", cards(&["A", "B"]), Vec::new(), Some(1));
        assert_eq!(session.deal(10), 2);

        let mut hand = session.hand().cards().to_vec();
        hand.sort();
        assert_eq!(hand, cards(&["A", "B"]));
    }

    #[test]
    fn test_deal_is_deterministic_with_seed() {
        let white: Vec<Card> = (0..40).map(|i| Card::new(format!("card {i}"))).collect();
        let mut a = Session::new("m", white.clone(), Vec::new(), Some(99));
        let mut b = Session::new("m", white, Vec::new(), Some(99));
        a.deal(10);
        b.deal(10);
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn test_black_queue_drains() {
        let mut session = Session::new("m", Vec::new(), cards(&["X?", "Y?"]), Some(3));
        assert_eq!(session.black_remaining(), 2);

        let mut drawn = vec![session.next_black().unwrap(), session.next_black().unwrap()];
        drawn.sort();
        assert_eq!(drawn, cards(&["X?", "Y?"]));
        assert!(session.next_black().is_none());
    }

    #[test]
    fn test_add_and_clear() {
        let mut session = Session::with_hand("m", Deck::new());
        assert_eq!(session.add_card("Foo bar.  "), Card::new("Foo bar"));
        assert_eq!(session.hand().len(), 1);
        session.clear_hand();
        assert!(session.hand().is_empty());
    }
}
