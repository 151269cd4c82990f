//! Structured decisions parsed from model output, and their validators
//!
//! Model output is duck-typed JSON. The turn that asked classifies it into a
//! [`Decision`] by reading only its own field, so stray keys meant for the
//! other turn kind are ignored. Optional fields get explicit defaults here and
//! nowhere else. Validators turn a decision into an accepted value or a
//! rejection, never a half-valid one.

use crate::client::JsonObject;
use crate::core::{Card, Deck};
use crate::{CahError, Result};
use serde_json::Value;

/// A decision recovered from a model reply
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// `{"card": "..."}` or `{"card": ["...", "..."]}`
    Play { cards: Vec<Card> },
    /// `{"winner": "...", "quip": "..."}`; quip defaults to `""`
    Judge { winner: String, quip: String },
    /// Any other object, kept for diagnostics
    Unrecognized(JsonObject),
}

impl Decision {
    /// Classify a reply to a play-turn; only the `card` field is consulted
    pub fn for_play(object: JsonObject) -> Self {
        match object.get("card").and_then(parse_cards) {
            Some(cards) => Decision::Play { cards },
            None => Decision::Unrecognized(object),
        }
    }

    /// Classify a reply to a judge-turn; only `winner` and `quip` are consulted
    pub fn for_judge(object: JsonObject) -> Self {
        let winner = object
            .get("winner")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|w| !w.is_empty());
        let Some(winner) = winner else {
            return Decision::Unrecognized(object);
        };

        let quip = object
            .get("quip")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Decision::Judge {
            winner: winner.to_string(),
            quip,
        }
    }

    fn describe(&self) -> String {
        match self {
            Decision::Play { .. } => "a play decision".to_string(),
            Decision::Judge { .. } => "a judge decision".to_string(),
            Decision::Unrecognized(object) => Value::Object(object.clone()).to_string(),
        }
    }
}

/// A single card or an array of cards, all non-empty after trimming
fn parse_cards(value: &Value) -> Option<Vec<Card>> {
    let cards: Vec<Card> = match value {
        Value::String(text) => vec![Card::new(text)],
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(Card::new))
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };

    if cards.is_empty() || cards.iter().any(Card::is_empty) {
        return None;
    }
    Some(cards)
}

/// Cards removed from the hand by an accepted play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPlay {
    pub played: Vec<Card>,
}

/// An accepted judge decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub winner: String,
    pub quip: String,
}

/// Whether a judged winner must be one of the submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JudgePolicy {
    /// The winner must match a submission; the submission text is reported
    #[default]
    Strict,
    /// The winner is reported exactly as the model gave it
    Permissive,
}

/// Check a play against the hand and, only if every card is held, remove them
///
/// Cards are removed in the order listed. A card named twice must be held
/// twice. On rejection the hand is untouched.
pub fn validate_play(decision: &Decision, hand: &mut Deck) -> Result<AcceptedPlay> {
    let Decision::Play { cards } = decision else {
        return Err(CahError::NoDecision(format!(
            "expected a card, got {}",
            decision.describe()
        )));
    };

    let mut remaining = hand.clone();
    let mut played = Vec::with_capacity(cards.len());
    for card in cards {
        match remaining.remove(card) {
            Some(held) => played.push(held),
            None => return Err(CahError::CardNotInHand(card.to_string())),
        }
    }

    *hand = remaining;
    Ok(AcceptedPlay { played })
}

/// Check a judge decision against the submissions
pub fn validate_judge<S: AsRef<str>>(
    decision: &Decision,
    submissions: &[S],
    policy: JudgePolicy,
) -> Result<Judgment> {
    let Decision::Judge { winner, quip } = decision else {
        return Err(CahError::NoDecision(format!(
            "expected a winner, got {}",
            decision.describe()
        )));
    };

    let winner = match policy {
        JudgePolicy::Permissive => winner.clone(),
        JudgePolicy::Strict => match_submission(winner, submissions)
            .ok_or_else(|| CahError::WinnerNotSubmitted(winner.clone()))?
            .to_string(),
    };

    Ok(Judgment {
        winner,
        quip: quip.clone(),
    })
}

/// Exact match after card trimming, then a case-insensitive fallback
fn match_submission<'a, S: AsRef<str>>(winner: &str, submissions: &'a [S]) -> Option<&'a str> {
    let wanted = Card::normalize(winner);
    let subs = submissions.iter().map(|s| s.as_ref());

    subs.clone()
        .find(|s| Card::normalize(s) == wanted)
        .or_else(|| {
            let wanted = wanted.to_lowercase();
            subs.clone().find(|s| Card::normalize(s).to_lowercase() == wanted)
        })
}
