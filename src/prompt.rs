//! Prompt construction from text templates
//!
//! Templates are plain text with `{name}` placeholders. Rendering substitutes
//! every occurrence of each known placeholder in a single left-to-right pass,
//! so text inserted for one placeholder is never re-scanned for another.
//! Unknown placeholders are passed through verbatim.

use crate::core::Card;

/// Placeholder for the black card text in the play template
pub const CHALLENGE: &str = "challenge";
/// Placeholder for the numbered hand in the play template
pub const CARDS: &str = "cards";
/// Placeholder for the black card text in the judge template
pub const PROMPT: &str = "prompt";
/// Placeholder for the numbered submissions in the judge template
pub const SUBMISSIONS: &str = "submissions";

/// A prompt template loaded from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        PromptTemplate { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace every `{name}` whose name appears in `values`
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let replacement = after.find('}').and_then(|close| {
                let name = &after[..close];
                values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| (*value, close))
            });

            match replacement {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Render the play prompt: challenge text plus the numbered hand
    pub fn render_play(&self, challenge: &str, hand: &[Card]) -> String {
        let cards = numbered_list(hand);
        self.render(&[(CHALLENGE, challenge), (CARDS, &cards)])
    }

    /// Render the judge prompt: black card plus the numbered submissions
    pub fn render_judge<S: AsRef<str>>(&self, black_card: &str, submissions: &[S]) -> String {
        let list = numbered_list(submissions);
        self.render(&[(PROMPT, black_card), (SUBMISSIONS, &list)])
    }
}

/// 1-based list, one item per line: `"1. first\n2. second"`
pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        assert_eq!(numbered_list(&["Foo", "Bar baz"]), "1. Foo\n2. Bar baz");
        assert_eq!(numbered_list::<&str>(&[]), "");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = PromptTemplate::new("{challenge} / {challenge}");
        assert_eq!(template.render(&[(CHALLENGE, "X")]), "X / X");
    }

    #[test]
    fn test_unknown_placeholder_passes_through() {
        let template = PromptTemplate::new("Answer {challenge} as {format} {");
        assert_eq!(
            template.render(&[(CHALLENGE, "why?")]),
            "Answer why? as {format} {"
        );
    }

    #[test]
    fn test_inserted_text_is_not_rescanned() {
        let template = PromptTemplate::new("Q: {challenge}\nHand:\n{cards}");
        let hand = [Card::new("A"), Card::new("B")];
        assert_eq!(
            template.render_play("What is {cards}?", &hand),
            "Q: What is {cards}?\nHand:\n1. A\n2. B"
        );
    }

    #[test]
    fn test_render_judge() {
        let template = PromptTemplate::new("Black: {prompt}\n{submissions}\nPick one.");
        let rendered = template.render_judge("Why am I sticky?", &["Glue", "Jam"]);
        assert_eq!(rendered, "Black: Why am I sticky?\n1. Glue\n2. Jam\nPick one.");
    }

    #[test]
    fn test_nested_braces_in_template() {
        let template = PromptTemplate::new("Reply as {\"card\": \"...\"} for {challenge}");
        assert_eq!(
            template.render(&[(CHALLENGE, "X")]),
            "Reply as {\"card\": \"...\"} for X"
        );
    }
}
