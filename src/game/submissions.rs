//! Collection of judge-turn submissions

use crate::input::LineSource;
use crate::Result;

/// Sentinel that ends submission entry (case-insensitive)
pub const DONE_SENTINEL: &str = "done";

pub const SUBMISSION_PROMPT: &str = "Enter submission (or \"done\" to finish): ";

/// Read submissions one line at a time until the sentinel or end of input
///
/// Blank lines are ignored and re-prompted. Entries are trimmed and kept in
/// entry order.
pub async fn collect_submissions<L: LineSource>(input: &mut L) -> Result<Vec<String>> {
    let mut submissions = Vec::new();

    while let Some(line) = input.read_line(SUBMISSION_PROMPT).await? {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case(DONE_SENTINEL) {
            return Ok(submissions);
        }
        submissions.push(entry.to_string());
    }

    tracing::debug!(count = submissions.len(), "input ended before sentinel");
    Ok(submissions)
}
