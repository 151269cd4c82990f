//! Reassembly of line-delimited streamed completions

use serde::Deserialize;

/// One line of a streamed `/generate` reply
#[derive(Debug, Deserialize)]
struct StreamFragment {
    #[serde(default)]
    response: Option<String>,
}

/// Concatenate the `response` chunks of a newline-delimited JSON stream
///
/// Lines that are blank, not JSON, or lack a `response` string are skipped;
/// partial garbage in a stream never aborts the whole completion.
pub fn reassemble_stream(body: &str) -> String {
    let mut output = String::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<StreamFragment>(line) {
            Ok(StreamFragment {
                response: Some(chunk),
            }) => output.push_str(&chunk),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "skipping malformed stream line"),
        }
    }
    output
}
