//! Completion client contract
//!
//! The turn controller talks to the model through [`CompletionClient`]. The
//! production implementation is [`OllamaClient`]; [`ScriptedClient`] replays
//! canned replies.

pub mod extract;
pub mod ollama;
pub mod scripted;
pub mod stream;

pub use extract::{extract_json, JsonObject};
pub use ollama::OllamaClient;
pub use scripted::{ScriptedClient, ScriptedReply};
pub use stream::reassemble_stream;

use crate::Result;

/// Placeholder model name some registries report; never selectable
pub const RESERVED_MODEL: &str = "default";

/// A text-completion endpoint
///
/// Implementations return `CahError::EndpointUnreachable` for transport or
/// status failures, and `CahError::NoModelsAvailable` when the registry is
/// empty after filtering.
#[allow(async_fn_in_trait)]
pub trait CompletionClient {
    /// Model identifiers in registry order, without [`RESERVED_MODEL`]
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Full completion text for `prompt`
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;

    /// Completion followed by trailing JSON extraction
    ///
    /// `Ok(None)` means the model answered but no object could be recovered.
    async fn complete_json(&self, model: &str, prompt: &str) -> Result<Option<JsonObject>> {
        let raw = self.complete(model, prompt).await?;
        tracing::debug!(model, raw = %raw, "raw model output");
        let decision = extract_json(&raw);
        if decision.is_none() {
            tracing::warn!(model, "no trailing JSON object in model output");
        }
        Ok(decision)
    }
}

/// Drop the reserved placeholder and blank names
pub fn filter_models<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| !name.is_empty() && name != RESERVED_MODEL)
        .collect()
}

/// Preferred model if the registry has it, else the first listed
pub fn select_model<'a>(models: &'a [String], preferred: &str) -> Option<&'a str> {
    models
        .iter()
        .find(|m| m.as_str() == preferred)
        .or_else(|| models.first())
        .map(String::as_str)
}
