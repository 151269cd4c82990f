//! Runtime configuration

use crate::client::ollama::DEFAULT_BASE_URL;
use crate::game::{JudgePolicy, DEFAULT_HAND_SIZE};
use crate::loader::TemplateSet;
use std::path::PathBuf;
use std::time::Duration;

/// Model used when the endpoint offers it
pub const DEFAULT_PREFERRED_MODEL: &str = "qwen3:8b";

/// Everything the binary needs to start a session
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion endpoint API base
    pub base_url: String,
    /// Picked at startup if the endpoint lists it
    pub preferred_model: String,
    /// Use this model regardless of what the endpoint lists
    pub model: Option<String>,
    pub play_template: PathBuf,
    pub judge_template: PathBuf,
    pub white_cards: PathBuf,
    pub black_cards: PathBuf,
    pub hand_size: usize,
    pub judge_policy: JudgePolicy,
    /// Seed for shuffling and dealing
    pub seed: Option<u64>,
    /// Show a spinner while the model works
    pub progress: bool,
    /// HTTP timeout; none by default
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            preferred_model: DEFAULT_PREFERRED_MODEL.to_string(),
            model: None,
            play_template: PathBuf::from("prompts/baseprompt.txt"),
            judge_template: PathBuf::from("prompts/judgeprompt.txt"),
            white_cards: PathBuf::from("data/whiteCards.txt"),
            black_cards: PathBuf::from("data/blackCards.txt"),
            hand_size: DEFAULT_HAND_SIZE,
            judge_policy: JudgePolicy::Strict,
            seed: None,
            progress: true,
            timeout: None,
        }
    }
}

impl Config {
    pub fn templates(&self) -> TemplateSet {
        TemplateSet::new(&self.play_template, &self.judge_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:11434/api");
        assert_eq!(config.preferred_model, "qwen3:8b");
        assert_eq!(config.hand_size, 10);
        assert_eq!(config.judge_policy, JudgePolicy::Strict);
        assert!(config.timeout.is_none());
        assert_eq!(
            config.templates().play_path(),
            std::path::Path::new("prompts/baseprompt.txt")
        );
    }
}
