//! Prompt template files
//!
//! Templates are re-read on every turn so they can be tweaked while a game is
//! running.

use crate::prompt::PromptTemplate;
use crate::{CahError, Result};
use std::path::{Path, PathBuf};

/// Locations of the play and judge templates
#[derive(Debug, Clone)]
pub struct TemplateSet {
    play: PathBuf,
    judge: PathBuf,
}

impl TemplateSet {
    pub fn new(play: impl Into<PathBuf>, judge: impl Into<PathBuf>) -> Self {
        TemplateSet {
            play: play.into(),
            judge: judge.into(),
        }
    }

    pub fn play_path(&self) -> &Path {
        &self.play
    }

    pub fn judge_path(&self) -> &Path {
        &self.judge
    }

    /// Read the play template (`{challenge}`, `{cards}`)
    pub async fn load_play(&self) -> Result<PromptTemplate> {
        load_template(&self.play).await
    }

    /// Read the judge template (`{prompt}`, `{submissions}`)
    pub async fn load_judge(&self) -> Result<PromptTemplate> {
        load_template(&self.judge).await
    }
}

async fn load_template(path: &Path) -> Result<PromptTemplate> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CahError::TemplateUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(PromptTemplate::new(text))
}
