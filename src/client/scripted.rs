//! Scripted completion client for tests and offline runs
//!
//! Replies are consumed in order; every prompt is recorded so callers can
//! check what was sent.

use crate::client::{filter_models, CompletionClient};
use crate::{CahError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned endpoint reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Full completion text
    Text(String),
    /// Transport failure with this message
    Unreachable(String),
}

/// A completion client that follows a predetermined script
#[derive(Debug, Default)]
pub struct ScriptedClient {
    models: Vec<String>,
    replies: RefCell<VecDeque<ScriptedReply>>,
    prompts: RefCell<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedClient {
            models: models.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Queue a completion text
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies
            .borrow_mut()
            .push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies
            .borrow_mut()
            .push_back(ScriptedReply::Unreachable(message.into()));
        self
    }

    /// `(model, prompt)` pairs received so far
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl CompletionClient for ScriptedClient {
    async fn list_models(&self) -> Result<Vec<String>> {
        let models = filter_models(self.models.iter().cloned());
        if models.is_empty() {
            return Err(CahError::NoModelsAvailable);
        }
        Ok(models)
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        self.prompts
            .borrow_mut()
            .push((model.to_string(), prompt.to_string()));

        match self.replies.borrow_mut().pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Unreachable(message)) => Err(CahError::EndpointUnreachable(message)),
            None => Err(CahError::EndpointUnreachable("no scripted reply left".to_string())),
        }
    }
}
