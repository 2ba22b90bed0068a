//! Scripted interaction adapter.
//!
//! A headless [`Interaction`] that replays canned prompt answers and serves
//! a fixed clipboard string. Automation and tests run the template scripts
//! through this; a live host implements the port against its own dialogs.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use clipnote_core::{Error, Result};

use crate::ports::Interaction;

/// Replays a fixed sequence of prompt answers.
///
/// Each prompt consumes one queued answer; `None` plays a cancellation.
/// Running out of answers is a host error, not a cancellation, so a test
/// that under-scripts its scenario fails loudly.
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<Option<String>>>,
    clipboard: String,
}

impl ScriptedInteraction {
    /// Interaction with a clipboard and no prompt answers.
    pub fn new(clipboard: impl Into<String>) -> Self {
        Self::with_answers(clipboard, Vec::new())
    }

    /// Interaction with a clipboard and a queue of prompt answers.
    pub fn with_answers(clipboard: impl Into<String>, answers: Vec<Option<String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            clipboard: clipboard.into(),
        }
    }

    /// Interaction whose single prompt answer is `answer`.
    pub fn answering(clipboard: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::with_answers(clipboard, vec![Some(answer.into())])
    }

    /// Interaction whose single prompt is cancelled.
    pub fn cancelling(clipboard: impl Into<String>) -> Self {
        Self::with_answers(clipboard, vec![None])
    }
}

#[async_trait]
impl Interaction for ScriptedInteraction {
    async fn prompt(
        &self,
        title: &str,
        _default: Option<&str>,
        _multiline: bool,
        _seed_from_clipboard: bool,
    ) -> Result<Option<String>> {
        let mut answers = self.answers.lock().await;
        match answers.pop_front() {
            Some(answer) => {
                log::debug!("Prompt '{}' answered from script", title);
                Ok(answer)
            }
            None => Err(Error::host(format!(
                "no scripted answer left for prompt '{}'",
                title
            ))),
        }
    }

    async fn clipboard_text(&self) -> Result<String> {
        Ok(self.clipboard.clone())
    }
}
