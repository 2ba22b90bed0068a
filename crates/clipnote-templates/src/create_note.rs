//! Note creation from prompt/clipboard text.
//!
//! The protocol: prompt for free-form input, open the template as the
//! active note, derive a filesystem-safe title, relocate the note under a
//! date-stamped folder at a collision-free path, and hand the calling
//! template a [`NoteSeed`]. When the raw name line survives sanitizing
//! unchanged there is nothing to disambiguate and the seed carries no
//! alias; otherwise the original line is deferred into the note's front
//! matter once template expansion completes.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

use clipnote_core::{NoteSeed, Result, ScriptConfig, derive_title};
use clipnote_host::ports::{Calendar, Interaction, NoteVault};
use clipnote_host::unique::resolve_unique_path;

use crate::diagnostics::diagnostic_trace;
use crate::hooks::HookQueue;
use crate::markdown::split_markdown_link;

/// The template entry points, wired to host capability ports.
pub struct NoteScripts<V, I, C> {
    pub vault: Arc<V>,
    pub interaction: Arc<I>,
    pub calendar: Arc<C>,
    pub config: ScriptConfig,
}

impl<V, I, C> NoteScripts<V, I, C>
where
    V: NoteVault + 'static,
    I: Interaction,
    C: Calendar,
{
    /// Wire the entry points to a vault, an interaction surface, and a
    /// calendar.
    pub fn new(vault: Arc<V>, interaction: Arc<I>, calendar: Arc<C>, config: ScriptConfig) -> Self {
        Self {
            vault,
            interaction,
            calendar,
            config,
        }
    }

    /// Create a new note from prompt input.
    ///
    /// `None` means the user cancelled the prompt; no note was created and
    /// nothing was deferred. Every other failure is logged and returned as
    /// a degraded seed whose text carries the diagnostic trace, so the
    /// host template never sees an error.
    #[instrument(
        skip(self, hooks),
        fields(template = %template_file, dialog = %dialog_title),
        name = "create_note"
    )]
    pub async fn create_note(
        &self,
        hooks: &HookQueue,
        template_file: &str,
        dialog_title: &str,
    ) -> Option<NoteSeed> {
        match self
            .create_note_inner(hooks, template_file, dialog_title)
            .await
        {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Note creation failed: {}", e);
                Some(NoteSeed::failure(diagnostic_trace(
                    "creating note from prompt input",
                    e,
                )))
            }
        }
    }

    async fn create_note_inner(
        &self,
        hooks: &HookQueue,
        template_file: &str,
        dialog_title: &str,
    ) -> Result<Option<NoteSeed>> {
        let raw = match self
            .interaction
            .prompt(dialog_title, None, true, true)
            .await?
        {
            Some(input) => input,
            None => {
                log::debug!("Prompt cancelled, no note created");
                return Ok(None);
            }
        };

        self.vault.open_template(template_file).await?;

        // A pasted markdown link contributes a title line and a body line.
        let input = match split_markdown_link(&raw) {
            Some((text, link)) => format!("{}\n{}", text, link),
            None => raw,
        };

        let (name_line, body) = match input.find('\n') {
            Some(i) => (input[..i].to_string(), input[i + 1..].to_string()),
            None => (input.clone(), String::new()),
        };

        let title = derive_title(&name_line, self.config.max_title_chars);

        let folder = self.calendar.date_folder(&self.config.date_folder_pattern);
        let stem = resolve_unique_path(
            self.vault.as_ref(),
            &folder,
            &title,
            &self.config.note_extension,
        )
        .await?;
        let note_path = self.vault.move_active(&stem).await?;

        // Plain single-line name, nothing to disambiguate.
        if input == title {
            return Ok(Some(NoteSeed::plain(input, "")));
        }

        let alias = if name_line == title {
            None
        } else {
            Some(name_line)
        };

        if let Some(alias_value) = alias.clone() {
            self.defer_alias_write(hooks, note_path, alias_value).await;
        }

        Ok(Some(NoteSeed {
            title,
            alias,
            text: body,
        }))
    }

    /// Queue the front-matter alias write for after template expansion.
    async fn defer_alias_write(&self, hooks: &HookQueue, note_path: PathBuf, alias: String) {
        let vault = Arc::clone(&self.vault);
        let key = self.config.alias_key.clone();

        hooks
            .defer(move || {
                Box::pin(async move {
                    vault
                        .edit_front_matter(&note_path, Box::new(move |fm| fm.set(key, alias)))
                        .await
                })
            })
            .await;
    }
}
