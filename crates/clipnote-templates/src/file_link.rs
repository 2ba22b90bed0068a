//! Clipboard file-path to markdown link.
//!
//! Reads the clipboard, folds the path into forward-slash form, and emits
//! `[decoded title](encoded link)`. The path may reference a file or
//! folder that does not exist yet; nothing is validated.

use tracing::instrument;

use clipnote_core::{Result, normalize_clipboard_path};
use clipnote_host::ports::Interaction;

use crate::create_note::NoteScripts;
use crate::diagnostics::diagnostic_trace;

impl<V, I, C> NoteScripts<V, I, C>
where
    I: Interaction,
{
    /// Turn the clipboard's file path into a markdown link.
    ///
    /// On failure the returned string is the diagnostic trace instead of a
    /// link; the host template inserts whichever it gets.
    #[instrument(skip(self), name = "insert_file_link")]
    pub async fn insert_file_link(&self) -> String {
        match self.insert_file_link_inner().await {
            Ok(markdown) => markdown,
            Err(e) => {
                log::error!("File link insertion failed: {}", e);
                diagnostic_trace("inserting file link from clipboard", e)
            }
        }
    }

    async fn insert_file_link_inner(&self) -> Result<String> {
        let clipboard = self.interaction.clipboard_text().await?;
        let pair = normalize_clipboard_path(&clipboard);
        log::debug!(
            "Normalized clipboard path: title='{}', link='{}'",
            pair.title,
            pair.link
        );
        Ok(pair.to_markdown())
    }
}
