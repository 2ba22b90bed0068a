//! Real-filesystem vault adapter.
//!
//! [`FsVault`] implements the [`NoteVault`] port against a vault directory
//! on disk. Vault-relative paths resolve under the root with a traversal
//! guard, note rewrites go through a temp file plus rename, and the active
//! note is tracked the way the host runtime tracks its focused tab.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::sync::RwLock;
use tracing::instrument;

use clipnote_core::{Error, Result};

use crate::frontmatter;
use crate::ports::{FrontMatterMutator, NoteVault};

/// Extension restored on a moved note whose source file has none.
pub const DEFAULT_NOTE_EXTENSION: &str = "md";

/// A vault rooted at a directory on disk.
pub struct FsVault {
    root: PathBuf,
    active: RwLock<Option<PathBuf>>,
}

impl FsVault {
    /// Create a vault over an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::invalid_path(format!(
                "vault root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self {
            root,
            active: RwLock::new(None),
        })
    }

    /// Vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the currently active note, if any.
    pub async fn active_note(&self) -> Option<PathBuf> {
        self.active.read().await.clone()
    }

    /// Resolve a vault-relative path under the root.
    ///
    /// Absolute inputs and paths escaping the root through `..` are
    /// rejected rather than clamped.
    fn resolve_rel(&self, rel: &str) -> Result<PathBuf> {
        let rel_path = Path::new(rel);
        if rel_path.is_absolute() {
            return Err(Error::invalid_path(format!(
                "expected vault-relative path, got {}",
                rel
            )));
        }

        let mut resolved = self.root.clone();
        let mut depth = 0usize;
        for component in rel_path.components() {
            match component {
                Component::Normal(name) => {
                    resolved.push(name);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth == 0 {
                        return Err(Error::path_traversal(rel_path.to_path_buf()));
                    }
                    resolved.pop();
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::invalid_path(format!(
                        "unsupported path component in {}",
                        rel
                    )));
                }
            }
        }

        Ok(resolved)
    }

    /// Write `content` to `path` through a temp file and rename.
    async fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, content)
            .await
            .map_err(Error::io)?;
        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(Error::io)?;
        Ok(())
    }
}

#[async_trait]
impl NoteVault for FsVault {
    async fn exists(&self, rel: &str) -> Result<bool> {
        let path = self.resolve_rel(rel)?;
        tokio::fs::try_exists(&path).await.map_err(Error::io)
    }

    #[instrument(skip(self), fields(file = %rel), name = "vault_open_template")]
    async fn open_template(&self, rel: &str) -> Result<PathBuf> {
        let path = self.resolve_rel(rel)?;
        let found = tokio::fs::try_exists(&path).await.map_err(Error::io)?;
        if !found {
            return Err(Error::file_not_found(path));
        }

        log::debug!("Opened template {} as active note", path.display());
        let mut active = self.active.write().await;
        *active = Some(path.clone());
        Ok(path)
    }

    #[instrument(skip(self), fields(stem = %stem), name = "vault_move_active")]
    async fn move_active(&self, stem: &str) -> Result<PathBuf> {
        let source = {
            let active = self.active.read().await;
            active
                .clone()
                .ok_or_else(|| Error::host("no active note to move"))?
        };

        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(DEFAULT_NOTE_EXTENSION);
        let target = self.resolve_rel(&format!("{}.{}", stem, extension))?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(Error::io)?;
        }
        tokio::fs::rename(&source, &target)
            .await
            .map_err(Error::io)?;
        log::info!("Moved {} -> {}", source.display(), target.display());

        let mut active = self.active.write().await;
        *active = Some(target.clone());
        Ok(target)
    }

    #[instrument(skip(self, mutator), fields(file = ?note), name = "vault_edit_front_matter")]
    async fn edit_front_matter(&self, note: &Path, mutator: FrontMatterMutator) -> Result<()> {
        if !note.starts_with(&self.root) {
            return Err(Error::path_traversal(note.to_path_buf()));
        }
        let found = tokio::fs::try_exists(note).await.map_err(Error::io)?;
        if !found {
            return Err(Error::file_not_found(note));
        }

        let content = tokio::fs::read_to_string(note).await.map_err(Error::io)?;
        let mut doc = frontmatter::parse_document(&content)?;
        mutator(&mut doc.front_matter);
        let rendered = frontmatter::render_document(&doc)?;

        log::debug!("Rewriting front matter of {}", note.display());
        self.write_atomic(note, &rendered).await
    }
}
