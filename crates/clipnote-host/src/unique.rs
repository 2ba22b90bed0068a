//! Collision-free path resolution.
//!
//! New notes land at `folder/base`; when that name is taken the resolver
//! walks `folder/base (1)`, `folder/base (2)`, ... until a probe comes back
//! free. Probes and the eventual move are separate awaits, so uniqueness
//! holds only at the instant of resolution.

use clipnote_core::Result;

use crate::ports::NoteVault;

/// Resolve a free extensionless stem under `folder`.
///
/// Each candidate is probed as `candidate.<extension>`; the returned stem
/// carries no extension (the relocation restores it). A trailing slash on
/// `folder` is tolerated; an empty folder resolves bare names at the vault
/// root. The counter has no upper bound but every candidate is distinct,
/// so the walk terminates for any finite set of existing files.
pub async fn resolve_unique_path<V>(
    vault: &V,
    folder: &str,
    base: &str,
    extension: &str,
) -> Result<String>
where
    V: NoteVault + ?Sized,
{
    let folder = folder.trim_end_matches('/');

    let stem = join_stem(folder, base);
    if !vault.exists(&format!("{}.{}", stem, extension)).await? {
        return Ok(stem);
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = join_stem(folder, &format!("{} ({})", base, counter));
        if !vault.exists(&format!("{}.{}", candidate, extension)).await? {
            log::debug!("'{}' taken, resolved to '{}'", stem, candidate);
            return Ok(candidate);
        }
        counter += 1;
    }
}

fn join_stem(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}
