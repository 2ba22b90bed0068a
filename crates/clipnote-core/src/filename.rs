//! Filename sanitizing for note titles.
//!
//! Vault filenames cannot contain `: * \ / < > | ? # ^ [ ]`. [`sanitize`]
//! rewrites a candidate name by table-driven substitution, re-running the
//! table until a full pass leaves the string unchanged. Each pass replaces
//! only the first occurrence per table entry, so repeated characters
//! converge over several passes; the trailing pipe entry catches a second
//! `|` within the same pass and maps it to `I`.

/// Characters that may not appear in a vault filename.
pub const RESERVED_CHARS: &[char] = &[
    ':', '*', '\\', '/', '<', '>', '|', '?', '#', '^', '[', ']',
];

/// One sanitizing pass: first occurrence only, applied in table order.
const PASS: &[(char, &str)] = &[
    (':', " -"),
    ('*', "_"),
    ('\\', "_"),
    ('/', "_"),
    ('<', "_"),
    ('>', "_"),
    ('|', "_"),
    ('?', "_"),
    ('#', "_"),
    ('^', "_"),
    ('[', "("),
    (']', ")"),
    ('|', "I"),
];

/// Returns true if `name` contains any reserved filename character.
#[inline]
pub fn has_reserved_chars(name: &str) -> bool {
    name.contains(RESERVED_CHARS)
}

/// Rewrite `raw` into a legal filename.
///
/// Deterministic and idempotent. An empty input maps to `"-"` so callers
/// never receive an empty name.
///
/// ```
/// use clipnote_core::filename::sanitize;
///
/// assert_eq!(sanitize("projects: 2024/Q1"), "projects - 2024_Q1");
/// assert_eq!(sanitize("plain name"), "plain name");
/// ```
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    if !has_reserved_chars(raw) {
        return raw.to_string();
    }

    let mut current = raw.to_string();
    loop {
        let mut next = current.clone();
        for (from, to) in PASS {
            next = next.replacen(*from, to, 1);
        }
        if next == current {
            // Fixed point: every table entry found nothing left to replace.
            return next;
        }
        current = next;
    }
}

/// Cap `raw` at `max_chars` characters, then sanitize.
///
/// Truncation is by raw character count; substitution may widen the result
/// past the cap afterwards.
pub fn derive_title(raw: &str, max_chars: usize) -> String {
    let capped: String = raw.chars().take(max_chars).collect();
    sanitize(&capped)
}
