//! Storage key generation for upload artifacts.
//!
//! Each upload gets two keys, one for the original bytes and one for the
//! annotated result. Both embed a fresh random token, so concurrent uploads
//! with identical client filenames never collide and client-controlled names
//! cannot cause traversal or overwrite. The sanitized filename fragment is
//! kept purely for human readability.

use uuid::Uuid;

const UPLOADS_PREFIX: &str = "uploads";
const MAX_FILENAME_LEN: usize = 128;

/// The pair of storage keys derived for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactKeys {
    /// Key for the original upload bytes.
    pub original: String,
    /// Key for the annotated result image.
    pub annotated: String,
}

impl ArtifactKeys {
    /// Derive the two keys for `client_filename`.
    pub fn for_upload(client_filename: &str) -> Self {
        let safe = sanitize_filename(client_filename);
        let original = format!(
            "{}/{}_{}",
            UPLOADS_PREFIX,
            Uuid::new_v4().simple(),
            safe
        );
        let annotated = format!(
            "{}/detected_{}_{}",
            UPLOADS_PREFIX,
            Uuid::new_v4().simple(),
            safe
        );
        Self {
            original,
            annotated,
        }
    }
}

/// Reduce a client-supplied filename to a safe display fragment.
///
/// Strips path components, maps anything outside `[A-Za-z0-9._-]` to `_`,
/// caps the length, and substitutes a placeholder for empty or degenerate
/// names. Uniqueness never depends on this value.
pub fn sanitize_filename(filename: &str) -> String {
    let base = std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    if base.contains("..") {
        return "file".to_string();
    }
    let s: String = base
        .chars()
        .take(MAX_FILENAME_LEN)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if s.trim_matches(['_', '.']).is_empty() {
        "file".to_string()
    } else {
        s
    }
}
