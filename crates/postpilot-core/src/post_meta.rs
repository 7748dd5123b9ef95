//! Privacy-preserving post metadata.
//!
//! Raw post content is never persisted anywhere in the application. The only
//! storable record of a post's body is this metadata pair: its length and a
//! truncated SHA-256 fingerprint used for deduplication. The truncation keeps
//! the first 17 hex characters of the digest.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest.
const HASH_PREFIX_LEN: usize = 17;

/// The storable footprint of a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub content_length: usize,
    pub content_hash: String,
}

impl PostMetadata {
    /// Computes the metadata for a post body. The body itself is dropped by
    /// the caller after this — only the footprint may be stored.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
        Self {
            content_length: content.chars().count(),
            content_hash: digest[..HASH_PREFIX_LEN].to_string(),
        }
    }

    /// Privacy-safe label for UI display in place of the content.
    #[must_use]
    pub fn display_label(&self, ai_generated: bool) -> String {
        if self.content_length == 0 {
            return "[No content recorded]".to_string();
        }
        let suffix = if ai_generated { " (AI Generated)" } else { "" };
        format!("[{} character post{suffix}]", self.content_length)
    }
}
