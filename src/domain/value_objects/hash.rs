//! Content Hash Value Object
//!
//! A validated, immutable SHA-256 digest of a byte blob.
//! Used to decide whether a materialized asset is stale.

use std::fmt;

use sha2::{Digest, Sha256};

/// Hex-encode the SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Content hash value object
///
/// Wraps a lowercase hex SHA-256 string (64 chars, no prefix), which is also
/// the exact text stored in digest sidecar files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Create a ContentHash from an already computed hex digest
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    /// Create a ContentHash by computing SHA-256 of content
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(digest(content))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Compare against persisted sidecar text, ignoring surrounding whitespace.
    pub fn matches_persisted(&self, persisted: &[u8]) -> bool {
        std::str::from_utf8(persisted)
            .map(|s| s.trim() == self.0)
            .unwrap_or(false)
    }

    /// Sidecar file body: the digest followed by a newline.
    pub fn sidecar_contents(&self) -> String {
        format!("{}\n", self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_known_sha256() {
        assert_eq!(
            digest(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn digest_of_empty_input() {
        assert_eq!(
            digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn from_bytes_is_64_hex_chars() {
        let hash = ContentHash::from_bytes(b"FROM discourse/base");
        assert_eq!(hash.hex().len(), 64);
        assert!(hash.hex().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_content_different_hash() {
        let h1 = ContentHash::from_bytes(b"test1");
        let h2 = ContentHash::from_bytes(b"test2");
        assert_ne!(h1, h2);
    }

    #[test]
    fn matches_persisted_ignores_whitespace() {
        let hash = ContentHash::new("abc123");
        assert!(hash.matches_persisted(b"abc123\n"));
        assert!(hash.matches_persisted(b"  abc123\r\n\t"));
        assert!(!hash.matches_persisted(b"abc124\n"));
        assert!(!hash.matches_persisted(b""));
    }

    #[test]
    fn matches_persisted_rejects_non_utf8() {
        let hash = ContentHash::new("abc123");
        assert!(!hash.matches_persisted(&[0xff, 0xfe]));
    }

    #[test]
    fn sidecar_contents_has_trailing_newline() {
        let hash = ContentHash::new("abc123");
        assert_eq!(hash.sidecar_contents(), "abc123\n");
    }
}
