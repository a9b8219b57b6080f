//! Property tests for content digests and sidecar comparison.

use proptest::prelude::*;

use dv::domain::value_objects::{digest, ContentHash};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: digests are 64 lowercase hex characters and deterministic.
    #[test]
    fn property_digest_is_lowercase_hex(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let hex = digest(&bytes);
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        prop_assert_eq!(hex, digest(&bytes));
    }

    /// PROPERTY: a sidecar written for some content matches it, even with
    /// surrounding whitespace added by an editor.
    #[test]
    fn property_sidecar_matches_with_whitespace(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        lead in "[ \t\n]{0,3}",
        trail in "[ \t\r\n]{0,3}",
    ) {
        let hash = ContentHash::from_bytes(&bytes);
        prop_assert!(hash.matches_persisted(hash.sidecar_contents().as_bytes()));
        let padded = format!("{}{}{}", lead, hash.hex(), trail);
        prop_assert!(hash.matches_persisted(padded.as_bytes()));
    }

    /// PROPERTY: different content never matches the other's sidecar.
    #[test]
    fn property_changed_content_is_stale(
        a in proptest::collection::vec(any::<u8>(), 0..128),
        b in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        prop_assume!(a != b);
        let old = ContentHash::from_bytes(&a);
        let new = ContentHash::from_bytes(&b);
        prop_assert!(!new.matches_persisted(old.sidecar_contents().as_bytes()));
    }
}
