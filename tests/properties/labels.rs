//! Property tests for runtime label parsing.

use proptest::prelude::*;

use dv::domain::entities::parse_labels;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: label parsing never panics on arbitrary input.
    #[test]
    fn property_parse_labels_never_panics(raw in ".{0,128}") {
        let _ = parse_labels(&raw);
    }

    /// PROPERTY: well-formed `k=v` lists parse back to the same pairs.
    #[test]
    fn property_parse_labels_reads_pairs(
        pairs in proptest::collection::btree_map("[a-z.]{1,10}", "[a-z0-9_-]{0,10}", 0..6)
    ) {
        let raw = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse_labels(&raw), pairs);
    }
}
