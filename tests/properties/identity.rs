//! Property tests for container identity matching.

use std::collections::BTreeMap;

use proptest::prelude::*;

use dv::domain::entities::{ContainerSummary, LABEL_IMAGE_NAME, LABEL_OWNER, OWNER_VALUE};
use dv::domain::services::{belongs, suggest_agent_names, ImageSelection};

fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn labels() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(ident(), ident(), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a recorded mapping to the selected image always wins.
    #[test]
    fn property_mapping_takes_priority(
        name in ident(),
        image in ident(),
        labels in labels(),
        selected in ident(),
        tag in ident(),
    ) {
        let container = ContainerSummary { name: name.clone(), image, labels };
        let mapping = BTreeMap::from([(name, selected.clone())]);
        let selection = ImageSelection { name: &selected, tag: &tag };
        prop_assert!(belongs(&container, selection, &mapping));
    }

    /// PROPERTY: owner and image-name labels identify a container without a mapping.
    #[test]
    fn property_owner_labels_identify_image(
        name in ident(),
        image in ident(),
        mut labels in labels(),
        selected in ident(),
        tag in ident(),
    ) {
        labels.insert(LABEL_OWNER.to_string(), OWNER_VALUE.to_string());
        labels.insert(LABEL_IMAGE_NAME.to_string(), selected.clone());
        let container = ContainerSummary { name, image, labels };
        let selection = ImageSelection { name: &selected, tag: &tag };
        prop_assert!(belongs(&container, selection, &BTreeMap::new()));
    }

    /// PROPERTY: with no mapping and no dv labels, only the tag decides.
    #[test]
    fn property_unlabeled_falls_back_to_tag(
        name in ident(),
        image in ident(),
        selected in ident(),
        tag in ident(),
    ) {
        let container = ContainerSummary { name, image: image.clone(), labels: BTreeMap::new() };
        let selection = ImageSelection { name: &selected, tag: &tag };
        prop_assert_eq!(belongs(&container, selection, &BTreeMap::new()), image == tag);
    }

    /// PROPERTY: suggestions are a subset of belonging containers and honor the prefix.
    #[test]
    fn property_suggestions_respect_prefix(
        names in proptest::collection::vec(ident(), 0..8),
        prefix in "[a-zA-Z]{0,2}",
    ) {
        let containers: Vec<ContainerSummary> = names
            .iter()
            .enumerate()
            .map(|(i, n)| ContainerSummary {
                name: n.clone(),
                image: if i % 2 == 0 { "ai_agent".into() } else { "other".into() },
                labels: BTreeMap::new(),
            })
            .collect();
        let selection = ImageSelection { name: "discourse", tag: "ai_agent" };
        let out = suggest_agent_names(&containers, selection, &BTreeMap::new(), &prefix);
        let lowered = prefix.to_lowercase();
        for name in &out {
            prop_assert!(name.to_lowercase().starts_with(&lowered));
        }
        let expected = containers
            .iter()
            .filter(|c| c.image == "ai_agent" && c.name.to_lowercase().starts_with(&lowered))
            .count();
        prop_assert_eq!(out.len(), expected);
    }
}
