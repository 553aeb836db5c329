//! # Inverted Keyword Index

use std::collections::{BTreeMap, BTreeSet};

use esgd_catalog::Catalog;
use esgd_core::Framework;

/// Requirement ids found per framework. Frameworks without hits are absent.
pub type FoundRequirements = BTreeMap<Framework, BTreeSet<String>>;

/// Keyword to requirement postings, built once per catalog.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    postings: BTreeMap<String, Vec<(Framework, String)>>,
}

impl KeywordIndex {
    /// Index every keyword of every requirement in `catalog`.
    pub fn build(catalog: &Catalog) -> Self {
        let mut postings: BTreeMap<String, Vec<(Framework, String)>> = BTreeMap::new();
        for framework in catalog.all_frameworks() {
            for req in catalog.all_requirements(*framework) {
                for keyword in &req.keywords {
                    let keyword = keyword.to_lowercase();
                    if keyword.is_empty() {
                        continue;
                    }
                    let entry = postings.entry(keyword).or_default();
                    let posting = (*framework, req.requirement_id.clone());
                    if !entry.contains(&posting) {
                        entry.push(posting);
                    }
                }
            }
        }
        tracing::debug!(keywords = postings.len(), "keyword index built");
        Self { postings }
    }

    /// Number of distinct keywords.
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    /// Requirements evidenced by `text`.
    pub fn find_relevant(&self, text: &str) -> FoundRequirements {
        let lowered = text.to_lowercase();
        let mut found = FoundRequirements::new();
        if lowered.is_empty() {
            return found;
        }
        for (keyword, postings) in &self.postings {
            if !lowered.contains(keyword.as_str()) {
                continue;
            }
            for (framework, id) in postings {
                found.entry(*framework).or_default().insert(id.clone());
            }
        }
        found
    }

    /// Keywords present in `text`, sorted.
    pub fn matched_keywords(&self, text: &str) -> Vec<&str> {
        let lowered = text.to_lowercase();
        self.postings
            .keys()
            .filter(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::OnceLock;

    fn shared() -> &'static (Catalog, KeywordIndex) {
        static SHARED: OnceLock<(Catalog, KeywordIndex)> = OnceLock::new();
        SHARED.get_or_init(|| {
            let catalog = Catalog::load().unwrap();
            let idx = KeywordIndex::build(&catalog);
            (catalog, idx)
        })
    }

    proptest! {
        #[test]
        fn find_relevant_is_deterministic(text in ".{0,200}") {
            let (_, idx) = shared();
            prop_assert_eq!(idx.find_relevant(&text), idx.find_relevant(&text));
        }

        #[test]
        fn found_ids_exist_in_catalog(text in "[a-z0-9 ]{0,200}") {
            let (catalog, idx) = shared();
            for (fw, ids) in idx.find_relevant(&text) {
                for id in ids {
                    prop_assert!(catalog.contains(fw, &id));
                }
            }
        }

        #[test]
        fn case_does_not_change_result(text in "[a-zA-Z ]{0,120}") {
            let (_, idx) = shared();
            prop_assert_eq!(idx.find_relevant(&text), idx.find_relevant(&text.to_uppercase()));
        }
    }
}
