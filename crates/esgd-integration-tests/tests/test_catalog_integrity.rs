//! # Catalog Integrity
//!
//! The catalog is the single source of truth for every downstream crate;
//! these tests pin its shape and the failures `Catalog::build` reports.

use esgd_catalog::{Catalog, CatalogError, CatalogSource, CategoryMapping, PatternSpec};
use esgd_core::{Framework, MetricCategory};

#[test]
fn builtin_catalog_shape() {
    let catalog = Catalog::load().unwrap();
    assert_eq!(catalog.requirement_count(), 42);
    let summary = catalog.summary();
    assert_eq!(summary.len(), 4);
    for s in &summary {
        assert_eq!(s.total_requirements, s.mandatory_requirements + s.optional_requirements);
        assert_eq!(s.total_requirements, catalog.all_requirements(s.framework).len());
    }
    assert!(catalog.excluded_patterns().is_empty());
}

#[test]
fn every_mapping_points_into_the_catalog() {
    let catalog = Catalog::load().unwrap();
    for category in MetricCategory::all() {
        for (framework, ids) in catalog.mappings_for(*category) {
            for id in ids {
                assert!(catalog.contains(framework, &id), "{category} -> {framework} {id}");
            }
        }
    }
}

#[test]
fn requirement_ids_unique_per_framework() {
    let catalog = Catalog::load().unwrap();
    for fw in Framework::all() {
        let reqs = catalog.all_requirements(*fw);
        let ids: std::collections::BTreeSet<_> = reqs.iter().map(|r| &r.requirement_id).collect();
        assert_eq!(ids.len(), reqs.len());
        assert!(reqs.iter().all(|r| r.framework == *fw));
        assert!(reqs.iter().all(|r| !r.keywords.is_empty()));
    }
}

#[test]
fn duplicate_requirement_fails_build() {
    let mut source = CatalogSource::builtin();
    let dup = source.requirements[0].clone();
    source.requirements.push(dup);
    let err = Catalog::build(source).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRequirement { .. }));
}

#[test]
fn unknown_mapping_fails_build() {
    let mut source = CatalogSource::builtin();
    source.mappings.push(CategoryMapping {
        category: MetricCategory::Water,
        framework: Framework::Gri,
        requirement_ids: vec!["GRI-999-9".into()],
    });
    let err = Catalog::build(source).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownMappedRequirement { .. }));
    assert!(err.to_string().contains("GRI-999-9"));
}

#[test]
fn keywordless_requirement_fails_build() {
    let mut source = CatalogSource::builtin();
    source.requirements[3].keywords.clear();
    let err = Catalog::build(source).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyKeywords { .. }));
}

#[test]
fn broken_pattern_is_excluded_not_fatal() {
    let mut source = CatalogSource::builtin();
    source.extraction_patterns.push((
        MetricCategory::Waste,
        PatternSpec {
            id: "waste.broken".into(),
            regex: r"waste\s+(".into(),
            value_group: 1,
            unit_group: None,
            default_unit: Some("tonnes".into()),
            is_reduction: false,
            scope_pattern: None,
            metric_subtype: None,
        },
    ));
    source.extraction_patterns.push((
        MetricCategory::Waste,
        PatternSpec {
            id: "waste.missing-group".into(),
            regex: r"waste\s+(\d+)".into(),
            value_group: 2,
            unit_group: None,
            default_unit: None,
            is_reduction: false,
            scope_pattern: None,
            metric_subtype: None,
        },
    ));
    let builtin_patterns = Catalog::load().unwrap().extraction_patterns().len();
    let catalog = Catalog::build(source).unwrap();
    assert_eq!(catalog.excluded_patterns(), ["waste.broken", "waste.missing-group"]);
    assert_eq!(catalog.extraction_patterns().len(), builtin_patterns);
}
