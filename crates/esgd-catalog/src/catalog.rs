//! # Catalog Construction and Queries
//!
//! [`CatalogSource`] holds raw declarations; [`Catalog::build`] validates
//! them and compiles every pattern. The split lets tests feed deliberately
//! broken sources through the same validation path used at startup.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use esgd_core::{Framework, MetricCategory};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::mapping::{builtin_mappings, CategoryMapping};
use crate::pattern::{CompiledPattern, PatternSpec};
use crate::requirement::DisclosureRequirement;
use crate::units::{self, CategoryUnits};
use crate::{extraction, frameworks};

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Unvalidated catalog declarations.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Requirements of every framework.
    pub requirements: Vec<DisclosureRequirement>,
    /// Category-level extraction patterns, in evaluation order.
    pub extraction_patterns: Vec<(MetricCategory, PatternSpec)>,
    /// Category-to-requirement mapping rows.
    pub mappings: Vec<CategoryMapping>,
}

impl CatalogSource {
    /// The compiled-in declarations.
    pub fn builtin() -> Self {
        let extraction_patterns = MetricCategory::all()
            .iter()
            .flat_map(|category| {
                extraction::definitions(*category)
                    .iter()
                    .enumerate()
                    .map(move |(i, def)| (*category, def.to_spec(format!("{category}.{i}"))))
            })
            .collect();
        Self {
            requirements: frameworks::builtin_requirements(),
            extraction_patterns,
            mappings: builtin_mappings(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Validated, compiled, immutable requirement catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    requirements: BTreeMap<Framework, Vec<DisclosureRequirement>>,
    requirement_patterns: BTreeMap<(Framework, String), Vec<CompiledPattern>>,
    extraction_patterns: Vec<(MetricCategory, CompiledPattern)>,
    mappings: BTreeMap<MetricCategory, BTreeMap<Framework, Vec<String>>>,
    excluded_patterns: Vec<String>,
}

/// Per-framework catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkSummary {
    /// Framework summarized.
    pub framework: Framework,
    /// Number of requirements.
    pub total_requirements: usize,
    /// Mandatory requirements.
    pub mandatory_requirements: usize,
    /// Optional requirements.
    pub optional_requirements: usize,
    /// Distinct requirement categories, sorted.
    pub categories: Vec<String>,
}

impl Catalog {
    /// Build the compiled-in catalog.
    pub fn load() -> CatalogResult<Self> {
        Self::build(CatalogSource::builtin())
    }

    /// Validate and compile `source`.
    ///
    /// Fails on duplicate requirement ids within a framework, requirements
    /// without keywords, and mappings to unknown requirements. Patterns that
    /// fail to compile are logged and excluded.
    pub fn build(source: CatalogSource) -> CatalogResult<Self> {
        let mut requirements: BTreeMap<Framework, Vec<DisclosureRequirement>> = Framework::all()
            .iter()
            .map(|fw| (*fw, Vec::new()))
            .collect();
        let mut seen: HashSet<(Framework, String)> = HashSet::new();

        for req in source.requirements {
            if !seen.insert((req.framework, req.requirement_id.clone())) {
                return Err(CatalogError::DuplicateRequirement {
                    framework: req.framework,
                    requirement_id: req.requirement_id,
                });
            }
            if req.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(CatalogError::EmptyKeywords {
                    framework: req.framework,
                    requirement_id: req.requirement_id,
                });
            }
            requirements.entry(req.framework).or_default().push(req);
        }

        let mut mappings: BTreeMap<MetricCategory, BTreeMap<Framework, Vec<String>>> =
            BTreeMap::new();
        for row in source.mappings {
            for id in &row.requirement_ids {
                if !seen.contains(&(row.framework, id.clone())) {
                    return Err(CatalogError::UnknownMappedRequirement {
                        category: row.category,
                        framework: row.framework,
                        requirement_id: id.clone(),
                    });
                }
            }
            let ids = mappings
                .entry(row.category)
                .or_default()
                .entry(row.framework)
                .or_default();
            for id in row.requirement_ids {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }

        let mut excluded_patterns = Vec::new();

        let mut requirement_patterns = BTreeMap::new();
        for (framework, reqs) in &requirements {
            for req in reqs {
                let compiled: Vec<CompiledPattern> = req
                    .metric_patterns
                    .iter()
                    .cloned()
                    .filter_map(|spec| compile_or_exclude(spec, &mut excluded_patterns))
                    .collect();
                requirement_patterns.insert((*framework, req.requirement_id.clone()), compiled);
            }
        }

        let extraction_patterns: Vec<(MetricCategory, CompiledPattern)> = source
            .extraction_patterns
            .into_iter()
            .filter_map(|(category, spec)| {
                compile_or_exclude(spec, &mut excluded_patterns).map(|p| (category, p))
            })
            .collect();

        let catalog = Self {
            requirements,
            requirement_patterns,
            extraction_patterns,
            mappings,
            excluded_patterns,
        };
        tracing::info!(
            requirements = catalog.requirement_count(),
            extraction_patterns = catalog.extraction_patterns.len(),
            excluded_patterns = catalog.excluded_patterns.len(),
            "disclosure catalog built"
        );
        Ok(catalog)
    }

    /// Every framework, in canonical order.
    pub fn all_frameworks(&self) -> &'static [Framework] {
        Framework::all()
    }

    /// Requirements of `framework`, in declaration order.
    pub fn all_requirements(&self, framework: Framework) -> &[DisclosureRequirement] {
        self.requirements
            .get(&framework)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up one requirement.
    pub fn requirement(&self, framework: Framework, id: &str) -> Option<&DisclosureRequirement> {
        self.all_requirements(framework)
            .iter()
            .find(|r| r.requirement_id == id)
    }

    /// Whether `id` is a requirement of `framework`.
    pub fn contains(&self, framework: Framework, id: &str) -> bool {
        self.requirement(framework, id).is_some()
    }

    /// Total number of requirements across frameworks.
    pub fn requirement_count(&self) -> usize {
        self.requirements.values().map(Vec::len).sum()
    }

    /// Compiled evidence patterns of one requirement.
    pub fn requirement_patterns(&self, framework: Framework, id: &str) -> &[CompiledPattern] {
        self.requirement_patterns
            .get(&(framework, id.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Compiled category-level extraction patterns, in evaluation order.
    pub fn extraction_patterns(&self) -> &[(MetricCategory, CompiledPattern)] {
        &self.extraction_patterns
    }

    /// Requirement ids evidenced by a metric of `category`, per framework.
    pub fn mappings_for(&self, category: MetricCategory) -> BTreeMap<Framework, Vec<String>> {
        self.mappings.get(&category).cloned().unwrap_or_default()
    }

    /// Unit table of `category`.
    pub fn units(&self, category: MetricCategory) -> &'static CategoryUnits {
        units::for_category(category)
    }

    /// Ids of patterns excluded because they failed to compile.
    pub fn excluded_patterns(&self) -> &[String] {
        &self.excluded_patterns
    }

    /// Per-framework statistics.
    pub fn summary(&self) -> Vec<FrameworkSummary> {
        self.all_frameworks()
            .iter()
            .map(|fw| {
                let reqs = self.all_requirements(*fw);
                let mandatory = reqs.iter().filter(|r| r.mandatory).count();
                let categories: BTreeSet<&str> = reqs.iter().map(|r| r.category.as_str()).collect();
                FrameworkSummary {
                    framework: *fw,
                    total_requirements: reqs.len(),
                    mandatory_requirements: mandatory,
                    optional_requirements: reqs.len() - mandatory,
                    categories: categories.into_iter().map(str::to_string).collect(),
                }
            })
            .collect()
    }
}

fn compile_or_exclude(spec: PatternSpec, excluded: &mut Vec<String>) -> Option<CompiledPattern> {
    let id = spec.id.clone();
    match CompiledPattern::compile(spec) {
        Ok(p) => Some(p),
        Err(err) => {
            tracing::error!(pattern = %id, error = %err, "excluding invalid pattern");
            excluded.push(id);
            None
        }
    }
}
