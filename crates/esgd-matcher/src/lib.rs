//! # esgd-matcher: Keyword Relevance Matching
//!
//! Decides which catalog requirements a document evidences by keyword.
//!
//! ## Semantics
//!
//! A requirement is found iff at least one of its keywords is a substring of
//! the lowercased document. Plain substring containment: no tokenization, no
//! word boundaries, no stemming, no negation. `"scope 1"` is found in
//! `"Our SCOPE 1 emissions"` and also in `"scope 12"`, and never in
//! `"scope one"`.
//!
//! ## Components
//!
//! - [`KeywordIndex`]: inverted index from keyword to requirements, built
//!   once from the catalog.
//! - [`findings`]: per-requirement detail (matched keywords, confidence,
//!   evidence captured by the requirement's own patterns).
//! - [`PillarScores`]: weighted environmental/social/governance keyword
//!   scores.

pub mod findings;
pub mod index;
pub mod pillar;

pub use findings::{findings, RequirementEvidence, RequirementFinding};
pub use index::{FoundRequirements, KeywordIndex};
pub use pillar::PillarScores;
