#![deny(missing_docs)]

//! # esgd-core: Foundational Types for the ESG Disclosure Engine
//!
//! This crate defines the closed vocabularies every other crate in the
//! workspace speaks. It has no internal crate dependencies, only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One enum per concept.** [`Framework`], [`MetricCategory`],
//!    [`Severity`] and [`EmissionsScope`] are each defined exactly once.
//!    Exhaustive `match` everywhere, so adding a framework or category
//!    forces every table in the workspace to address it.
//!
//! 2. **Stable string forms.** Every enum has an `as_str()` that matches its
//!    serde representation and a `FromStr` that accepts it back.
//!
//! 3. **One confidence range.** [`clamp_confidence`] is the sole path by which
//!    a score enters the `[0.1, 0.95]` band carried by extracted metrics.
//!
//! 4. **[`EsgdError`] for vocabulary errors.** Structured errors with
//!    `thiserror`, no `.unwrap()` outside tests.

pub mod category;
pub mod confidence;
pub mod error;
pub mod framework;
pub mod scope;
pub mod severity;

pub use category::MetricCategory;
pub use confidence::{clamp_confidence, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};
pub use error::EsgdError;
pub use framework::Framework;
pub use scope::EmissionsScope;
pub use severity::Severity;
