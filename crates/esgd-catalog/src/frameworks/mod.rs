//! # Framework Requirement Tables
//!
//! One module per framework, each exposing a `REQUIREMENTS` table. The
//! tables are declarations only; [`Catalog::build`](crate::Catalog::build)
//! validates them.

pub mod csrd;
pub mod gri;
pub mod sasb;
pub mod tcfd;

use esgd_core::Framework;

use crate::requirement::{DisclosureRequirement, RequirementDef};

/// The static table for `framework`.
pub fn definitions(framework: Framework) -> &'static [RequirementDef] {
    match framework {
        Framework::Csrd => csrd::REQUIREMENTS,
        Framework::Gri => gri::REQUIREMENTS,
        Framework::Sasb => sasb::REQUIREMENTS,
        Framework::Tcfd => tcfd::REQUIREMENTS,
    }
}

/// Owned requirements for every framework, in canonical framework order.
pub fn builtin_requirements() -> Vec<DisclosureRequirement> {
    Framework::all()
        .iter()
        .flat_map(|fw| definitions(*fw).iter().map(move |def| def.to_requirement(*fw)))
        .collect()
}
