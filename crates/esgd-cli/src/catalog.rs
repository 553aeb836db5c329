//! # catalog: Requirement Catalog Inspection

use anyhow::Result;
use clap::Args;
use esgd_catalog::{Catalog, DisclosureRequirement};
use esgd_core::Framework;

use crate::{print_json, OutputFormat};

/// Arguments for `esgd catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// List the requirements of one framework instead of the summary.
    #[arg(long, short = 'f')]
    pub framework: Option<Framework>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute `esgd catalog`.
pub fn run_catalog(args: &CatalogArgs, catalog: &Catalog) -> Result<u8> {
    match (args.framework, args.format) {
        (None, OutputFormat::Json) => print_json(&catalog.summary())?,
        (None, OutputFormat::Text) => print!("{}", render_summary(catalog)),
        (Some(fw), OutputFormat::Json) => print_json(&catalog.all_requirements(fw))?,
        (Some(fw), OutputFormat::Text) => print!("{}", render_requirements(fw, catalog.all_requirements(fw))),
    }
    Ok(0)
}

fn render_summary(catalog: &Catalog) -> String {
    let mut out = String::new();
    for s in catalog.summary() {
        out.push_str(&format!(
            "{:<5} {:<48} {:>3} requirements ({} mandatory, {} optional)  {}\n",
            s.framework.as_str(),
            s.framework.full_name(),
            s.total_requirements,
            s.mandatory_requirements,
            s.optional_requirements,
            s.categories.join(", ")
        ));
    }
    out.push_str(&format!("\nTotal: {} requirements\n", catalog.requirement_count()));
    if !catalog.excluded_patterns().is_empty() {
        out.push_str(&format!(
            "Excluded patterns: {}\n",
            catalog.excluded_patterns().join(", ")
        ));
    }
    out
}

fn render_requirements(framework: Framework, requirements: &[DisclosureRequirement]) -> String {
    let mut out = format!("{} ({})\n\n", framework.full_name(), framework);
    for r in requirements {
        let flag = if r.mandatory { "mandatory" } else { "optional" };
        out.push_str(&format!(
            "{:<20} {:<9} {} / {}\n    {}\n    keywords: {}\n",
            r.requirement_id,
            flag,
            r.category,
            r.subcategory,
            r.description,
            r.keywords.join(", ")
        ));
    }
    out
}
