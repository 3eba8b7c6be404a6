use crate::config::{Config, Taxonomy};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::badge;

/// Show every category with its colour and subcategories.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let taxonomy = Taxonomy::load(&cfg.taxonomy_path());

    header(format!("Taxonomy ({})", cfg.taxonomy_path().display()));

    if taxonomy.is_empty() {
        info("No categories defined.");
        return Ok(());
    }

    for (name, spec) in taxonomy.iter() {
        println!(
            "{} {}  ({} subcategories)",
            badge(name, &spec.color),
            spec.color,
            spec.subcategories.len()
        );
        for sub in &spec.subcategories {
            println!("    - {sub}");
        }
    }

    Ok(())
}
