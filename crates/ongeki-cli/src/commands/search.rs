//! Catalog search command.

use std::path::Path;

use anyhow::{Context, Result};
use ongeki_core::Catalog;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::format::colored_difficulty;

/// Run the search command
pub fn run(query: &str, catalog_path: &Path, limit: usize, json: bool) -> Result<()> {
    let catalog = Catalog::load(catalog_path)
        .with_context(|| format!("failed to load catalog from {}", catalog_path.display()))?;
    debug!("Searching {} entries for {:?}", catalog.len(), query);

    let results = catalog.search(query, limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No matches for {query:?}");
        return Ok(());
    }

    for song in results {
        let lunatic_tag = if song.lunatic { " (LUNATIC)" } else { "" };
        println!("{}{}  {}", song.title.bold(), lunatic_tag, song.artist);
        for chart in &song.charts {
            let unknown = if chart.constant_unknown { "?" } else { "" };
            println!(
                "  {} {:.1}{}",
                colored_difficulty(chart.difficulty),
                chart.constant,
                unknown
            );
        }
    }
    Ok(())
}
