//! `resolve` command: report where an image asset would be loaded from.
use anyhow::Result;
use serde::Serialize;

use campaign_report::assets::{AssetResolver, ResolvedAsset};
use campaign_report::config::ReportConfig;

#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub resolved: ResolvedAsset,
    pub candidates: Vec<String>,
}

pub fn resolve_assets(config: &ReportConfig, names: &[String]) -> Vec<ResolveReport> {
    let resolver = AssetResolver::from_config(config);
    names
        .iter()
        .map(|name| ResolveReport {
            resolved: resolver.resolve(name),
            candidates: resolver
                .candidates(name)
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })
        .collect()
}

/// Every key in the configured asset catalog.
pub fn catalog_keys(config: &ReportConfig) -> Vec<String> {
    config.assets.iter().map(|(key, _)| key.to_string()).collect()
}

/// Print resolution results. Missing assets are reported but are not an error.
pub fn print_resolve_reports(reports: &[ResolveReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for report in reports {
        match &report.resolved {
            ResolvedAsset::Found { key, path, .. } => {
                println!("{}\t{}", key, path.display());
            }
            ResolvedAsset::Missing { key, filename } => {
                println!("{}\tNOT FOUND", key);
                eprintln!(
                    "\u{26A0}\u{FE0F} Asset '{}' not found; searched for '{}' in: {}",
                    key,
                    filename,
                    report.candidates.join(", ")
                );
            }
        }
    }
    Ok(())
}
