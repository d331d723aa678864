use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use campaign_report::config::{load_report_config, ReportConfig};
use campaign_report::navigation::LayoutKind;

use crate::util::validate_html_file;

/// Build the report configuration from an optional JSON file plus CLI overrides.
pub fn config_from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = match config_path {
        Some(config_path) => load_report_config(config_path)?,
        None => {
            log::info!("No config file provided; using the built-in report configuration.");
            ReportConfig::default()
        }
    };

    apply_overrides(&mut config, matches)?;
    Ok(config)
}

fn apply_overrides(config: &mut ReportConfig, matches: &ArgMatches) -> Result<()> {
    // Subcommands define different subsets of these arguments.
    if let Ok(Some(layout)) = matches.try_get_one::<LayoutKind>("layout") {
        config.layout = *layout;
    }
    if let Ok(Some(asset_dir)) = matches.try_get_one::<PathBuf>("asset_dir") {
        config.asset_dir = asset_dir.clone();
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("no_embed") {
        config.embed_images = false;
    }
    if let Ok(Some(output_file)) = matches.try_get_one::<String>("output_file") {
        validate_html_file(output_file)?;
        config.output_file = PathBuf::from(output_file);
    }

    Ok(())
}
