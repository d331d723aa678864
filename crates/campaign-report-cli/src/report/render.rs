//! `render` and `site` commands.
use std::path::{Path, PathBuf};

use anyhow::Result;

use campaign_report::assets::AssetResolver;
use campaign_report::config::ReportConfig;
use campaign_report::navigation::{current_section, Section};
use campaign_report::report::{render_report, render_site, RenderContext};

/// Render one page of the report to `config.output_file`.
///
/// Paged layouts get navigation without links, since no sibling pages are written.
pub fn run_render(config: &ReportConfig, section: Option<Section>) -> Result<PathBuf> {
    let resolver = AssetResolver::from_config(config);
    let selection = current_section(section);

    if config.layout.is_paged() {
        log::warn!(
            "'render' writes only the selected section; use 'site' for navigable '{}' pages",
            config.layout.name()
        );
    } else if section.is_some() {
        log::warn!(
            "The '{}' layout shows every section; --section only affects tabs and sidebar layouts",
            config.layout.name()
        );
    }

    log::info!(
        "Rendering '{}' layout, section {}",
        config.layout.name(),
        selection.section()
    );
    let ctx = RenderContext::new(config, &resolver, selection);
    let report = render_report(&ctx);
    report.save_to_file(&config.output_file)?;
    Ok(config.output_file.clone())
}

/// Render every page of the report into `out_dir`.
pub fn run_site(config: &ReportConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    render_site(config, out_dir)
}
