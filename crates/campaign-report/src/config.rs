use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assets::{AssetCatalog, SearchStrategy};
use crate::navigation::LayoutKind;

/// Page-level metadata shown in the document head, header and footer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub icon: String,
    pub heading: String,
    pub subheading: String,
    pub sidebar_brand: String,
    pub sidebar_project: String,
    pub sidebar_hint: String,
    pub footer: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "DK小白鞋行銷戰役覆盤".to_string(),
            icon: "👟".to_string(),
            heading: "DK小白鞋：從新品到市場冠軍的勝利方程式".to_string(),
            subheading: "🏆 6個月內逆勢突圍的整合行銷戰役覆盤".to_string(),
            sidebar_brand: "DK DR.KAO".to_string(),
            sidebar_project: "呼吸空氣鞋行銷專案".to_string(),
            sidebar_hint: "提示：直接向下捲動即可瀏覽完整報告。".to_string(),
            footer: "© 2025 DK White Sneaker Strategy Review".to_string(),
        }
    }
}

/// Configuration for one report rendering. Built once, then read-only.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub version: String,
    pub page: PageMeta,
    /// Directory probed by [`SearchStrategy::AssetDir`].
    pub asset_dir: PathBuf,
    /// Directory probed by [`SearchStrategy::WorkingDir`]. Empty means the process cwd.
    pub working_dir: PathBuf,
    pub search_order: Vec<SearchStrategy>,
    pub assets: AssetCatalog,
    pub layout: LayoutKind,
    /// Inline image bytes as data URIs so the HTML file is self-contained.
    pub embed_images: bool,
    pub output_file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            page: PageMeta::default(),
            asset_dir: PathBuf::from("images"),
            working_dir: PathBuf::new(),
            search_order: SearchStrategy::default_order(),
            assets: AssetCatalog::default(),
            layout: LayoutKind::default(),
            embed_images: true,
            output_file: PathBuf::from("campaign_report.html"),
        }
    }
}

/// Load a report configuration from a JSON file.
///
/// The file must be valid JSON. Fields that are missing or carry an invalid
/// value keep their defaults, with a warning for the invalid ones.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let partial: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    let mut config = ReportConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            } else {
                log::debug!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field), config.$field
                );
            }
        };
    }

    load_or_default!(version);
    load_or_default!(page);
    load_or_default!(asset_dir);
    load_or_default!(working_dir);
    load_or_default!(search_order);
    load_or_default!(assets);
    load_or_default!(layout);
    load_or_default!(embed_images);
    load_or_default!(output_file);

    Ok(config)
}
