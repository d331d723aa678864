//! Image asset resolution.
//!
//! A logical key is looked up in the [`AssetCatalog`]; keys that are not in
//! the catalog are used as filenames directly. The filename is then probed
//! against an ordered list of [`SearchStrategy`] values and the first
//! existing candidate wins. Absence is reported as [`ResolvedAsset::Missing`]
//! so callers can render a diagnostic and carry on.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::AssetError;

/// Product hero shot shown next to the key metrics.
pub const PRODUCT_HERO: &str = "product_hero";
pub const UGC_CAMPAIGN: &str = "ugc_campaign";
pub const DCARD_THREAD: &str = "dcard_thread";
pub const MAGAZINE_FEATURE: &str = "magazine_feature";
pub const KOL_ABBY: &str = "kol_abby";
pub const KOL_DR_CHI: &str = "kol_dr_chi";
pub const META_ADS: &str = "meta_ads";
pub const GOOGLE_ADS: &str = "google_ads";
pub const GROUP_BUY: &str = "group_buy";

/// Static mapping from logical asset keys to filenames.
///
/// Filenames are opaque: they are joined onto search roots byte for byte and
/// are not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetCatalog {
    entries: BTreeMap<String, String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, filename: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), filename.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for AssetCatalog {
    /// Screenshots captured for the campaign review.
    fn default() -> Self {
        let mut catalog = AssetCatalog::new();
        catalog.insert(PRODUCT_HERO, "截圖 2025-12-05 晚上11.40.59.png");
        catalog.insert(UGC_CAMPAIGN, "截圖 2025-12-05 晚上11.41.05.jpg");
        catalog.insert(DCARD_THREAD, "截圖 2025-12-05 晚上11.42.03.jpg");
        catalog.insert(MAGAZINE_FEATURE, "截圖 2025-12-05 晚上11.41.41.jpg");
        catalog.insert(KOL_ABBY, "截圖 2025-12-05 晚上11.41.56.jpg");
        catalog.insert(KOL_DR_CHI, "截圖 2025-12-05 晚上11.41.49.jpg");
        catalog.insert(META_ADS, "截圖 2025-12-05 晚上11.41.20.jpg");
        catalog.insert(GOOGLE_ADS, "截圖 2025-12-05 晚上11.41.27.jpg");
        catalog.insert(GROUP_BUY, "截圖 2025-12-05 晚上11.42.09.jpg");
        catalog
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Directories the search strategies probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRoots {
    pub asset_dir: PathBuf,
    /// Empty means the process working directory.
    pub working_dir: PathBuf,
}

impl SearchRoots {
    pub fn new(asset_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            working_dir: working_dir.into(),
        }
    }
}

/// One location checked during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// `<asset_dir>/<filename>`
    AssetDir,
    /// `<working_dir>/<filename>`
    WorkingDir,
}

impl SearchStrategy {
    pub fn default_order() -> Vec<SearchStrategy> {
        vec![SearchStrategy::AssetDir, SearchStrategy::WorkingDir]
    }

    pub fn candidate(&self, filename: &str, roots: &SearchRoots) -> PathBuf {
        match self {
            SearchStrategy::AssetDir => roots.asset_dir.join(filename),
            SearchStrategy::WorkingDir => roots.working_dir.join(filename),
        }
    }

    pub fn locate(&self, filename: &str, roots: &SearchRoots) -> Option<PathBuf> {
        let candidate = self.candidate(filename, roots);
        log::trace!("Probing {:?} candidate {}", self, candidate.display());
        candidate.is_file().then_some(candidate)
    }
}

impl std::str::FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "asset_dir" => Ok(SearchStrategy::AssetDir),
            "working_dir" | "cwd" => Ok(SearchStrategy::WorkingDir),
            _ => Err(format!(
                "Unknown search strategy: {}. Expected one of: asset_dir, working_dir",
                s
            )),
        }
    }
}

/// Outcome of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedAsset {
    Found {
        key: String,
        filename: String,
        path: PathBuf,
    },
    Missing {
        key: String,
        filename: String,
    },
}

impl ResolvedAsset {
    pub fn key(&self) -> &str {
        match self {
            ResolvedAsset::Found { key, .. } | ResolvedAsset::Missing { key, .. } => key,
        }
    }

    /// The filename that was searched for.
    pub fn filename(&self) -> &str {
        match self {
            ResolvedAsset::Found { filename, .. } | ResolvedAsset::Missing { filename, .. } => {
                filename
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedAsset::Found { path, .. } => Some(path),
            ResolvedAsset::Missing { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedAsset::Found { .. })
    }

    pub fn into_result(self) -> Result<PathBuf, AssetError> {
        match self {
            ResolvedAsset::Found { path, .. } => Ok(path),
            ResolvedAsset::Missing { filename, .. } => Err(AssetError::NotFound(filename)),
        }
    }
}

/// Resolves logical keys to files on disk. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    catalog: AssetCatalog,
    roots: SearchRoots,
    strategies: Vec<SearchStrategy>,
}

impl AssetResolver {
    pub fn new(catalog: AssetCatalog, roots: SearchRoots, strategies: Vec<SearchStrategy>) -> Self {
        Self {
            catalog,
            roots,
            strategies,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            config.assets.clone(),
            SearchRoots::new(&config.asset_dir, &config.working_dir),
            config.search_order.clone(),
        )
    }

    /// Mapped filename for `key`, or `key` itself when it is not in the catalog.
    pub fn filename_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.get(key).unwrap_or(key)
    }

    /// Ordered candidate paths that `resolve` would probe for `key`.
    pub fn candidates(&self, key: &str) -> Vec<PathBuf> {
        let filename = self.filename_for(key);
        self.strategies
            .iter()
            .map(|strategy| strategy.candidate(filename, &self.roots))
            .collect()
    }

    pub fn resolve(&self, key: &str) -> ResolvedAsset {
        let filename = self.filename_for(key);

        match self
            .strategies
            .iter()
            .find_map(|strategy| strategy.locate(filename, &self.roots))
        {
            Some(path) => {
                log::debug!("Resolved asset '{}' to {}", key, path.display());
                ResolvedAsset::Found {
                    key: key.to_string(),
                    filename: filename.to_string(),
                    path,
                }
            }
            None => {
                log::warn!("Asset '{}' not found (searched for '{}')", key, filename);
                ResolvedAsset::Missing {
                    key: key.to_string(),
                    filename: filename.to_string(),
                }
            }
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}
