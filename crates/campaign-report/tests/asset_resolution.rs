//! Integration tests for the image resolver fallback chain.

use std::fs;
use std::path::Path;

use campaign_report::assets::{
    AssetCatalog, AssetResolver, ResolvedAsset, SearchRoots, SearchStrategy,
};
use campaign_report::error::AssetError;

const HERO_FILE: &str = "截圖 2025-12-05 晚上11.40.59.png";

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"fake image bytes").unwrap();
}

fn resolver_in(dir: &Path, strategies: Vec<SearchStrategy>) -> AssetResolver {
    let catalog = AssetCatalog::from_iter([("product_hero", HERO_FILE), ("banner", "banner.jpg")]);
    let roots = SearchRoots::new(dir.join("images"), dir);
    AssetResolver::new(catalog, roots, strategies)
}

// ---------------------------------------------------------------------------
// Found
// ---------------------------------------------------------------------------

#[test]
fn non_ascii_filename_with_spaces_is_found_in_asset_dir() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("images").join(HERO_FILE));

    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    let resolved = resolver.resolve("product_hero");

    assert!(resolved.is_found());
    assert_eq!(resolved.filename(), HERO_FILE);
    assert_eq!(
        resolved.path().unwrap(),
        dir.path().join("images").join(HERO_FILE).as_path()
    );
}

#[test]
fn falls_back_to_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("banner.jpg"));

    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    let path = resolver.resolve("banner").into_result().unwrap();
    assert_eq!(path, dir.path().join("banner.jpg"));
}

#[test]
fn first_existing_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("images").join("banner.jpg"));
    touch(&dir.path().join("banner.jpg"));

    let asset_first = resolver_in(dir.path(), SearchStrategy::default_order());
    assert_eq!(
        asset_first.resolve("banner").path().unwrap(),
        dir.path().join("images").join("banner.jpg").as_path()
    );

    let cwd_first = resolver_in(
        dir.path(),
        vec![SearchStrategy::WorkingDir, SearchStrategy::AssetDir],
    );
    assert_eq!(
        cwd_first.resolve("banner").path().unwrap(),
        dir.path().join("banner.jpg").as_path()
    );
}

#[test]
fn unknown_key_is_used_as_filename() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("images").join("loose photo.png"));

    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    assert_eq!(resolver.filename_for("loose photo.png"), "loose photo.png");

    let resolved = resolver.resolve("loose photo.png");
    assert!(resolved.is_found());
    assert_eq!(resolved.key(), "loose photo.png");
    assert_eq!(resolved.filename(), "loose photo.png");
}

#[test]
fn directory_with_asset_name_is_not_an_image() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images").join("banner.jpg")).unwrap();

    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    assert!(!resolver.resolve("banner").is_found());
}

// ---------------------------------------------------------------------------
// Missing
// ---------------------------------------------------------------------------

#[test]
fn missing_asset_reports_filename_not_key() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());

    let resolved = resolver.resolve("product_hero");
    assert_eq!(
        resolved,
        ResolvedAsset::Missing {
            key: "product_hero".to_string(),
            filename: HERO_FILE.to_string(),
        }
    );

    let err = resolved.into_result().unwrap_err();
    assert_eq!(err, AssetError::NotFound(HERO_FILE.to_string()));
    assert_eq!(err.requested_name(), HERO_FILE);
    assert!(err.to_string().contains(HERO_FILE));
}

#[test]
fn missing_unknown_key_reports_raw_input() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());

    let resolved = resolver.resolve("raw name.jpg");
    assert_eq!(
        resolved,
        ResolvedAsset::Missing {
            key: "raw name.jpg".to_string(),
            filename: "raw name.jpg".to_string(),
        }
    );
    assert_eq!(
        resolved.into_result().unwrap_err(),
        AssetError::NotFound("raw name.jpg".to_string())
    );
}

#[test]
fn filename_is_not_normalized() {
    let dir = tempfile::tempdir().unwrap();
    // Same text without the space between date and time.
    touch(&dir.path().join("images").join("截圖 2025-12-05晚上11.40.59.png"));

    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    assert!(!resolver.resolve("product_hero").is_found());
}

#[test]
fn empty_strategy_list_never_finds_anything() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("banner.jpg"));

    let resolver = resolver_in(dir.path(), Vec::new());
    assert!(resolver.candidates("banner").is_empty());
    assert!(!resolver.resolve("banner").is_found());
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_resolution_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("images").join(HERO_FILE));
    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());

    assert_eq!(resolver.resolve("product_hero"), resolver.resolve("product_hero"));
    assert_eq!(resolver.resolve("banner"), resolver.resolve("banner"));
}

#[test]
fn resolution_tracks_filesystem_changes() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_in(dir.path(), SearchStrategy::default_order());
    assert!(!resolver.resolve("banner").is_found());

    touch(&dir.path().join("banner.jpg"));
    assert!(resolver.resolve("banner").is_found());
}
