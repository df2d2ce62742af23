#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vgen_kernel::domain::config::WorkspaceConfig;

pub const CATALOG: &str = r#"{
    "us": { "language": "en", "currency_symbol": "$", "currency_iso": "USD", "status": "active" },
    "jp": { "language": "ja", "currency_symbol": "¥", "currency_iso": "JPY" },
    "uk": { "language": "en", "currency_symbol": "£", "currency_iso": "GBP", "status": "active" },
    "ae": { "language": "ar", "currency_symbol": "د.إ", "currency_iso": "AED" }
}"#;

/// A temp workspace with the default layout, rooted at the temp dir.
pub fn workspace() -> (TempDir, WorkspaceConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = WorkspaceConfig::rooted(dir.path());
    (dir, cfg)
}

pub fn write_catalog(cfg: &WorkspaceConfig, body: &str) {
    write(&cfg.paths.catalog_path(), body);
}

pub fn write(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .map(|entries| {
            entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
