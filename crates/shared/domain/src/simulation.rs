//! Artifacts written by the simulation commands.

use serde::{Deserialize, Serialize};

/// A localized commercial written under `vaults/<code>/assets/crypmercials/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crypmercial {
    pub region: String,
    pub language: String,
    pub currency: String,
    pub theme: String,
    pub ad_copy: String,
    pub video_url: String,
    /// ISO date (`2026-10-24`).
    pub scheduled_post_date: String,
}

/// One line of `commercial_generation_logs.json`.
///
/// Every field is optional on read so the integration report can render
/// partially written logs with `N/A` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialLogEntry {
    pub timestamp: Option<String>,
    pub region: Option<String>,
    pub theme: Option<String>,
    pub status: Option<String>,
    pub output_file: Option<String>,
    pub scheduled_post: Option<String>,
}

/// A creative asset "received" during a vault sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeAsset {
    pub asset_name: String,
    pub generated_by: String,
    pub timestamp: String,
    pub source_tag: String,
}
