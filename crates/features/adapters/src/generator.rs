//! Writes one adapter descriptor per catalog region.

use crate::error::AdaptersError;
use std::path::PathBuf;
use tracing::info;
use vgen_catalog::load_catalog;
use vgen_kernel::domain::adapter::{
    AdapterDescriptor, AdapterMapping, AdapterStatus, TradelineField, TradelineMapping,
};
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::{ADAPTER_FILE_SUFFIX, DESCRIPTOR_SCHEMA_VERSION};
use vgen_kernel::fs;

const DNB_ADAPTER_NAME: &str = "Dun & Bradstreet (D&B)";
const DNB_ENDPOINT: &str = "https://api.dnb.com/v1/tradeline";
const DNB_API_KEY_ENV: &str = "DNB_API_KEY";
const DNB_COMPLIANCE_NOTE: &str = "Fully compliant with US financial regulations (e.g., FCRA).";
const LOCKED_COMPLIANCE_NOTE: &str =
    "Local regulations require specific approval before activation.";

/// Files written by [`generate_adapters`], live descriptor first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub live: PathBuf,
    pub placeholders: Vec<PathBuf>,
}

impl GenerationSummary {
    /// Number of descriptor files written.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.placeholders.len()
    }
}

/// `jp` → `jp_adapter.json`.
#[must_use]
pub fn descriptor_file_name(region_code: &str) -> String {
    format!("{}{ADAPTER_FILE_SUFFIX}", region_code.to_lowercase())
}

/// The live Dun & Bradstreet tradeline descriptor.
#[must_use]
pub fn live_descriptor(region_code: &str) -> AdapterDescriptor {
    AdapterDescriptor {
        adapter_name: DNB_ADAPTER_NAME.to_owned(),
        region: region_code.to_uppercase(),
        status: AdapterStatus::Live,
        schema_version: DESCRIPTOR_SCHEMA_VERSION.to_owned(),
        endpoint: DNB_ENDPOINT.to_owned(),
        api_key_env_var: DNB_API_KEY_ENV.to_owned(),
        mapping: AdapterMapping::Tradeline(TradelineMapping {
            vault_id: "duns_number".to_owned(),
            cardholder_name: "legal_business_name".to_owned(),
            dna_score: "paydex_score".to_owned(),
            available_balance: "credit_limit".to_owned(),
            pending_balance: "outstanding_balance".to_owned(),
            tradeline_items: vec![
                TradelineField::new("tradeline_item_id", "tradeline_id"),
                TradelineField::new("tradeline_type", "type"),
                TradelineField::new("tradeline_amount", "amount"),
                TradelineField::new("tradeline_status", "status"),
            ],
        }),
        compliance_note: DNB_COMPLIANCE_NOTE.to_owned(),
    }
}

/// A locked descriptor awaiting local regulatory approval.
#[must_use]
pub fn placeholder_descriptor(region_code: &str) -> AdapterDescriptor {
    let region = region_code.to_uppercase();
    AdapterDescriptor {
        adapter_name: format!("Credit Bureau ({region})"),
        region,
        status: AdapterStatus::Locked,
        schema_version: DESCRIPTOR_SCHEMA_VERSION.to_owned(),
        endpoint: String::new(),
        api_key_env_var: String::new(),
        mapping: AdapterMapping::default(),
        compliance_note: LOCKED_COMPLIANCE_NOTE.to_owned(),
    }
}

/// Writes the live descriptor plus one locked placeholder per other catalog region.
///
/// The live descriptor is written even when the catalog has no entry for the
/// live region. Nothing is written when the catalog cannot be loaded.
///
/// # Errors
/// [`AdaptersError::Catalog`] for a missing or malformed catalog,
/// [`AdaptersError::Fs`] if a descriptor cannot be written.
pub fn generate_adapters(cfg: &WorkspaceConfig) -> Result<GenerationSummary, AdaptersError> {
    let catalog = load_catalog(cfg.paths.catalog_path())?;
    let dir = cfg.paths.adapters_path();
    let live_code = cfg.adapters.live_region.to_lowercase();

    info!("Creating {} live tradeline and global placeholder adapter files...", live_code.to_uppercase());

    let live = dir.join(descriptor_file_name(&live_code));
    fs::write_json(&live, &live_descriptor(&live_code))?;
    info!("Created {} ({DNB_ADAPTER_NAME} live).", live.display());

    let mut placeholders = Vec::with_capacity(catalog.len());
    for code in catalog.codes().filter(|code| code.to_lowercase() != live_code) {
        let path = dir.join(descriptor_file_name(code));
        fs::write_json(&path, &placeholder_descriptor(code))?;
        info!("Created {}", path.display());
        placeholders.push(path);
    }

    info!(count = placeholders.len(), "Global placeholder adapter files created.");
    Ok(GenerationSummary { live, placeholders })
}
