//! Localized "crypmercial" generation for every catalog region.

use crate::assets::dummy_asset_name;
use crate::error::SimulationError;
use chrono::{NaiveDate, TimeDelta};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use vgen_catalog::{RegionRecord, load_catalog};
use vgen_kernel::clock::{Clock, iso_timestamp};
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::simulation::{CommercialLogEntry, Crypmercial};
use vgen_kernel::fs;

const BRAND_ASSET_DIR: &str = "assets/brand";
const GENERATED_STATUS: &str = "Generated and Localized";

/// Builds the commercial for one region and theme.
#[must_use]
pub fn crypmercial(
    code: &str,
    record: &RegionRecord,
    theme: &str,
    media_host: &str,
    post_date: NaiveDate,
) -> Crypmercial {
    Crypmercial {
        region: code.to_uppercase(),
        language: record.language.clone(),
        currency: record.currency_iso.clone(),
        theme: theme.to_owned(),
        ad_copy: format!(
            "Experience the {theme} Crypmercial in {}! Unlock your future with CrypDNA. Prices starting from {}100.",
            record.language.to_uppercase(),
            record.currency_symbol
        ),
        video_url: format!("{}/{code}/{theme}_commercial.mp4", media_host.trim_end_matches('/')),
        scheduled_post_date: post_date.format("%Y-%m-%d").to_string(),
    }
}

/// Writes three localized commercials per region and the generation log.
///
/// Nothing is written when the catalog cannot be loaded.
///
/// # Errors
/// [`SimulationError::Catalog`] for a missing or malformed catalog,
/// [`SimulationError::Fs`] if an artifact cannot be written.
pub fn simulate_commercials(
    cfg: &WorkspaceConfig,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<Vec<CommercialLogEntry>, SimulationError> {
    writeln!(out, "Simulating AI-driven commercial generation and localization...")?;
    let catalog = load_catalog(cfg.paths.catalog_path())?;

    let sim = &cfg.simulation;
    let today = clock.today();
    let post_date = TimeDelta::try_days(sim.schedule_offset_days)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(today);

    let mut logs = Vec::with_capacity(catalog.len() * sim.themes.len());
    for (code, record) in catalog.iter() {
        let region = code.to_uppercase();
        let brand = cfg.paths.resolve(BRAND_ASSET_DIR).join(dummy_asset_name(clock));
        fs::write_text(&brand, &format!("Simulated brand asset for {region}"))?;

        let dir = cfg.paths.vault_path(code).join("assets").join("crypmercials");
        for theme in &sim.themes {
            let commercial = crypmercial(code, record, theme, &sim.media_host, post_date);
            let path: PathBuf = dir.join(format!("{}_crypmercial.json", theme.to_lowercase()));
            fs::write_json(&path, &commercial)?;

            logs.push(CommercialLogEntry {
                timestamp: Some(iso_timestamp(clock.now())),
                region: Some(region.clone()),
                theme: Some(theme.clone()),
                status: Some(GENERATED_STATUS.to_owned()),
                output_file: Some(path.to_string_lossy().into_owned()),
                scheduled_post: Some(commercial.scheduled_post_date),
            });
        }
    }
    writeln!(out, "AI-driven commercial generation and localization simulated successfully.")?;

    let log_path = cfg.paths.commercial_logs_path();
    fs::write_json(&log_path, &logs)?;
    writeln!(out, "Commercial generation logs saved to {}", log_path.display())?;

    info!(regions = catalog.len(), commercials = logs.len(), "Commercial generation simulated");
    Ok(logs)
}
