//! Per-vault creative sync driven by simulated release tags.

use crate::error::SimulationError;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};
use vgen_kernel::clock::{Clock, iso_timestamp};
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::TIMESTAMP_FORMAT;
use vgen_kernel::domain::simulation::CreativeAsset;
use vgen_kernel::fs::{self, FsError};

const CREATIVE_SYSTEM: &str = "Kimi's CrypDNA Global Creative System";

/// Writes one creative asset per vault and tag, appending each to the deployment summary.
///
/// A missing or empty vaults root prints a notice and writes nothing.
///
/// # Errors
/// [`SimulationError::Fs`] if an asset or the summary cannot be written,
/// [`SimulationError::Output`] if `out` cannot be written.
pub fn simulate_vault_sync(
    cfg: &WorkspaceConfig,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>, SimulationError> {
    writeln!(out, "Simulating continuous GitHub monitoring...")?;
    let regions = match fs::list_dirs(cfg.paths.vaults_path()) {
        Ok(regions) => regions,
        Err(FsError::NotFound { .. }) => {
            warn!("Vaults root {} does not exist", cfg.paths.vaults_path().display());
            Vec::new()
        },
        Err(err) => return Err(err.into()),
    };

    let mut written = Vec::new();
    if regions.is_empty() {
        writeln!(out, "No Vault regions found to simulate sync.")?;
    } else {
        writeln!(out, "Found {} Vault regions: {}", regions.len(), regions.join(", "))?;
        for tag in &cfg.simulation.sync_tags {
            writeln!(out, "\nSimulating sync for {tag} tag...")?;
            for code in &regions {
                writeln!(out, "Processing region: {}", code.to_uppercase())?;
                written.push(sync_region(cfg, clock, out, code, tag)?);
            }
        }
    }

    writeln!(out, "\nSynchronization simulation complete.")?;
    info!(regions = regions.len(), assets = written.len(), "Vault sync simulated");
    Ok(written)
}

fn sync_region(
    cfg: &WorkspaceConfig,
    clock: &dyn Clock,
    out: &mut dyn Write,
    code: &str,
    tag: &str,
) -> Result<PathBuf, SimulationError> {
    let region = code.to_uppercase();
    writeln!(out, "  Simulating sending updated regional Vault data for {region} to Kimi...")?;

    let path = cfg.paths.vault_path(code).join("assets").join(format!("kimi_creative_{tag}_{code}.json"));
    let asset = CreativeAsset {
        asset_name: format!("Creative Asset for {region}"),
        generated_by: CREATIVE_SYSTEM.to_owned(),
        timestamp: iso_timestamp(clock.now()),
        source_tag: tag.to_owned(),
    };
    fs::write_json(&path, &asset)?;
    writeln!(out, "  Simulated receiving creative asset for {region} at {}", path.display())?;

    let status = format!("Sync Complete: {region} - {tag} - {}", clock.now().format(TIMESTAMP_FORMAT));
    fs::append_line(cfg.paths.deployment_summary_path(), &format!("- {status}"))?;
    writeln!(out, "  Updated summary with: {status}")?;
    Ok(path)
}
