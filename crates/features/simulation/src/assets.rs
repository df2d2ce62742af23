//! Creative connector handshake and asset directory sync.

use crate::error::SimulationError;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use vgen_kernel::clock::Clock;
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::FILE_STAMP_FORMAT;
use vgen_kernel::fs;

/// Placeholder file written into each synced directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedDir {
    pub dir: String,
    pub file: PathBuf,
}

/// `dummy_asset_20261017093000.txt`.
#[must_use]
pub fn dummy_asset_name(clock: &dyn Clock) -> String {
    format!("dummy_asset_{}.txt", clock.now().format(FILE_STAMP_FORMAT))
}

/// Creates each configured asset directory with one dummy file and prints the results.
///
/// # Errors
/// [`SimulationError::Fs`] if a directory or file cannot be written,
/// [`SimulationError::Output`] if `out` cannot be written.
pub fn simulate_asset_sync(
    cfg: &WorkspaceConfig,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<Vec<SyncedDir>, SimulationError> {
    writeln!(out, "Simulating Kimi connection to CrypDNA Vault ecosystem...")?;
    writeln!(out, "Kimi connected successfully (simulated).")?;

    let mut synced = Vec::with_capacity(cfg.simulation.asset_dirs.len());
    for dir in &cfg.simulation.asset_dirs {
        let file = cfg.paths.resolve(dir).join(dummy_asset_name(clock));
        fs::write_text(&file, "Simulated asset content.")?;
        writeln!(out, "Simulated sync for {dir}")?;
        synced.push(SyncedDir { dir: dir.clone(), file });
    }
    writeln!(out, "Asset directories synced (simulated).")?;

    writeln!(out, "\n--- Simulation Results ---")?;
    writeln!(out, "Kimi Connection Status: Successful")?;
    writeln!(out, "Asset Sync Details:")?;
    for entry in &synced {
        writeln!(out, "  - {}: Synced: {}", entry.dir, entry.file.display())?;
    }

    info!(dirs = synced.len(), "Asset sync simulated");
    Ok(synced)
}
