use super::handled;
use crate::models::args::SimulateAction;
use anyhow::{Context, Result};
use std::io::{self, Write};
use vgen::domain::config::WorkspaceConfig;
use vgen::features::simulation::{
    simulate_asset_sync, simulate_commercials, simulate_intelligence_sync, simulate_vault_sync,
};
use vgen::kernel::clock::Clock;

/// Simulation narratives are the command's product and go to stdout.
pub fn handle(action: SimulateAction, cfg: &WorkspaceConfig, clock: &dyn Clock) -> Result<()> {
    let mut out = io::stdout().lock();
    match action {
        SimulateAction::Intelligence {} => {
            handled(simulate_intelligence_sync(&mut out, clock));
        },
        SimulateAction::Assets {} => {
            handled(simulate_asset_sync(cfg, clock, &mut out));
        },
        SimulateAction::Commercials {} => {
            handled(simulate_commercials(cfg, clock, &mut out));
        },
        SimulateAction::Sync {} => {
            handled(simulate_vault_sync(cfg, clock, &mut out));
        },
    }
    out.flush().context("Failed to flush stdout")
}
