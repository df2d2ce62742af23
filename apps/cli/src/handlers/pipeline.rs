use super::handled;
use anyhow::Result;
use vgen::domain::config::WorkspaceConfig;
use vgen::kernel::clock::Clock;
use vgen::run_pipeline;

pub fn handle(cfg: &WorkspaceConfig, clock: &dyn Clock) -> Result<()> {
    handled(run_pipeline(cfg, clock));
    Ok(())
}
