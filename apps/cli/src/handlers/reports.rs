use super::handled;
use crate::models::args::ReportAction;
use anyhow::Result;
use vgen::domain::config::WorkspaceConfig;
use vgen::features::reports::{
    generate_credit_report, generate_integration_report, generate_status_report,
};
use vgen::kernel::clock::Clock;

pub fn handle(action: ReportAction, cfg: &WorkspaceConfig, clock: &dyn Clock) -> Result<()> {
    match action {
        ReportAction::Credit {} => handled(generate_credit_report(cfg, clock)),
        ReportAction::Integration {} => handled(generate_integration_report(cfg, clock)),
        ReportAction::Status { edition } => handled(generate_status_report(cfg, clock, edition.into())),
    };
    Ok(())
}
