use super::handled;
use crate::models::args::AdapterAction;
use anyhow::Result;
use tracing::info;
use vgen::domain::config::WorkspaceConfig;
use vgen::features::adapters::{activate_adapters, build_registry, generate_adapters, link_registry};

pub fn handle(action: AdapterAction, cfg: &WorkspaceConfig) -> Result<()> {
    match action {
        AdapterAction::Generate {} => {
            if let Some(summary) = handled(generate_adapters(cfg)) {
                info!(files = summary.count(), "Adapter descriptors written");
            }
        },
        AdapterAction::Registry {} => {
            handled(build_registry(cfg));
        },
        AdapterAction::Link {} => {
            if let Some(summary) = handled(link_registry(cfg)) {
                info!(
                    updated = summary.updated.len(),
                    missing = summary.missing.len(),
                    failed = summary.failed.len(),
                    "Vault configs linked"
                );
            }
        },
        AdapterAction::Activate {} => {
            if let Some(summary) = handled(activate_adapters(cfg)) {
                info!(
                    activated = summary.activated.len(),
                    unchanged = summary.already_active.len(),
                    failed = summary.failed.len(),
                    skipped = summary.skipped.len(),
                    "Activation check finished"
                );
            }
        },
    }
    Ok(())
}
