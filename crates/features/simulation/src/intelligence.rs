//! Webhook routing and persistent data channels, printed only.

use crate::error::SimulationError;
use std::io::Write;
use vgen_kernel::clock::{Clock, iso_timestamp};

/// Kind of commit a webhook announces; decides who receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Routed to the creative generator.
    Creative,
    /// Routed to the automation engine.
    Backend,
    Other(&'static str),
}

/// One simulated GitHub push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Webhook {
    pub repository: &'static str,
    pub tag: &'static str,
    pub kind: CommitKind,
}

/// One simulated transfer between two systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChannel {
    pub source: &'static str,
    pub destination: &'static str,
    pub payload: &'static str,
}

pub const WEBHOOKS: &[Webhook] = &[
    Webhook { repository: "crypdna-vault-genesis", tag: "v3.1-creative_update", kind: CommitKind::Creative },
    Webhook { repository: "crypdna-translations", tag: "v3.0-localized_aesthetic", kind: CommitKind::Creative },
    Webhook { repository: "crypdna-vault-genesis", tag: "v3.2-infra_update", kind: CommitKind::Backend },
];

pub const DATA_CHANNELS: &[DataChannel] = &[
    DataChannel { source: "Kimi's creative generator", destination: "CrypDNA Vault Network", payload: "creative assets" },
    DataChannel { source: "Manus's automation engine", destination: "CrypDNA Vault Network", payload: "infrastructure updates" },
    DataChannel { source: "Vault analytics (Supabase)", destination: "Manus's automation engine", payload: "performance data" },
    DataChannel { source: "CrypDNA Vault Network", destination: "crypdawgs.com deployment server", payload: "build artifacts" },
    DataChannel { source: "CrypDNA Vault Network", destination: "Vault analytics (Supabase)", payload: "user interaction logs" },
];

/// Prints how one webhook would be routed.
///
/// # Errors
/// Returns [`SimulationError::Output`] if `out` cannot be written.
pub fn route_webhook(out: &mut dyn Write, hook: &Webhook) -> Result<(), SimulationError> {
    let kind = match hook.kind {
        CommitKind::Creative => "creative",
        CommitKind::Backend => "backend",
        CommitKind::Other(kind) => kind,
    };
    writeln!(out, "\n--- GitHub Webhook Simulation: {} - {} ({kind}) ---", hook.repository, hook.tag)?;
    match hook.kind {
        CommitKind::Creative => {
            writeln!(out, "  Forwarding creative commit to Kimi for content rendering...")?;
            writeln!(out, "  Kimi received creative update for {} with tag {}.", hook.repository, hook.tag)?;
        },
        CommitKind::Backend => {
            writeln!(out, "  Forwarding backend commit to Manus for vault infrastructure updates...")?;
            writeln!(out, "  Manus received backend update for {} with tag {}.", hook.repository, hook.tag)?;
        },
        CommitKind::Other(kind) => {
            writeln!(out, "  Unknown commit type: {kind}. No action taken.")?;
        },
    }
    Ok(())
}

/// Prints the webhook listener and data channel simulation.
///
/// # Errors
/// Returns [`SimulationError::Output`] if `out` cannot be written.
pub fn simulate_intelligence_sync(out: &mut dyn Write, clock: &dyn Clock) -> Result<(), SimulationError> {
    writeln!(out, "\n--- Simulating GitHub Webhook Listener ---")?;
    for hook in WEBHOOKS {
        route_webhook(out, hook)?;
    }

    writeln!(out, "\n--- Simulating Persistent Data Channels ---")?;
    for channel in DATA_CHANNELS {
        writeln!(
            out,
            "  Data Channel: {} -> {} - {} data transferred at {}",
            channel.source,
            channel.destination,
            channel.payload,
            iso_timestamp(clock.now())
        )?;
    }

    writeln!(out, "\nContinuous communication simulation complete.")?;
    tracing::info!(webhooks = WEBHOOKS.len(), channels = DATA_CHANNELS.len(), "Intelligence sync simulated");
    Ok(())
}
