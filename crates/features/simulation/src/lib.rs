//! Simulation slice.
//!
//! Explicit stubs for the creative and deployment side of the workflow. They
//! print a narrative to the supplied writer and drop placeholder files; none
//! of them touch the network.
mod assets;
mod commercials;
mod error;
mod intelligence;
mod sync;

pub use crate::assets::{SyncedDir, dummy_asset_name, simulate_asset_sync};
pub use crate::commercials::{crypmercial, simulate_commercials};
pub use crate::error::{SimulationError, SimulationErrorExt};
pub use crate::intelligence::{
    CommitKind, DATA_CHANNELS, DataChannel, WEBHOOKS, Webhook, route_webhook,
    simulate_intelligence_sync,
};
pub use crate::sync::simulate_vault_sync;
