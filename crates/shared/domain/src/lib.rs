//! # Domain Models
//!
//! Plain data shared by every slice: the region catalog records, adapter
//! descriptors, registry entries, simulated artifacts and the injected
//! workspace configuration. Depends on `serde` only; no I/O lives here.

pub mod adapter;
pub mod config;
pub mod constants;
pub mod region;
pub mod registry;
pub mod simulation;
