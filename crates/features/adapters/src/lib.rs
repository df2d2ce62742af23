//! Credit adapter slice.
//!
//! The file-driven pipeline at the heart of the toolkit:
//! catalog → per-region descriptors → `adapter_registry.json` → vault configs.
mod error;
mod generator;
mod registry;
mod vault;

pub use crate::error::{AdaptersError, AdaptersErrorExt};
pub use crate::generator::{
    GenerationSummary, descriptor_file_name, generate_adapters, live_descriptor,
    placeholder_descriptor,
};
pub use crate::registry::{RegistrySummary, build_registry, load_registry, read_entry};
pub use crate::vault::{ActivationSummary, LinkSummary, activate_adapters, link_registry};
