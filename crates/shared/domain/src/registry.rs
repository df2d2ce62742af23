use serde::{Deserialize, Serialize};

/// Summary of one adapter descriptor inside `adapter_registry.json`.
///
/// Fields are plain strings: the registry mirrors whatever the descriptor
/// says, including hand-edited statuses such as `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub region: String,
    /// The descriptor's `adapter_name`.
    pub bureau: String,
    pub status: String,
    pub endpoint_placeholder: String,
}

impl RegistryEntry {
    /// Entries flagged `active` are picked up by the activation monitor.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
