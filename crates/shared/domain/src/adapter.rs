use serde::{Deserialize, Serialize};
use std::fmt;

/// Activation state of a credit adapter descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterStatus {
    /// Reporting to the bureau.
    Live,
    /// Scaffolded, awaiting local regulatory approval.
    Locked,
}

impl AdapterStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for AdapterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<region>_adapter.json` file.
///
/// Field order is the on-disk order; descriptors are always rewritten whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    pub adapter_name: String,
    /// Uppercase region code.
    pub region: String,
    pub status: AdapterStatus,
    pub schema_version: String,
    pub endpoint: String,
    /// Name of the environment variable that would hold the bureau key. Inert metadata.
    pub api_key_env_var: String,
    pub mapping: AdapterMapping,
    pub compliance_note: String,
}

/// Vault field → bureau field table.
///
/// Locked placeholders carry an empty object (`{}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdapterMapping {
    Tradeline(TradelineMapping),
    Unmapped(Unmapped),
}

impl AdapterMapping {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Unmapped(_))
    }
}

impl Default for AdapterMapping {
    fn default() -> Self {
        Self::Unmapped(Unmapped {})
    }
}

/// Serializes as an empty JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unmapped {}

/// Vault fields mapped onto a D&B tradeline record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradelineMapping {
    pub vault_id: String,
    pub cardholder_name: String,
    pub dna_score: String,
    pub available_balance: String,
    pub pending_balance: String,
    pub tradeline_items: Vec<TradelineField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradelineField {
    pub vault_field: String,
    pub dnb_field: String,
}

impl TradelineField {
    pub fn new(vault_field: impl Into<String>, dnb_field: impl Into<String>) -> Self {
        Self { vault_field: vault_field.into(), dnb_field: dnb_field.into() }
    }
}
