//! File names and fixed values shared across slices.

/// Suffix every adapter descriptor file name ends with.
pub const ADAPTER_FILE_SUFFIX: &str = "_adapter.json";

pub const DESCRIPTOR_SCHEMA_VERSION: &str = "1.0";

pub const CREDIT_REPORT_FILE: &str = "Vault_Credit_Report.md";
pub const INTEGRATION_REPORT_FILE: &str = "Vault_Integration_Report.md";
pub const STATUS_REPORT_FILE: &str = "Vault_Status_Report.md";

/// Vault config key written by the registry linker.
pub const REGISTRY_PATH_KEY: &str = "credit_adapter_registry_path";

/// Vault config key written by the activation monitor.
pub const ACTIVE_ADAPTER_KEY: &str = "active_credit_adapter";

/// Placeholder for descriptor fields that are absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Report timestamp layout (`2026-10-17 09:30:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact stamp used in dummy asset file names (`20261017093000`).
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";
