//! Consolidates adapter descriptors into `adapter_registry.json`.

use crate::error::AdaptersError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::{ADAPTER_FILE_SUFFIX, NOT_AVAILABLE};
use vgen_kernel::domain::registry::RegistryEntry;
use vgen_kernel::fs::{self, FsError};

/// The four descriptor fields the registry cares about.
///
/// Read leniently so hand-edited descriptors (e.g. `"status": "active"`) still register.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DescriptorFields {
    region: Option<String>,
    adapter_name: Option<String>,
    status: Option<String>,
    endpoint: Option<String>,
}

impl From<DescriptorFields> for RegistryEntry {
    fn from(fields: DescriptorFields) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        Self {
            region: or_na(fields.region),
            bureau: or_na(fields.adapter_name),
            status: or_na(fields.status),
            endpoint_placeholder: fields.endpoint.unwrap_or_default(),
        }
    }
}

/// Outcome of [`build_registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrySummary {
    pub path: PathBuf,
    pub entries: Vec<RegistryEntry>,
    /// Descriptor files that could not be parsed.
    pub skipped: Vec<PathBuf>,
}

/// Projects one descriptor file into a registry entry.
///
/// # Errors
/// Returns the [`FsError`] of the failed read or decode.
pub fn read_entry(path: impl AsRef<Path>) -> Result<RegistryEntry, FsError> {
    fs::read_json::<DescriptorFields>(path).map(RegistryEntry::from)
}

/// Scans the adapter directory and writes the consolidated registry.
///
/// Entries follow descriptor file-name order. Malformed descriptors are logged
/// and left out.
///
/// # Errors
/// [`AdaptersError::DirectoryNotFound`] when the adapter directory is missing
/// (nothing is written), [`AdaptersError::Fs`] if the registry cannot be written.
pub fn build_registry(cfg: &WorkspaceConfig) -> Result<RegistrySummary, AdaptersError> {
    let dir = cfg.paths.adapters_path();
    let files = fs::list_files(&dir, ADAPTER_FILE_SUFFIX).map_err(|err| match err {
        FsError::NotFound { message, .. } => AdaptersError::DirectoryNotFound { message, context: None },
        err => AdaptersError::from(err),
    })?;

    let mut entries = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for name in files {
        let path = dir.join(&name);
        match read_entry(&path) {
            Ok(entry) => entries.push(entry),
            Err(err @ FsError::Decode { .. }) => {
                error!("Error: Could not decode JSON from {} ({err})", path.display());
                skipped.push(path);
            },
            Err(err) => {
                error!("An error occurred while processing {}: {err}", path.display());
                skipped.push(path);
            },
        }
    }

    let path = cfg.paths.registry_path();
    fs::write_json(&path, &entries)?;
    info!(entries = entries.len(), skipped = skipped.len(), "Generated {}", path.display());

    Ok(RegistrySummary { path, entries, skipped })
}

/// Reads a previously written registry.
///
/// # Errors
/// [`AdaptersError::RegistryNotFound`] when the file is missing,
/// [`AdaptersError::Fs`] when it cannot be decoded.
pub fn load_registry(cfg: &WorkspaceConfig) -> Result<Vec<RegistryEntry>, AdaptersError> {
    let path = cfg.paths.registry_path();
    fs::read_json(&path).map_err(|err| match err {
        FsError::NotFound { message, .. } => AdaptersError::RegistryNotFound { message, context: None },
        err => AdaptersError::from(err),
    })
}
