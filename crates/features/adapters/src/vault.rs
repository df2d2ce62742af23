//! Vault config edits: registry link and active adapter.
//!
//! Vault configs are owned by the UI; only the two keys below are ever touched
//! and every other key is written back unchanged.

use crate::error::AdaptersError;
use crate::registry::load_registry;
use serde_json::{Map, Value};
use std::path::{Component, Path};
use tracing::{error, info, warn};
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::{ACTIVE_ADAPTER_KEY, NOT_AVAILABLE, REGISTRY_PATH_KEY};
use vgen_kernel::fs::{self, FsError};

type VaultConfig = Map<String, Value>;

/// Regions touched by [`link_registry`], by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub updated: Vec<String>,
    /// Vault directories without a config file.
    pub missing: Vec<String>,
    /// Vault configs that could not be read or written.
    pub failed: Vec<String>,
}

/// Regions touched by [`activate_adapters`], by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    pub activated: Vec<String>,
    pub already_active: Vec<String>,
    pub failed: Vec<String>,
    /// Raw regions that do not name a vault directory.
    pub skipped: Vec<String>,
}

/// Points every vault config at the adapter registry.
///
/// # Errors
/// [`AdaptersError::RegistryNotFound`] if the registry has not been generated;
/// nothing is changed in that case.
pub fn link_registry(cfg: &WorkspaceConfig) -> Result<LinkSummary, AdaptersError> {
    let registry = cfg.paths.registry_path();
    if !registry.is_file() {
        return Err(AdaptersError::RegistryNotFound {
            message: registry.display().to_string().into(),
            context: None,
        });
    }

    let link = cfg.paths.registry_link();
    let vaults = list_vaults(cfg)?;
    info!("Linking {} to Vault metadata...", registry.display());

    let mut summary = LinkSummary::default();
    for code in vaults {
        let path = cfg.paths.vault_config_path(&code);
        if !path.is_file() {
            warn!("Warning: {} not found for region {code}. Skipping.", path.display());
            summary.missing.push(code);
            continue;
        }

        let updated = read_vault_config(&path).and_then(|mut config| {
            config.insert(REGISTRY_PATH_KEY.to_owned(), Value::String(link.clone()));
            fs::write_json(&path, &config)
        });
        match updated {
            Ok(()) => {
                info!("Updated {} with registry link.", path.display());
                summary.updated.push(code);
            },
            Err(err) => {
                log_config_error(&path, &err);
                summary.failed.push(code);
            },
        }
    }

    info!(updated = summary.updated.len(), "Finished linking adapter registry to Vault metadata.");
    Ok(summary)
}

/// Marks the bureau of every `active` registry entry as the vault's active adapter.
///
/// A vault without a config file gets a fresh one holding only the active
/// adapter key. Vaults already pointing at the bureau are left untouched.
/// Entries whose region is missing or is not a plain directory name are
/// skipped, so nothing is written outside the vaults root.
///
/// # Errors
/// [`AdaptersError::RegistryNotFound`] or [`AdaptersError::Fs`] when the
/// registry cannot be read.
pub fn activate_adapters(cfg: &WorkspaceConfig) -> Result<ActivationSummary, AdaptersError> {
    info!("Monitoring adapter registry for changes...");
    let registry = load_registry(cfg)?;

    let mut summary = ActivationSummary::default();
    for entry in registry.iter().filter(|entry| entry.is_active()) {
        let Some(code) = vault_dir_name(&entry.region) else {
            warn!("Warning: registry region {:?} does not name a vault. Skipping.", entry.region);
            summary.skipped.push(entry.region.clone());
            continue;
        };
        let path = cfg.paths.vault_config_path(&code);

        let mut config = match read_vault_config(&path) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => VaultConfig::new(),
            Err(err) => {
                log_config_error(&path, &err);
                summary.failed.push(code);
                continue;
            },
        };

        if config.get(ACTIVE_ADAPTER_KEY).and_then(Value::as_str) == Some(entry.bureau.as_str()) {
            info!("Adapter for {} - {} already active in vault config.", entry.region, entry.bureau);
            summary.already_active.push(code);
            continue;
        }

        info!("Detected activation for {} - {}. Triggering activation...", entry.region, entry.bureau);
        config.insert(ACTIVE_ADAPTER_KEY.to_owned(), Value::String(entry.bureau.clone()));
        match fs::write_json(&path, &config) {
            Ok(()) => {
                info!("Vault config for {} updated to activate {}.", entry.region, entry.bureau);
                summary.activated.push(code);
            },
            Err(err) => {
                log_config_error(&path, &err);
                summary.failed.push(code);
            },
        }
    }

    info!("Adapter registry monitoring complete.");
    Ok(summary)
}

/// Vault directory names, sorted. A missing vaults root means no vaults.
fn list_vaults(cfg: &WorkspaceConfig) -> Result<Vec<String>, AdaptersError> {
    match fs::list_dirs(cfg.paths.vaults_path()) {
        Ok(vaults) => Ok(vaults),
        Err(FsError::NotFound { .. }) => {
            warn!("Vaults root {} not found; nothing to link.", cfg.paths.vaults_path().display());
            Ok(Vec::new())
        },
        Err(err) => Err(err.into()),
    }
}

/// Lowercased vault directory for `region`, if it is a single plain path component.
fn vault_dir_name(region: &str) -> Option<String> {
    if region == NOT_AVAILABLE {
        return None;
    }
    let mut components = Path::new(region).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(region.to_lowercase()),
        _ => None,
    }
}

/// Vault configs must be JSON objects; anything else decodes as an error.
fn read_vault_config(path: &Path) -> Result<VaultConfig, FsError> {
    fs::read_json(path)
}

fn log_config_error(path: &Path, err: &FsError) {
    if err.is_decode() {
        error!("Error: Could not decode JSON from {} ({err})", path.display());
    } else {
        error!("An error occurred while processing {}: {err}", path.display());
    }
}
