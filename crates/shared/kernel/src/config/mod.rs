use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "vgen";

/// Prefix of environment overrides (`VGEN__PATHS__ROOT=/srv/genesis`).
pub const ENV_PREFIX: &str = "VGEN";

/// Custom error type for config loading.
#[vgen_derive::vgen_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration record from a file layered with environment overrides.
///
/// 1. **Base File**: `path` when given (must exist), otherwise an optional
///    `vgen.{toml,json,yaml}` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `VGEN__`; nested keys are
///    separated by double underscores (`VGEN__ADAPTERS__LIVE_REGION` → `adapters.live_region`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a value has the
/// wrong type, or the merged tree does not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG_NAME} config in the working directory");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use vgen_domain::config::WorkspaceConfig;

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("genesis.toml");
        fs::write(
            &file,
            "[paths]\nroot = \"/srv/genesis\"\n\n[adapters]\nlive_region = \"ca\"\n\n[deployment]\nmaintenance_interval_days = 14\n",
        )
        .unwrap();

        let cfg: WorkspaceConfig = load_config(Some(&file)).unwrap();
        assert_eq!(cfg.paths.root, PathBuf::from("/srv/genesis"));
        assert_eq!(cfg.paths.registry_file, "adapter_registry.json");
        assert_eq!(cfg.adapters.live_region, "ca");
        assert_eq!(cfg.deployment.maintenance_interval_days, 14);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_config::<WorkspaceConfig>(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
    }

    #[test]
    fn mistyped_value_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.toml");
        fs::write(&file, "[deployment]\nmaintenance_interval_days = \"soon\"\n").unwrap();

        let err = load_config::<WorkspaceConfig>(Some(&file)).unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize config"));
    }
}
