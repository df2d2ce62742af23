use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Every path and knob the tools need, injected instead of hardcoded.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfigInner {
    pub paths: PathsConfig,
    pub adapters: AdaptersConfig,
    pub deployment: DeploymentConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(flatten, default)]
    inner: Arc<WorkspaceConfigInner>,
}

impl Deref for WorkspaceConfig {
    type Target = WorkspaceConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for WorkspaceConfig {
    fn deref_mut(&mut self) -> &mut WorkspaceConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl WorkspaceConfig {
    /// Default configuration rooted at `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let mut cfg = Self::default();
        cfg.paths.root = root.into();
        cfg
    }
}

/// Filesystem layout. Relative entries resolve against `root`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub regions_catalog: PathBuf,
    pub adapters_dir: PathBuf,
    /// File name of the registry inside `adapters_dir`.
    pub registry_file: String,
    pub vaults_dir: PathBuf,
    /// Location of the config file inside each vault directory.
    pub vault_config: PathBuf,
    pub reports_dir: PathBuf,
    pub commercial_logs: PathBuf,
    pub deployment_summary: PathBuf,
}

impl PathsConfig {
    /// Joins `path` onto the root unless it is already absolute.
    #[must_use]
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.regions_catalog)
    }

    #[must_use]
    pub fn adapters_path(&self) -> PathBuf {
        self.resolve(&self.adapters_dir)
    }

    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.adapters_path().join(&self.registry_file)
    }

    /// Registry location as referenced from inside a vault config.
    #[must_use]
    pub fn registry_link(&self) -> String {
        Path::new("../..")
            .join(&self.adapters_dir)
            .join(&self.registry_file)
            .to_string_lossy()
            .replace('\\', "/")
    }

    #[must_use]
    pub fn vaults_path(&self) -> PathBuf {
        self.resolve(&self.vaults_dir)
    }

    #[must_use]
    pub fn vault_path(&self, region_code: &str) -> PathBuf {
        self.vaults_path().join(region_code)
    }

    #[must_use]
    pub fn vault_config_path(&self, region_code: &str) -> PathBuf {
        self.vault_path(region_code).join(&self.vault_config)
    }

    #[must_use]
    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.resolve(&self.reports_dir).join(file_name)
    }

    #[must_use]
    pub fn commercial_logs_path(&self) -> PathBuf {
        self.resolve(&self.commercial_logs)
    }

    #[must_use]
    pub fn deployment_summary_path(&self) -> PathBuf {
        self.resolve(&self.deployment_summary)
    }
}

/// Adapter generation knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdaptersConfig {
    /// Region code (any case) that receives the live D&B descriptor.
    pub live_region: String,
}

/// Values baked into the simulated deployment reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub domain: String,
    pub repository: String,
    pub maintenance_interval_days: i64,
}

/// Inputs for the simulation commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub themes: Vec<String>,
    pub schedule_offset_days: i64,
    pub media_host: String,
    pub asset_dirs: Vec<String>,
    pub sync_tags: Vec<String>,
}

/// Logger settings consumed by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            regions_catalog: PathBuf::from("regions_data.json"),
            adapters_dir: PathBuf::from("credit_adapters"),
            registry_file: "adapter_registry.json".to_owned(),
            vaults_dir: PathBuf::from("vaults"),
            vault_config: PathBuf::from("ui/config.json"),
            reports_dir: PathBuf::from("."),
            commercial_logs: PathBuf::from("commercial_generation_logs.json"),
            deployment_summary: PathBuf::from("CrypDNA_Global_Vault_Deployment_Summary.md"),
        }
    }
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self { live_region: "us".to_owned() }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            domain: "crypdawgs.com".to_owned(),
            repository: "crypdna-vault-genesis".to_owned(),
            maintenance_interval_days: 30,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            themes: ["Painite", "Vicuña", "Meteorite"].map(str::to_owned).to_vec(),
            schedule_offset_days: 7,
            media_host: "https://media.crypdawgs.com".to_owned(),
            asset_dirs: [
                "assets/brand/",
                "media/crypdawgs_visuals/",
                "scripts/cryp_commercials/",
                "audio/crypsoundbank/",
            ]
            .map(str::to_owned)
            .to_vec(),
            sync_tags: ["creative_update", "localized_aesthetic"].map(str::to_owned).to_vec(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None, json: false }
    }
}
