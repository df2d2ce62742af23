//! # CLI Argument Definitions
//!
//! One subcommand per fire-once tool, grouped by slice.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vgen::features::reports::StatusEdition;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "vgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Vault Genesis: credit adapter scaffolding, reports and deployment simulations")]
pub struct Cli {
    /// Configuration file (TOML); `vgen.toml` in the working directory is used when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root every configured path resolves against
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Manage credit adapter descriptors and their registry
    Adapters {
        #[command(subcommand)]
        action: AdapterAction,
    },
    /// Generate markdown reports
    Reports {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Run deployment and creative simulations
    #[command(alias = "sim")]
    Simulate {
        #[command(subcommand)]
        action: SimulateAction,
    },
    /// Generate descriptors, build the registry, link vaults and write the credit report
    Pipeline {},
}

#[derive(Debug, Subcommand)]
pub enum AdapterAction {
    /// Write one descriptor per catalog region
    Generate {},
    /// Consolidate descriptors into the adapter registry
    Registry {},
    /// Point every vault config at the adapter registry
    Link {},
    /// Activate adapters flagged `active` in the registry
    Activate {},
}

#[derive(Debug, Subcommand)]
pub enum ReportAction {
    /// Credit adapter status report
    Credit {},
    /// Creative integration report
    Integration {},
    /// Vault activation status report
    Status {
        /// Report edition
        #[arg(short, long, value_enum, default_value_t = Edition::V4)]
        edition: Edition,
    },
}

#[derive(Debug, Subcommand)]
pub enum SimulateAction {
    /// Webhook routing and persistent data channels
    Intelligence {},
    /// Creative connector handshake and asset directory sync
    Assets {},
    /// Localized commercial generation for every region
    Commercials {},
    /// Per-vault creative sync and deployment summary
    Sync {},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Edition {
    /// v3.1 vault activation
    #[value(alias = "v3.1")]
    V3,
    /// v4.0 global activation
    #[value(alias = "v4.0")]
    V4,
}

impl From<Edition> for StatusEdition {
    fn from(edition: Edition) -> Self {
        match edition {
            Edition::V3 => Self::V3,
            Edition::V4 => Self::V4,
        }
    }
}
