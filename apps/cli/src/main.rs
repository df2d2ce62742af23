#![warn(rust_2018_idioms, unused_lifetimes)]

pub mod handlers;
pub mod models;

use crate::handlers::{adapters, pipeline, reports, simulate};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use vgen::domain::config::{LoggingConfig, WorkspaceConfig};
use vgen::kernel::clock::SystemClock;
use vgen::kernel::config::load_config;
use vgen_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg: WorkspaceConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(root) = cli.root {
        cfg.paths.root = root;
    }

    let _log = init_logger(&cfg)?;
    let clock = SystemClock;

    match cli.command {
        AppCommands::Adapters { action } => adapters::handle(action, &cfg)?,
        AppCommands::Reports { action } => reports::handle(action, &cfg, &clock)?,
        AppCommands::Simulate { action } => simulate::handle(action, &cfg, &clock)?,
        AppCommands::Pipeline {} => pipeline::handle(&cfg, &clock)?,
    }

    Ok(())
}

fn init_logger(cfg: &WorkspaceConfig) -> Result<Logger> {
    let LoggingConfig { level, dir, json } = &cfg.logging;
    let level: LevelFilter =
        level.parse().with_context(|| format!("Invalid log level '{level}'"))?;

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    let logger = match dir {
        Some(dir) => builder.path(cfg.paths.resolve(dir)).json(*json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
