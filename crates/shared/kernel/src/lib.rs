//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading, JSON/text file I/O
//! with atomic writes, and an injectable clock.
//!
//! ## Config loading
//! ```rust,no_run
//! use vgen_kernel::config::load_config;
//! use vgen_kernel::domain::config::WorkspaceConfig;
//!
//! let cfg: WorkspaceConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(!cfg.paths.registry_file.is_empty());
//! ```

pub mod clock;
pub mod config;
pub mod fs;

pub use vgen_domain as domain;
