//! Facade crate for the Vault Genesis slices and shared modules.
//! Re-exports domain/kernel primitives and composes the adapter pipeline.
//! Keep this crate thin: it should compose other crates, not implement business logic.

mod pipeline;

pub use pipeline::{PipelineError, PipelineErrorExt, PipelineSummary, run_pipeline};
pub use vgen_domain as domain;
pub use vgen_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use vgen_adapters as adapters;
    pub use vgen_catalog as catalog;
    pub use vgen_reports as reports;
    pub use vgen_simulation as simulation;
}
