use std::borrow::Cow;
use std::path::PathBuf;
use tracing::info;
use vgen_adapters::{AdaptersError, LinkSummary, build_registry, generate_adapters, link_registry};
use vgen_kernel::clock::Clock;
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_reports::{ReportsError, generate_credit_report};

#[vgen_derive::vgen_error]
pub enum PipelineError {
    #[error("Adapter step failed{}: {source}", format_context(.context))]
    Adapters { source: AdaptersError, context: Option<Cow<'static, str>> },

    #[error("Report step failed{}: {source}", format_context(.context))]
    Reports { source: ReportsError, context: Option<Cow<'static, str>> },
}

/// What each pipeline step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub descriptors: usize,
    pub registry_entries: usize,
    pub linked: LinkSummary,
    pub credit_report: PathBuf,
}

/// Runs generator → registry → linker → credit report, stopping at the first
/// step that aborts.
///
/// # Errors
/// Returns the failing step's error wrapped with the step name as context.
pub fn run_pipeline(cfg: &WorkspaceConfig, clock: &dyn Clock) -> Result<PipelineSummary, PipelineError> {
    let generated = generate_adapters(cfg).context("generate")?;
    let registry = build_registry(cfg).context("registry")?;
    let linked = link_registry(cfg).context("link")?;
    let credit_report = generate_credit_report(cfg, clock).context("credit report")?;

    info!(
        descriptors = generated.count(),
        entries = registry.entries.len(),
        linked = linked.updated.len(),
        "Adapter pipeline complete"
    );

    Ok(PipelineSummary {
        descriptors: generated.count(),
        registry_entries: registry.entries.len(),
        linked,
        credit_report,
    })
}
