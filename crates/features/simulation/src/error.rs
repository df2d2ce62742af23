use std::borrow::Cow;
use vgen_catalog::CatalogError;
use vgen_kernel::fs::FsError;

#[vgen_derive::vgen_error]
pub enum SimulationError {
    #[error("Cannot simulate commercial generation{}: {source}", format_context(.context))]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },

    #[error("File error{}: {source}", format_context(.context))]
    Fs { source: FsError, context: Option<Cow<'static, str>> },

    #[error("Output error{}: {source}", format_context(.context))]
    Output { source: std::io::Error, context: Option<Cow<'static, str>> },
}
