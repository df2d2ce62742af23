use std::borrow::Cow;
use vgen_catalog::CatalogError;
use vgen_kernel::fs::FsError;

#[vgen_derive::vgen_error]
pub enum ReportsError {
    #[error("Report input unavailable{}: {source}", format_context(.context))]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },

    #[error("Report write failed{}: {source}", format_context(.context))]
    Fs { source: FsError, context: Option<Cow<'static, str>> },
}
