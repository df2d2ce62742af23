use std::borrow::Cow;
use vgen_catalog::CatalogError;
use vgen_kernel::fs::FsError;

/// Failures that abort a whole adapter command.
///
/// Per-file problems (one malformed descriptor, one broken vault config) are
/// logged and skipped instead.
#[vgen_derive::vgen_error]
pub enum AdaptersError {
    #[error("Cannot create credit adapters{}: {source}", format_context(.context))]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },

    #[error("Directory not found{}: {message}", format_context(.context))]
    DirectoryNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Adapter registry not found{}: {message}", format_context(.context))]
    RegistryNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("File error{}: {source}", format_context(.context))]
    Fs { source: FsError, context: Option<Cow<'static, str>> },
}
