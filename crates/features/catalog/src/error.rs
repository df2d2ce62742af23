use std::borrow::Cow;
use vgen_kernel::fs::FsError;

#[vgen_derive::vgen_error]
pub enum CatalogError {
    #[error("Region catalog not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Region catalog is not valid JSON{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Region catalog unreadable{}: {source}", format_context(.context))]
    Io { source: FsError, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
