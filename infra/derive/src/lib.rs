#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Vault Genesis workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! vgen-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Consumers must also depend on `thiserror`, since the generated code derives
//! `thiserror::Error`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining slice error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: Implements `From<Source>` for variants with a source field, so `?` works.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
/// * **Helper**: Emits a private `format_context` function for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named-field** variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source (`source` field, `#[source]` or `#[from]`) must carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vgen_derive::vgen_error]
/// pub enum CatalogError {
///     #[error("Catalog not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Catalog is not valid JSON{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, CatalogError> {
///     serde_json::from_str(raw).context("Parsing regions_data.json")
/// }
/// ```
#[proc_macro_attribute]
pub fn vgen_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
