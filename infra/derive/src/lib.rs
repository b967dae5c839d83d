#![allow(unreachable_pub)]

//! # Derive
//!
//! Procedural macros shared by the Ark workspace.
//!
//! Every crate declares exactly one error enum, and every one of them goes through
//! [`macro@ark_error`] so that context handling, upstream conversions and log-safe
//! variant names look the same everywhere.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ark-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a workspace error type.
///
/// # Requirements
///
/// 1. Applied to a non-generic enum with at least one variant.
/// 2. Every variant uses named fields (tuple and unit variants are rejected).
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. A variant wrapping an upstream error names the field `source` (or marks it with
///    `#[source]`) and must also carry a `context` field.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext<T>` trait with `.context(...)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every `{ source, context }` variant.
/// * `From<Source>` for every `{ source, context }` variant, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * `Name::kind()`, the `snake_case` variant name. It never includes payload data, which makes
///   it the field to attach to log records.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ark_derive::ark_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &str) -> Result<Vec<u8>, StoreError> {
///     let bytes = std::fs::read(path).context("Reading ballot file")?;
///     if bytes.is_empty() {
///         return Err("empty ballot file".into());
///     }
///     Ok(bytes)
/// }
///
/// assert_eq!(StoreError::from("boom").kind(), "internal");
/// ```
#[proc_macro_attribute]
pub fn ark_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).into()
}
