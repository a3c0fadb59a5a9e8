#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Reward Hub crates.
//!
//! * [`macro@main`] boots an async `main` on a preconfigured Tokio runtime profile.
//! * [`macro@rhub_error`] turns an enum into a `thiserror` error with `.context(...)` support.
//! * [`macro@rhub_slice`] turns a struct into a cloneable feature-slice handle.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime from an `rhub_runtime` profile.
///
/// # Arguments
///
/// * `high_performance` - Server profile (more stack, longer keep-alive).
/// * `memory_efficient` - Client/CLI profile (half the workers, smaller stacks).
/// * `default` or nothing - Worker threads detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[rhub_runtime::main(memory_efficient)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. A variant wrapping a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[rhub_derive::rhub_error]
/// pub enum SheetError {
///     #[error("Storage failure{}: {source}", format_context(.context))]
///     Storage { source: rhub_storage::StorageError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal sheet error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn rhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as an
/// `Arc` wrapper that derefs to the inner state and implements
/// `rhub_domain::registry::FeatureSlice`, so the server can register it.
///
/// # Example
/// ```rust,ignore
/// #[rhub_derive::rhub_slice]
/// pub struct Sheet {
///     pub rows: tokio::sync::Mutex<Vec<Vec<String>>>,
/// }
///
/// let sheet = Sheet::new(SheetInner { rows: Default::default() });
/// ```
#[proc_macro_attribute]
pub fn rhub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
