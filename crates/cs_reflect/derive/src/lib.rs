//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Unit structs (`struct T;`) are treated as `Opaque`.
/// Tuple structs and enums must be marked `Opaque` explicitly.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::config::Options")]
/// struct Options { /* ... */ }
/// ```
///
/// Only non-generic types accept a custom path.
///
/// ### Opaque Types
///
/// ```rust, ignore
/// #[derive(Reflect, Debug)]
/// #[reflect(Opaque)]
/// struct Port(u16);
/// ```
///
/// Opaque types are replaced as a whole and must implement `Debug`.
///
/// ## Field Attributes
///
/// - `#[reflect(export)]`: treat the field as exported, whatever its visibility.
/// - `#[reflect(hidden)]`: treat the field as not exported.
/// - `#[reflect(ignore)]`: leave the field out of reflection entirely.
/// - `#[reflect(tag(key = "value", ...))]`: attach string tags.
///
/// Without `export` or `hidden`, a `pub` field is exported and
/// any other visibility (`pub(crate)` included) is not.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Args {
///     #[reflect(tag(flag = "verbose", alias = "['v', 'V']"))]
///     pub verbose: bool,
///     #[reflect(ignore)]
///     pub cache: Vec<u8>,
///     count: u32,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters are bounded by `Send + Sync + 'static`, and every
/// reflected field type by `Reflect + Typed`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_reflect_impls(ast)
}

/// Implements opaque reflection for a foreign type.
///
/// The type must be `'static`, `Send`, `Sync` and `Debug`.
///
/// ```rust, ignore
/// impl_reflect_opaque!(u64);
/// impl_reflect_opaque!(&'static str);
/// impl_reflect_opaque!(::std::path::PathBuf);
/// ```
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    let ty = parse_macro_input!(input as syn::Type);
    impls::match_opaque_impls(ty)
}
