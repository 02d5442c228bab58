//! This independent module is used to provide the required path.
//! So as to minimize changes when the `cs_reflect` structure is modified.
//!
//! The only special feature is the path of cs_reflect itself,
//! See [`cs_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `cs_reflect` crate.
///
/// 1. For crates that depend on `cs_reflect`, `::cs_reflect` is returned here.
/// 2. For crates that depend on `clistruct`, `::clistruct::reflect` is returned here.
/// 3. For other situations, `::cs_reflect` is returned here, but this may be incorrect.
///
/// The manifest is read on every call, so the path is obtained once per
/// expansion and passed around.
pub(crate) fn cs_reflect() -> syn::Result<syn::Path> {
    let manifest = cs_macro_utils::Manifest::load()?;
    Ok(manifest.get_crate_path("cs_reflect"))
}

// -----------------------------------------------------------------------------
// Prelude

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote! { ::core::result::Result }
}

#[inline(always)]
pub(crate) fn box_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::__macro_exports::Box }
}

// -----------------------------------------------------------------------------
// Reflection

#[inline(always)]
pub(crate) fn reflect_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::Reflect }
}

// -----------------------------------------------------------------------------
// Info

#[inline(always)]
pub(crate) fn type_path_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn reflect_kind_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::ReflectKind }
}

#[inline(always)]
pub(crate) fn struct_info_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn opaque_info_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::OpaqueInfo }
}

#[inline(always)]
pub(crate) fn named_field_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::NamedField }
}

#[inline(always)]
pub(crate) fn field_tags_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::FieldTags }
}

#[inline(always)]
pub(crate) fn visibility_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::info::Visibility }
}

// -----------------------------------------------------------------------------
// Ops

#[inline(always)]
pub(crate) fn struct_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::ops::StructFieldIter }
}

#[inline(always)]
pub(crate) fn reflect_ref_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn reflect_mut_(cs_reflect_path: &syn::Path) -> TokenStream {
    quote! { #cs_reflect_path::ops::ReflectMut }
}
