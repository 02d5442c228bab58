use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself.
///
/// - `#[reflect(type_path = "...")]`
/// - `#[reflect(Opaque)]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub opaque: bool,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let path: LitStr = meta.value()?.parse()?;
                    if path.value().trim().is_empty() {
                        return Err(syn::Error::new(path.span(), "`type_path` cannot be empty"));
                    }
                    this.type_path = Some(path);
                    Ok(())
                } else if meta.path.is_ident("Opaque") {
                    this.opaque = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `type_path = \"...\"` or `Opaque`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a named field.
///
/// - `#[reflect(export)]`, `#[reflect(hidden)]`
/// - `#[reflect(ignore)]`
/// - `#[reflect(tag(key = "value", ...))]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `Some(true)` for `export`, `Some(false)` for `hidden`.
    pub export: Option<bool>,
    pub ignore: bool,
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("export") || meta.path.is_ident("hidden") {
                    let export = meta.path.is_ident("export");
                    match this.export {
                        Some(prev) if prev != export => {
                            Err(meta.error("`export` and `hidden` cannot be used together"))
                        }
                        _ => {
                            this.export = Some(export);
                            Ok(())
                        }
                    }
                } else if meta.path.is_ident("ignore") {
                    this.ignore = true;
                    Ok(())
                } else if meta.path.is_ident("tag") {
                    meta.parse_nested_meta(|tag| {
                        let key = tag.path.require_ident()?.unraw().to_string();
                        if this.tags.iter().any(|(k, _)| *k == key) {
                            return Err(tag.error(format!("duplicate tag `{key}`")));
                        }
                        let value: LitStr = tag.value()?.parse()?;
                        this.tags.push((key, value));
                        Ok(())
                    })
                } else {
                    Err(meta.error(
                        "unsupported field attribute, expected `export`, `hidden`, `ignore` or `tag(...)`",
                    ))
                }
            })?;
        }

        Ok(this)
    }

    /// Generate tags codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_tags(_path_::FieldTags::new(&[("key", "value"), ...]))
    /// ```
    ///
    /// Empty when the field has no tag.
    pub fn with_tags_expression(&self, cs_reflect_path: &syn::Path) -> TokenStream {
        if self.tags.is_empty() {
            return TokenStream::new();
        }

        let field_tags_ = crate::path::field_tags_(cs_reflect_path);
        let entries = self.tags.iter().map(|(key, value)| quote!((#key, #value)));

        quote! {
            .with_tags(#field_tags_::new(&[#(#entries),*]))
        }
    }
}
