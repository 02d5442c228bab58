use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Ident};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// StructField

/// A reflected (not ignored) named field.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
    /// Index among the reflected fields.
    pub index: usize,
}

impl StructField<'_> {
    /// The field name without the `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// `pub` fields are exported unless `hidden`, others only with `export`.
    pub fn is_exported(&self) -> bool {
        self.attrs
            .export
            .unwrap_or(matches!(self.data.vis, syn::Visibility::Public(_)))
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A named struct, with the ignored fields already removed.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta, fields: Vec<StructField<'a>>) -> Self {
        meta.set_active_types(fields.iter().map(|field| &field.data.ty));
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta {
        &self.meta
    }

    #[inline]
    pub fn active_fields(&self) -> core::slice::Iter<'_, StructField<'a>> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Generate type info codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(_path_::StructInfo::new::<Self>(&[
    ///     _path_::NamedField::new::<FieldTy>("name")
    ///         .with_visibility(_path_::Visibility::Public)
    ///         .with_tags(...),
    ///     ...
    /// ]))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let cs_reflect_path = self.meta.cs_reflect_path();
        let type_info_ = crate::path::type_info_(cs_reflect_path);
        let struct_info_ = crate::path::struct_info_(cs_reflect_path);
        let named_field_ = crate::path::named_field_(cs_reflect_path);
        let visibility_ = crate::path::visibility_(cs_reflect_path);

        let fields = self.fields.iter().map(|field| {
            let name = field.name();
            let ty = &field.data.ty;
            let visibility = if field.is_exported() {
                quote!(#visibility_::Public)
            } else {
                quote!(#visibility_::Private)
            };
            let with_tags = field.attrs.with_tags_expression(cs_reflect_path);

            quote! {
                #named_field_::new::<#ty>(#name)
                    .with_visibility(#visibility)
                    #with_tags
            }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[
                #(#fields),*
            ]))
        }
    }
}
