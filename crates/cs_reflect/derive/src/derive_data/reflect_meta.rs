use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// Data shared by every kind of reflected type.
pub(crate) struct ReflectMeta {
    cs_reflect_path: Path,
    attrs: TypeAttributes,
    /// The type being implemented, without generics.
    self_ty: TokenStream,
    generics: Generics,
    /// Field types that need `Reflect + Typed` bounds, without duplicates.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("cs_reflect_path", &self.cs_reflect_path.to_token_stream())
            .field("self_ty", &self.self_ty)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl ReflectMeta {
    #[inline]
    pub fn new(
        cs_reflect_path: Path,
        attrs: TypeAttributes,
        self_ty: TokenStream,
        generics: Generics,
    ) -> Self {
        Self {
            cs_reflect_path,
            attrs,
            self_ty,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Used for [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the active field types during initialization.
    pub(super) fn set_active_types<'a>(&mut self, types: impl IntoIterator<Item = &'a Type>) {
        for ty in types {
            if !self.active_types.contains(ty) {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn cs_reflect_path(&self) -> &Path {
        &self.cs_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn self_ty(&self) -> &TokenStream {
        &self.self_ty
    }

    /// Returns `true` if the type has type parameters.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Split generics for an impl block.
    ///
    /// For generic types the where clause is extended with:
    /// - `T: Send + Sync + 'static` for each type parameter;
    /// - `F: Reflect + Typed` for each active field type;
    /// - `Self: Debug` if `debug_bound` is `true`.
    pub fn split_generics(
        &self,
        debug_bound: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let reflect_ = crate::path::reflect_(&self.cs_reflect_path);
        let typed_ = crate::path::typed_(&self.cs_reflect_path);

        let mut predicates: Vec<TokenStream> = where_clause
            .map(|clause| clause.predicates.iter().map(ToTokens::to_token_stream).collect())
            .unwrap_or_default();

        predicates.extend(self.generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: ::core::marker::Send + ::core::marker::Sync + 'static)
        }));

        predicates.extend(
            self.active_types
                .iter()
                .map(|ty| quote!(#ty: #reflect_ + #typed_)),
        );

        if debug_bound {
            predicates.push(quote!(Self: ::core::fmt::Debug));
        }

        (impl_generics, ty_generics, quote!(where #(#predicates,)*))
    }

    /// Generate type info codes for an opaque type
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Opaque(_path_::OpaqueInfo::new::<Self>())
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let type_info_ = crate::path::type_info_(&self.cs_reflect_path);
        let opaque_info_ = crate::path::opaque_info_(&self.cs_reflect_path);

        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
        }
    }
}
