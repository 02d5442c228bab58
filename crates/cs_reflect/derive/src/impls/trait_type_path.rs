use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation codes for `TypePath`
///
/// Without `#[reflect(type_path = "...")]` the default method is kept,
/// which reports [`core::any::type_name`].
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.cs_reflect_path());

    let body = match &meta.attrs().type_path {
        Some(path) => quote! {
            #[inline]
            fn type_path() -> &'static str {
                #path
            }
        },
        None => TokenStream::new(),
    };

    let self_ty = meta.self_ty();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #self_ty #ty_generics #where_clause {
            #body
        }
    }
}
