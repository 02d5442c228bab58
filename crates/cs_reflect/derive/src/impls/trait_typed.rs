use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`
///
/// For param `type_info_tokens`, See the `to_info_tokens` of [`ReflectMeta`] and [`ReflectStruct`].
///
/// [`ReflectStruct`]: crate::derive_data::ReflectStruct
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let cs_reflect_path = meta.cs_reflect_path();
    let typed_ = crate::path::typed_(cs_reflect_path);
    let type_info_ = crate::path::type_info_(cs_reflect_path);

    let self_ty = meta.self_ty();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #typed_ for #self_ty #ty_generics #where_clause {
            fn type_info() -> #type_info_ {
                #type_info_tokens
            }
        }
    }
}
