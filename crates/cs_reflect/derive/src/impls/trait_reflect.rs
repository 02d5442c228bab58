use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`
///
/// - `reflect_kind`: the variant name shared by `ReflectKind`, `ReflectRef` and `ReflectMut`.
/// - `reflect_debug_tokens`: a `reflect_debug` method, or nothing to keep the default.
/// - `debug_bound`: See [`ReflectMeta::split_generics`].
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind: TokenStream,
    reflect_debug_tokens: TokenStream,
    debug_bound: bool,
) -> TokenStream {
    let cs_reflect_path = meta.cs_reflect_path();
    let reflect_ = crate::path::reflect_(cs_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(cs_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(cs_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(cs_reflect_path);
    let box_ = crate::path::box_(cs_reflect_path);
    let result_ = crate::path::result_();

    let self_ty = meta.self_ty();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(debug_bound);

    quote! {
        impl #impl_generics #reflect_ for #self_ty #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> #result_<(), #box_<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #result_::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind(self)
            }

            #reflect_debug_tokens
        }
    }
}
