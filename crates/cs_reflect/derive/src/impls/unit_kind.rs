use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implement full reflect for unit struct.
///
/// Unit structs are opaque, but carry no data, so `Debug` is not required.
/// The value is printed with the default `Opaque(type_path)` form.
pub(crate) fn impl_unit(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, meta.to_info_tokens());
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque), TokenStream::new(), false);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
