use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{DeriveInput, Generics};

use crate::derive_data::{ReflectDerive, ReflectMeta, TypeAttributes};

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attribute and fields infomation.
    let reflect_derive = match ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls: proc_macro2::TokenStream = match reflect_derive {
        ReflectDerive::Struct(info) => crate::impls::impl_struct(&info),
        ReflectDerive::UnitStruct(meta) => crate::impls::impl_unit(&meta),
        ReflectDerive::Opaque(meta) => crate::impls::impl_opaque(&meta),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}

/// Provided for `impl_reflect_opaque!`.
pub(crate) fn match_opaque_impls(ty: syn::Type) -> TokenStream {
    let cs_reflect_path = match crate::path::cs_reflect() {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let meta = ReflectMeta::new(
        cs_reflect_path,
        TypeAttributes::default(),
        ty.to_token_stream(),
        Generics::default(),
    );

    let reflect_impls = crate::impls::impl_opaque(&meta);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
