use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    UnitStruct(ReflectMeta),
    Opaque(ReflectMeta),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse(&input.attrs)?;

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "reflected types must be `'static`, lifetime parameters are not supported",
            ));
        }

        if let Some(path) = &attrs.type_path
            && input.generics.type_params().next().is_some()
        {
            return Err(syn::Error::new(
                path.span(),
                "`type_path` is not supported on generic types",
            ));
        }

        let opaque = attrs.opaque;
        let meta = ReflectMeta::new(
            crate::path::cs_reflect()?,
            attrs,
            input.ident.to_token_stream(),
            input.generics.clone(),
        );

        if opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let mut active = Vec::with_capacity(fields.named.len());
                    for field in &fields.named {
                        let attrs = FieldAttributes::parse(&field.attrs)?;
                        if attrs.ignore {
                            if attrs.export.is_some() || !attrs.tags.is_empty() {
                                return Err(syn::Error::new(
                                    field.span(),
                                    "an ignored field cannot carry other `reflect` attributes",
                                ));
                            }
                            continue;
                        }
                        let Some(ident) = &field.ident else {
                            return Err(syn::Error::new(field.span(), "expected a named field"));
                        };
                        active.push(StructField {
                            data: field,
                            ident,
                            attrs,
                            index: active.len(),
                        });
                    }
                    Ok(Self::Struct(ReflectStruct::new(meta, active)))
                }
                Fields::Unit => Ok(Self::UnitStruct(meta)),
                Fields::Unnamed(_) => Err(syn::Error::new(
                    input.ident.span(),
                    "tuple structs are not reflected field by field, use `#[reflect(Opaque)]`",
                )),
            },
            Data::Enum(_) => Err(syn::Error::new(
                input.ident.span(),
                "enums are not reflected variant by variant, use `#[reflect(Opaque)]`",
            )),
            Data::Union(_) => Err(syn::Error::new(
                input.ident.span(),
                "unions are not supported, use `#[reflect(Opaque)]`",
            )),
        }
    }
}
