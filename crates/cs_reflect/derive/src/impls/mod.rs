// -----------------------------------------------------------------------------
// Modules

mod match_reflect;
mod opaque_kind;
mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;
mod unit_kind;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::{match_opaque_impls, match_reflect_impls};
pub(crate) use opaque_kind::impl_opaque;
pub(crate) use struct_kind::impl_struct;
pub(crate) use trait_reflect::impl_trait_reflect;
pub(crate) use trait_type_path::impl_trait_type_path;
pub(crate) use trait_typed::impl_trait_typed;
pub(crate) use unit_kind::impl_unit;
