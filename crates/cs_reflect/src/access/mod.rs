//! Field access through reflection.
//!
//! ## Menu
//!
//! - [`Target`]: a value supplied mutably or shared; only mutable targets can be written.
//! - [`get_struct_field`], [`set_struct_field`], [`set_struct_field_boxed`]:
//!   checked access to the exported fields of a struct, by name.
//! - [`indirect_value`], [`indirect_value_mut`]: follow pointers on values.
//! - [`indirect_type`]: strip pointer and container layers from a [`TypeInfo`].
//! - [`check_value`], [`should_be_struct`], [`is_struct_field_exported`]: validation.
//! - [`type_name`]: short type name of a value.
//!
//! Every lookup is a linear scan over the field descriptors,
//! nothing is cached between calls.
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod check;
mod field;
mod indirect;
mod target;

// -----------------------------------------------------------------------------
// Exports

pub use check::{check_value, is_struct_field_exported, should_be_struct, type_name};
pub use field::{get_struct_field, set_struct_field, set_struct_field_boxed};
pub use indirect::{indirect_type, indirect_value, indirect_value_mut};
pub use target::Target;
