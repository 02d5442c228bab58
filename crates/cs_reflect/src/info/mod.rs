//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining the fully qualified type path.
//! - [`Type`]: A `TypeId` plus the type path, with a short [`name`](Type::name).
//!
//! - [`TypeInfo`]: A enum of the following, one per [`ReflectKind`]:
//!     - [`StructInfo`]: named structs, with their [`NamedField`] list.
//!     - [`ListInfo`]: list-like types (e.g. `Vec<T>`), with the item type.
//!     - [`ArrayInfo`]: fixed-size arrays, with the item type and length.
//!     - [`MapInfo`]: maps, with key and value types.
//!     - [`PointerInfo`]: pointers (e.g. `Box<T>`, `Option<T>`), with the pointee type.
//!     - [`OpaqueInfo`]: everything handled as a whole (e.g. `u8`, `String`).
//!
//! - Field info:
//!     - [`NamedField`]: name, type, [`Visibility`] and [`FieldTags`] of a struct field.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod field_tags;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::{NamedField, Visibility};
pub use field_tags::FieldTags;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{Type, TypePath};
pub use typed::{DynamicTyped, Typed};
