//! Kind-specific interfaces for data access.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], one per [`ReflectKind`]:
//!
//! - [`Struct`]: For named structs (e.g. `A { .. }`).
//! - [`List`]: For list-like values (e.g. `Vec<i32>`) and arrays (e.g. `[i32; 5]`).
//! - [`Map`]: For map-like values (e.g. `BTreeMap<String, i32>`).
//! - [`Pointer`]: For values referring to another value (e.g. `Box<T>`, `Option<T>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] select the view of a value.
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
