//! Built-in implementations and helpers for implementing reflection traits.
//!
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - basic (opaque):
//!     - `bool`, `char`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `&'static str`
//!     - `[T; N]` (array)
//! - core:
//!     - `Option<T>` (nullable pointer)
//! - alloc:
//!     - `String` (opaque)
//!     - `Vec<T>` (list)
//!     - `Box<T>` (pointer)
//!     - `BTreeMap<K, V>` (map)
//! - std: ("std" feature)
//!     - `OsString`, `PathBuf` (opaque)
//!     - `HashMap<K, V, S>` (map)
//!
//! Other types can be declared opaque with
//! [`#[derive(Reflect)]`](crate::derive::Reflect) and `#[reflect(Opaque)]`.
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod native;

#[cfg(feature = "std")]
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use utils::*;
