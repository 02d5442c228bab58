//! Field tag parsing.
//!
//! Tags are declared with `#[reflect(tag(key = "value", ...))]` and stored
//! in [`FieldTags`](crate::info::FieldTags). A value is read either as one
//! trimmed string ([`get_struct_field_tag`]) or as a list
//! ([`get_struct_field_tag_slice`]), where `"[a, 'b']"` holds two items.

// -----------------------------------------------------------------------------
// Modules

mod field;
mod list;

// -----------------------------------------------------------------------------
// Exports

pub use field::{get_struct_field_tag, get_struct_field_tag_slice};
pub use list::{TagList, TagShape};
