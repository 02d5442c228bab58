use core::fmt;

use crate::ops::{List, Map, Pointer, Struct};

/// A function use for implementing [`Reflect::reflect_debug`] for structs.
///
/// Prints like the derived [`Debug`](fmt::Debug), with the type ident
/// as struct name.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type().ident());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        let name = dyn_struct.name_at(index).unwrap_or_default();
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for lists and arrays.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for maps.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for pointers.
///
/// The pointee is printed as is, a null pointer prints `None`.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => pointee.reflect_debug(f),
        None => f.write_str("None"),
    }
}
