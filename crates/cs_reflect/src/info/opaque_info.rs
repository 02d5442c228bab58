use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Container for compile-time opaque type info.
///
/// Opaque types, such as `u8` or `String`, are handled as a whole and
/// expose no inner structure.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
