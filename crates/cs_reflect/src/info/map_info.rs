use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::Map;

// -----------------------------------------------------------------------------
// MapInfo

/// Container for compile-time map info, such as `BTreeMap<K, V>`.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    key_info: fn() -> TypeInfo,
    value_ty: Type,
    value_info: fn() -> TypeInfo,
}

impl MapInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: Map + TypePath, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_ty: Type::of::<TKey>(),
            key_info: TKey::type_info,
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the key [`Type`].
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the key [`TypeInfo`].
    #[inline]
    pub fn key_info(&self) -> TypeInfo {
        (self.key_info)()
    }

    /// Returns the value [`Type`].
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the value [`TypeInfo`].
    #[inline]
    pub fn value_info(&self) -> TypeInfo {
        (self.value_info)()
    }
}
