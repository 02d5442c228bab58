use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::List;

// -----------------------------------------------------------------------------
// ListInfo

/// Container for compile-time list-like info, such as `Vec<T>`.
///
/// ```
/// use cs_reflect::info::Typed;
///
/// let info = <Vec<u8>>::type_info();
/// let info = info.as_list().unwrap();
///
/// assert!(info.item_ty().is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> TypeInfo,
}

impl ListInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<TList: List + TypePath, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the item [`Type`].
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the item [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> TypeInfo {
        (self.item_info)()
    }
}
