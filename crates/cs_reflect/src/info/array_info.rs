use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::List;

// -----------------------------------------------------------------------------
// ArrayInfo

/// Container for compile-time fixed-size array info, such as `[T; N]`.
///
/// ```
/// use cs_reflect::info::Typed;
///
/// let info = <[u8; 4]>::type_info();
/// let info = info.as_array().unwrap();
///
/// assert_eq!(info.capacity(), 4);
/// assert!(info.item_ty().is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub const fn new<TArray: List + TypePath, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
            capacity,
        }
    }

    /// Returns the array length.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
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
