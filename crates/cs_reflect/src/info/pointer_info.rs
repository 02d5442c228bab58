use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;

// -----------------------------------------------------------------------------
// PointerInfo

/// Container for compile-time pointer info, such as `Box<T>` or `Option<T>`.
///
/// A nullable pointer may have no pointee at runtime.
///
/// ```
/// use cs_reflect::info::Typed;
///
/// let info = <Option<String>>::type_info();
/// let info = info.as_pointer().unwrap();
///
/// assert!(info.is_nullable());
/// assert!(info.pointee_ty().is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_ty: Type,
    pointee_info: fn() -> TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new<TPointer: Pointer + TypePath, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_ty: Type::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    /// Returns `true` if a value of this type may point to nothing.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the pointee [`Type`].
    #[inline]
    pub const fn pointee_ty(&self) -> &Type {
        &self.pointee_ty
    }

    /// Returns the pointee [`TypeInfo`].
    #[inline]
    pub fn pointee_info(&self) -> TypeInfo {
        (self.pointee_info)()
    }
}
