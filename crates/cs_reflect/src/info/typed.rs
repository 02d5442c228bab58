use crate::info::{Type, TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// The returned value is built on every call, nothing is cached.
///
/// ```
/// use cs_reflect::{derive::Reflect, info::{Typed, ReflectKind}};
///
/// #[derive(Reflect)]
/// struct A {
///     pub value: i32,
/// }
///
/// let info = <A as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Struct);
/// ```
///
/// Manual implementation:
///
/// ```
/// use cs_reflect::info::{NamedField, StructInfo, TypeInfo, TypePath, Typed};
/// # use cs_reflect::{Reflect, ops::{ReflectMut, ReflectRef, Struct, StructFieldIter}, info::ReflectKind};
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// impl TypePath for Point {}
///
/// impl Typed for Point {
///     fn type_info() -> TypeInfo {
///         TypeInfo::Struct(StructInfo::new::<Self>(&[
///             NamedField::new::<f32>("x"),
///             NamedField::new::<f32>("y"),
///         ]))
///     }
/// }
/// # impl Struct for Point {
/// #     fn field(&self, name: &str) -> Option<&dyn Reflect> { None }
/// #     fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> { None }
/// #     fn field_at(&self, index: usize) -> Option<&dyn Reflect> { None }
/// #     fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> { None }
/// #     fn name_at(&self, index: usize) -> Option<&str> { None }
/// #     fn field_len(&self) -> usize { 0 }
/// #     fn iter_fields(&self) -> StructFieldIter<'_> { StructFieldIter::new(self) }
/// # }
/// # impl Reflect for Point {
/// #     fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
/// #         *self = value.take::<Self>()?;
/// #         Ok(())
/// #     }
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Struct }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Struct(self) }
/// # }
///
/// let info = Point::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 2);
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time [info] for the underlying type.
    ///
    /// [info]: TypeInfo
    fn type_info() -> TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Automatically implemented for every `T: Typed`, it should never be
/// implemented manually. It is a supertrait of [`Reflect`](crate::Reflect),
/// so any `dyn Reflect` can report what it is.
///
/// ```
/// use cs_reflect::{Reflect, info::DynamicTyped};
///
/// let value: &dyn Reflect = &vec![1_u8];
/// assert_eq!(value.reflect_type().name(), "Vec<u8>");
/// assert!(value.reflect_type_info().as_list().is_ok());
/// ```
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> TypeInfo;

    /// Returns the [`Type`] of the underlying value.
    fn reflect_type(&self) -> Type;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> TypeInfo {
        T::type_info()
    }

    #[inline]
    fn reflect_type(&self) -> Type {
        Type::of::<T>()
    }
}
