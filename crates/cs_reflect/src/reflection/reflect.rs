use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime introspection.
///
/// A `Reflect` value can report its [type information], its [kind],
/// and hand out kind-specific views of itself ([`reflect_ref`] and
/// [`reflect_mut`]) so that callers can walk structs, follow pointers
/// and replace values without knowing the concrete type.
///
/// # Recommendations
///
/// Implement this trait with [the derive macro], which also implements
/// [`Typed`] and [`Struct`] for named structs.
///
/// ```
/// use cs_reflect::{Reflect, derive::Reflect, info::ReflectKind};
///
/// #[derive(Reflect)]
/// struct Options {
///     pub level: u8,
/// }
///
/// let value = Options { level: 3 };
/// assert_eq!(value.reflect_kind(), ReflectKind::Struct);
/// ```
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the id of the box, not of
/// the value inside it. Use [`Reflect::ty_id`] instead:
///
/// ```
/// # use cs_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Manual Implementation
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Kind(self)
/// }
/// ```
///
/// [type information]: crate::info::DynamicTyped
/// [kind]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [the derive macro]: crate::derive::Reflect
/// [`Typed`]: crate::info::Typed
/// [`Struct`]: crate::ops::Struct
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    ///
    /// ```
    /// use cs_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    ///
    /// ```
    /// use cs_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces this value with `value` if both have the same type.
    ///
    /// On mismatch the rejected value is handed back untouched.
    ///
    /// ```
    /// # use cs_reflect::Reflect;
    /// let mut x = 1_u32;
    ///
    /// assert!(x.set(7_u32.into_boxed_reflect()).is_ok());
    /// assert_eq!(x, 7);
    ///
    /// assert!(x.set(7_i64.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [kind](ReflectKind) of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view of this value.
    ///
    /// ```
    /// # use cs_reflect::{Reflect, ops::List};
    /// let vec = vec![1, 2, 3];
    /// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatter for the value.
    ///
    /// Opaque values write `Opaque(type_path)` unless the implementation
    /// forwards to [`Debug`](core::fmt::Debug), which the derived and
    /// built-in opaque implementations do.
    ///
    /// For the other kinds, see:
    /// - [`crate::impls::struct_debug`]
    /// - [`crate::impls::list_debug`]
    /// - [`crate::impls::map_debug`]
    /// - [`crate::impls::pointer_debug`]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) | ReflectRef::Array(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type().path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use cs_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// ```
    /// # use cs_reflect::Reflect;
    /// let mut x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// *x.downcast_mut::<i32>().unwrap() += 2;
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&12));
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// # use cs_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the kind-dependent methods `set`, `reflect_kind`,
/// `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn downcast() {
        let mut x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
        assert!(x.is::<u8>());
        assert!(!x.is::<i8>());
        assert!(x.downcast_ref::<i8>().is_none());

        *x.downcast_mut::<u8>().unwrap() = 12;

        let x = x.take::<String>().unwrap_err();
        assert_eq!(x.take::<u8>().unwrap(), 12);
    }

    #[test]
    fn set_rejects_other_types() {
        let mut x = String::from("a");
        let back = x.set(1_i32.into_boxed_reflect()).unwrap_err();
        assert!(back.is::<i32>());
        assert_eq!(x, "a");
    }

    #[test]
    fn debug_opaque_and_list() {
        let x: &dyn Reflect = &7_i32;
        assert_eq!(format!("{x:?}"), "7");

        let list: &dyn Reflect = &alloc::vec![1_u8, 2];
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }
}
