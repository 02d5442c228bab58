use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ret:ty) => {
        /// Convert to the specific kind view, or fail with the actual kind.
        #[inline]
        pub fn $name(self) -> Result<$ret, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// Obtained from [`Reflect::reflect_ref`]. Arrays share the [`List`]
/// view and are distinguished by their variant.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_array: Array => &'a dyn List);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_pointer: Pointer => &'a dyn Pointer);
    impl_cast_method!(as_opaque: Opaque => &'a dyn Reflect);

    /// Returns the viewed value as a plain `&dyn Reflect`.
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) | Self::Array(value) => value,
            Self::Map(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
///
/// Obtained from [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(as_list: List => &'a mut dyn List);
    impl_cast_method!(as_array: Array => &'a mut dyn List);
    impl_cast_method!(as_map: Map => &'a mut dyn Map);
    impl_cast_method!(as_pointer: Pointer => &'a mut dyn Pointer);
    impl_cast_method!(as_opaque: Opaque => &'a mut dyn Reflect);

    /// Returns the viewed value as a plain `&mut dyn Reflect`.
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) | Self::Array(value) => value,
            Self::Map(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn cast_views() {
        let list = vec![1_u8];
        let view = list.reflect_ref();
        assert_eq!(view.kind(), ReflectKind::List);
        assert!(view.as_list().is_ok());

        let err = view.as_struct().err().unwrap();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::List);

        let array = [1_u8, 2];
        assert_eq!(array.reflect_ref().as_array().unwrap().len(), 2);
    }

    #[test]
    fn into_reflect_keeps_the_value() {
        let mut boxed = Box::new(5_i32);
        let value = boxed.reflect_mut().into_reflect();
        assert!(value.is::<Box<i32>>());
    }
}
