use alloc::boxed::Box;

use crate::info::{NamedField, Type, TypePath};
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// StructInfo

/// Container for compile-time named struct info.
///
/// Field lookups scan the field list, there is no index.
///
/// ```
/// use cs_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     pub foo: u8,
///     pub bar: String,
/// }
///
/// let info = A::type_info();
/// let info = info.as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("bar"), Some(1));
/// assert!(info.field("baz").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`StructInfo`].
    ///
    /// The order of fields is the declaration order.
    pub fn new<T: TypePath + Struct>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the [`NamedField`] called `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the field called `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
