use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via reflection.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for named
/// structs. Fields marked `#[reflect(ignore)]` are not reachable through
/// this trait.
///
/// Field lookups here ignore field visibility, see
/// [`access::get_struct_field`](crate::access::get_struct_field) for the
/// checked path.
///
/// ```
/// use cs_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let mut foo = Foo { a: 10, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("c").is_none());
///
/// if let Some(field) = foo.field_mut("a") {
///     *field.downcast_mut::<i32>().unwrap() = 42;
/// }
/// assert_eq!(foo.a, 42);
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
pub trait Struct: Reflect {
    /// Returns the field named `name`, or `None` if it does not exist.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, or `None` if it does not exist.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`, or `None` if out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably, or `None` if out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`, or `None` if out of bounds.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns the field named `name` downcast to `T`.
    ///
    /// ```
    /// # use cs_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     a: i32,
    /// }
    ///
    /// let foo: &dyn Struct = &Foo { a: 3 };
    /// assert_eq!(foo.field_as::<i32>("a"), Some(&3));
    /// assert_eq!(foo.field_as::<u8>("a"), None);
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns the field named `name` mutably, downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
