use core::any::Any;

use crate::info::{FieldTags, Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Whether a field belongs to the exported surface of its struct.
///
/// The derive macro maps `pub` fields to [`Public`](Visibility::Public)
/// and every other visibility, `pub(crate)` included, to
/// [`Private`](Visibility::Private). `#[reflect(export)]` and
/// `#[reflect(hidden)]` override the mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// ```
/// use cs_reflect::{derive::Reflect, info::{Typed, Visibility}};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(tag(flag = "a"))]
///     pub field_a: f32,
///     field_b: u8,
/// }
///
/// let info = Foo::type_info();
/// let info = info.as_struct().unwrap();
///
/// let a = info.field_at(0).unwrap();
/// assert!(a.type_is::<f32>());
/// assert_eq!(a.name(), "field_a");
/// assert!(a.is_exported());
/// assert_eq!(a.tags().get("flag"), "a");
///
/// let b = info.field("field_b").unwrap();
/// assert_eq!(b.visibility(), Visibility::Private);
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty: Type,
    // Field info is only built when asked for.
    type_info: fn() -> TypeInfo,
    visibility: Visibility,
    tags: FieldTags,
}

impl NamedField {
    /// Creates a public, untagged [`NamedField`] for the field `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            visibility: Visibility::Public,
            tags: FieldTags::EMPTY,
        }
    }

    /// Replaces the visibility.
    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Replaces the tags.
    #[inline]
    pub const fn with_tags(mut self, tags: FieldTags) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the given type matches the field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> TypeInfo {
        (self.type_info)()
    }

    /// Returns the field visibility.
    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the field is part of the exported surface.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// Returns the field tags.
    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }
}
