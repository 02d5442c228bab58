use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A stable, fully qualified name for a type.
///
/// The default implementation forwards to [`core::any::type_name`],
/// which is what the derive macro and the built-in implementations use.
/// `#[reflect(type_path = "...")]` overrides it for derived types.
///
/// ```
/// use cs_reflect::info::TypePath;
///
/// assert_eq!(<u8 as TypePath>::type_path(), "u8");
/// assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified path of this type.
    #[inline]
    fn type_path() -> &'static str {
        core::any::type_name::<Self>()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] plus a way to obtain its path.
///
/// Comparison and hashing use the [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns the fully qualified type path, e.g. `alloc::vec::Vec<u8>`.
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// Returns the type name with every module prefix removed,
    /// e.g. `Vec<String>` for `alloc::vec::Vec<alloc::string::String>`.
    ///
    /// ```
    /// use cs_reflect::info::Type;
    ///
    /// let ty = Type::of::<Option<Vec<String>>>();
    /// assert_eq!(ty.name(), "Option<Vec<String>>");
    /// ```
    pub fn name(&self) -> String {
        shorten_type_path(self.path())
    }

    /// Returns the type name without generics and module path,
    /// e.g. `Vec` for `alloc::vec::Vec<u8>`.
    pub fn ident(&self) -> &'static str {
        let path = self.path();
        let base = match path.find('<') {
            Some(index) => &path[..index],
            None => path,
        };
        last_segment(base)
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name())
    }
}

// -----------------------------------------------------------------------------
// Shorten

#[inline]
fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Drops the module prefix of every path segment in `path`.
fn shorten_type_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut start = 0;

    for (index, c) in path.char_indices() {
        if matches!(
            c,
            '<' | '>' | ',' | ' ' | '[' | ']' | '(' | ')' | ';' | '&' | '*'
        ) {
            out.push_str(last_segment(&path[start..index]));
            out.push(c);
            start = index + c.len_utf8();
        }
    }
    out.push_str(last_segment(&path[start..]));
    out
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the `Type` accessors for an info struct.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        /// Returns the fully qualified type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name without module prefixes.
        #[inline]
        pub fn type_name(&self) -> ::alloc::string::String {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{Type, shorten_type_path};

    #[test]
    fn shorten() {
        assert_eq!(shorten_type_path("u8"), "u8");
        assert_eq!(shorten_type_path("alloc::string::String"), "String");
        assert_eq!(
            shorten_type_path("std::collections::hash::map::HashMap<alloc::string::String, u8>"),
            "HashMap<String, u8>"
        );
        assert_eq!(shorten_type_path("[core::option::Option<u8>; 4]"), "[Option<u8>; 4]");
        assert_eq!(shorten_type_path("&str"), "&str");
        assert_eq!(shorten_type_path("dyn cs_reflect::Reflect"), "dyn Reflect");
    }

    #[test]
    fn identity() {
        let a = Type::of::<Vec<String>>();
        let b = Type::of::<Vec<String>>();
        assert_eq!(a, b);
        assert_ne!(a, Type::of::<Vec<u8>>());
        assert!(a.is::<Vec<String>>());
        assert_eq!(a.ident(), "Vec");
        assert_eq!(a.name(), "Vec<String>");
    }
}
