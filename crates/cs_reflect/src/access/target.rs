use alloc::string::String;

use crate::Reflect;
use crate::info::Type;

// -----------------------------------------------------------------------------
// Target

/// A value handed to the [`access`](crate::access) helpers.
///
/// Only a [`Mut`](Target::Mut) target can have its fields written, a
/// [`Ref`](Target::Ref) target is readable through the [`Reflect`] views
/// but every setter rejects it.
///
/// ```
/// use cs_reflect::access::Target;
///
/// let mut value = 1_u8;
/// assert!(!Target::from(&value).is_mut());
/// assert!(Target::from(&mut value).is_mut());
/// ```
pub enum Target<'a> {
    Ref(&'a dyn Reflect),
    Mut(&'a mut dyn Reflect),
}

impl Target<'_> {
    /// Returns the target as a shared reference.
    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        match self {
            Self::Ref(value) => *value,
            Self::Mut(value) => &**value,
        }
    }

    /// Returns `true` if the target was supplied mutably.
    #[inline]
    pub const fn is_mut(&self) -> bool {
        matches!(self, Self::Mut(_))
    }

    /// Returns the [`Type`] of the target.
    #[inline]
    pub fn ty(&self) -> Type {
        self.as_reflect().reflect_type()
    }

    /// Returns the short type name of the target.
    #[inline]
    pub fn type_name(&self) -> String {
        self.ty().name()
    }
}

impl<'a, T: Reflect> From<&'a T> for Target<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::Ref(value)
    }
}

impl<'a, T: Reflect> From<&'a mut T> for Target<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Mut(value)
    }
}

impl<'a> From<&'a dyn Reflect> for Target<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::Ref(value)
    }
}

impl<'a> From<&'a mut dyn Reflect> for Target<'a> {
    #[inline]
    fn from(value: &'a mut dyn Reflect) -> Self {
        Self::Mut(value)
    }
}
