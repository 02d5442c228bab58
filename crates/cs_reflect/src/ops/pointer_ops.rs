use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A value that may refer to another value.
///
/// Implemented for `Box<T>`, which always has a pointee, and `Option<T>`,
/// where `None` stands for a null pointer. The indirection helpers in
/// [`access`](crate::access) follow these until a non-pointer is reached.
///
/// ```
/// use cs_reflect::{Reflect, ops::Pointer};
///
/// let value: Option<Box<u8>> = Some(Box::new(3));
/// let ptr: &dyn Pointer = value.reflect_ref().as_pointer().unwrap();
///
/// assert!(!ptr.is_null());
/// assert!(ptr.pointee().unwrap().is::<Box<u8>>());
///
/// let none: Option<u8> = None;
/// assert!(none.reflect_ref().as_pointer().unwrap().is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` for a null pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` for a null pointer.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` if there is no pointee.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
