use core::fmt;

use crate::Reflect;
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;

// `None` is the null pointer.

impl<T: Reflect + Typed> TypePath for Option<T> {}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new::<Self, T>(true))
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn null_and_set() {
        let mut value: Option<u8> = None;
        assert!(value.is_null());
        assert_eq!(format!("{:?}", value.as_reflect()), "None");

        value.set(Some(4_u8).into_boxed_reflect()).unwrap();
        assert_eq!(value, Some(4));
        assert_eq!(format!("{:?}", value.as_reflect()), "Some(4)");

        *value.pointee_mut().unwrap().downcast_mut::<u8>().unwrap() = 9;
        assert_eq!(value, Some(9));
    }
}
