use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;

// Only sized pointees, `Box<dyn Reflect>` is not itself reflected.

impl<T: Reflect + Typed> TypePath for Box<T> {}

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(PointerInfo::new::<Self, T>(false))
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self as &mut dyn Reflect)
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Pointer;

    #[test]
    fn box_is_a_pointer() {
        let mut boxed = Box::new(3_i32);
        assert_eq!(boxed.reflect_kind(), ReflectKind::Pointer);
        assert!(!boxed.is_null());
        assert_eq!(format!("{:?}", boxed.as_reflect()), "3");

        *boxed.pointee_mut().unwrap().downcast_mut::<i32>().unwrap() = 5;
        assert_eq!(*boxed, 5);

        let info = <Box<i32>>::type_info();
        let info = info.as_pointer().unwrap();
        assert!(!info.is_nullable());
        assert!(info.pointee_ty().is::<i32>());
    }
}
