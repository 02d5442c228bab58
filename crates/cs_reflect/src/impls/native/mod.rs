use crate::derive::impl_reflect_opaque;

// bool, char, u8 - u128, i8 - i128, usize, isize, f32, f64
impl_reflect_opaque!(bool);
impl_reflect_opaque!(char);
impl_reflect_opaque!(u8);
impl_reflect_opaque!(u16);
impl_reflect_opaque!(u32);
impl_reflect_opaque!(u64);
impl_reflect_opaque!(u128);
impl_reflect_opaque!(usize);
impl_reflect_opaque!(i8);
impl_reflect_opaque!(i16);
impl_reflect_opaque!(i32);
impl_reflect_opaque!(i64);
impl_reflect_opaque!(i128);
impl_reflect_opaque!(isize);
impl_reflect_opaque!(f32);
impl_reflect_opaque!(f64);

// &'static str
impl_reflect_opaque!(&'static str);

// [T; N]
mod native_array;

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(<u8 as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<&'static str as TypePath>::type_path(), "&str");

        let mut value = 1.5_f64;
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert!(value.reflect_mut().as_opaque().is_ok());
        assert_eq!(format!("{:?}", value.as_reflect()), "1.5");
    }
}
