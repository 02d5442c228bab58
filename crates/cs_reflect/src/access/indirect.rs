use crate::Reflect;
use crate::info::TypeInfo;
use crate::ops::{ReflectMut, ReflectRef};

/// Follows pointers until a non-pointer value is reached.
///
/// Returns `None` if a null pointer is met on the way.
///
/// ```
/// use cs_reflect::access::indirect_value;
///
/// let value = Some(Box::new(7_u8));
/// let inner = indirect_value(&value).unwrap();
/// assert_eq!(inner.downcast_ref::<u8>(), Some(&7));
///
/// let none: Option<Box<u8>> = None;
/// assert!(indirect_value(&none).is_none());
///
/// // a non-pointer is returned as is
/// assert!(indirect_value(&3_i32).unwrap().is::<i32>());
/// ```
pub fn indirect_value(value: &dyn Reflect) -> Option<&dyn Reflect> {
    let mut current = value;
    while let ReflectRef::Pointer(pointer) = current.reflect_ref() {
        current = pointer.pointee()?;
    }
    Some(current)
}

/// Follows pointers mutably until a non-pointer value is reached.
///
/// Returns `None` if a null pointer is met on the way.
///
/// ```
/// use cs_reflect::access::indirect_value_mut;
///
/// let mut value = Box::new(Box::new(1_u32));
/// *indirect_value_mut(&mut value).unwrap().downcast_mut::<u32>().unwrap() = 2;
/// assert_eq!(**value, 2);
/// ```
pub fn indirect_value_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    match value.reflect_mut() {
        ReflectMut::Pointer(pointer) => pointer.pointee_mut().and_then(indirect_value_mut),
        other => Some(other.into_reflect()),
    }
}

/// Strips pointer, list and array layers from a type until none remains.
///
/// Gives the element type behind `Option<Vec<Box<T>>>` and the like.
///
/// ```
/// use cs_reflect::{access::indirect_type, info::Typed};
///
/// let info = indirect_type(<Option<Vec<Box<String>>>>::type_info());
/// assert!(info.type_is::<String>());
///
/// let info = indirect_type(u8::type_info());
/// assert!(info.type_is::<u8>());
/// ```
pub fn indirect_type(mut info: TypeInfo) -> TypeInfo {
    loop {
        info = match &info {
            TypeInfo::Pointer(pointer) => pointer.pointee_info(),
            TypeInfo::List(list) => list.item_info(),
            TypeInfo::Array(array) => array.item_info(),
            _ => return info,
        };
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{indirect_type, indirect_value, indirect_value_mut};
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn value_through_layers() {
        let value: Option<Box<Option<u8>>> = Some(Box::new(Some(5)));
        assert_eq!(indirect_value(&value).unwrap().downcast_ref::<u8>(), Some(&5));

        let mut broken: Option<Box<Option<u8>>> = Some(Box::new(None));
        assert!(indirect_value(&broken).is_none());
        assert!(indirect_value_mut(&mut broken).is_none());
    }

    #[test]
    fn mutable_value_is_the_pointee() {
        let mut value: Box<String> = Box::new(String::from("a"));
        let inner = indirect_value_mut(&mut value).unwrap();
        inner.downcast_mut::<String>().unwrap().push('b');
        assert_eq!(*value, "ab");
    }

    #[test]
    fn type_stops_at_maps_and_structs() {
        let info = indirect_type(<Vec<[Option<u16>; 2]>>::type_info());
        assert!(info.type_is::<u16>());

        let info = indirect_type(<Box<BTreeMap<String, Vec<u8>>>>::type_info());
        assert_eq!(info.kind(), ReflectKind::Map);
    }
}
