use crate::Reflect;
use crate::impls::impl_reflect_for_map;
use crate::info::Typed;

impl_reflect_for_map!(
    impl<K, V> ::alloc::collections::BTreeMap<K, V>
    where {
        K: Reflect + Typed + Ord,
        V: Reflect + Typed,
    }
);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn lookup_by_key() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_u32);
        map.insert(String::from("b"), 2_u32);

        let key = String::from("b");
        *Map::get_mut(&mut map, &key)
            .unwrap()
            .downcast_mut::<u32>()
            .unwrap() = 20;
        assert_eq!(map["b"], 20);

        assert!(Map::get(&map, &1_u32).is_none());
        assert_eq!(Map::len(&map), 2);
        assert_eq!(format!("{:?}", map.as_reflect()), r#"{"a": 1, "b": 20}"#);

        let info = <BTreeMap<String, u32>>::type_info();
        assert!(info.as_map().unwrap().value_ty().is::<u32>());
    }
}
