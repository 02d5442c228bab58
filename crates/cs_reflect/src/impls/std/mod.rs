use crate::Reflect;
use crate::derive::impl_reflect_opaque;
use crate::impls::impl_reflect_for_map;
use crate::info::Typed;

impl_reflect_opaque!(::std::path::PathBuf);
impl_reflect_opaque!(::std::ffi::OsString);

impl_reflect_for_map!(
    impl<K, V, S> ::std::collections::HashMap<K, V, S>
    where {
        K: Reflect + Typed + Eq + ::core::hash::Hash,
        V: Reflect + Typed,
        S: ::core::hash::BuildHasher + Send + Sync + 'static,
    }
);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::collections::HashMap;
    use std::path::PathBuf;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Map;

    #[test]
    fn hash_map_and_path() {
        let mut map: HashMap<String, PathBuf> = HashMap::new();
        map.insert("home".into(), PathBuf::from("/root"));

        assert_eq!(map.reflect_kind(), ReflectKind::Map);
        let key = String::from("home");
        let value = Map::get(&map, &key).unwrap();
        assert_eq!(value.downcast_ref::<PathBuf>(), Some(&PathBuf::from("/root")));

        let info = <HashMap<String, PathBuf>>::type_info();
        assert!(info.as_map().unwrap().key_ty().is::<String>());
        assert_eq!(PathBuf::type_info().kind(), ReflectKind::Opaque);
    }
}
