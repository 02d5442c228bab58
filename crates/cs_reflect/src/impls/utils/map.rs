// -----------------------------------------------------------------------------
// For map-like containers

/// Implement `TypePath`, `Typed`, `Map` and `Reflect` for a map type
/// whose key and value parameters are named `K` and `V`.
macro_rules! impl_reflect_for_map {
    (impl<$($param:ident),*> $ty:ty where { $($bounds:tt)* }) => {
        impl<$($param),*> $crate::info::TypePath for $ty where $($bounds)* {}

        impl<$($param),*> $crate::info::Typed for $ty
        where
            $($bounds)*
        {
            fn type_info() -> $crate::info::TypeInfo {
                $crate::info::TypeInfo::Map($crate::info::MapInfo::new::<Self, K, V>())
            }
        }

        impl<$($param),*> $crate::ops::Map for $ty
        where
            $($bounds)*
        {
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                let key = key.downcast_ref::<K>()?;
                Self::get(self, key).map(|value| value as &dyn $crate::Reflect)
            }

            fn get_mut(&mut self, key: &dyn $crate::Reflect) -> Option<&mut dyn $crate::Reflect> {
                let key = key.downcast_ref::<K>()?;
                Self::get_mut(self, key).map(|value| value as &mut dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> $crate::ops::MapIter<'_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(key, value)| {
                    (key as &dyn $crate::Reflect, value as &dyn $crate::Reflect)
                }))
            }
        }

        impl<$($param),*> $crate::Reflect for $ty
        where
            $($bounds)*
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);
        }
    };
}

pub(crate) use impl_reflect_for_map;
