use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power map-like operations via reflection.
///
/// Keys are passed as `&dyn Reflect` and must have the exact key type,
/// any other key type finds nothing.
///
/// ```
/// use std::collections::BTreeMap;
/// use cs_reflect::{Reflect, ops::Map};
///
/// let mut env = BTreeMap::new();
/// env.insert(String::from("HOME"), String::from("/root"));
///
/// let map: &dyn Map = env.reflect_ref().as_map().unwrap();
/// let key = String::from("HOME");
///
/// assert_eq!(map.len(), 1);
/// assert!(map.get(&key).is_some());
/// assert!(map.get(&1_u8).is_none());
/// ```
pub trait Map: Reflect {
    /// Returns the value of `key`, if present.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the value of `key` mutably, if present.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there is no entry.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries, in the map's own order.
    fn iter(&self) -> MapIter<'_>;
}

/// An iterator over the `(key, value)` entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;
