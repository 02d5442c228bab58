use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power list-like operations via reflection.
///
/// Implemented for `Vec<T>` (kind [`List`](crate::info::ReflectKind::List))
/// and `[T; N]` (kind [`Array`](crate::info::ReflectKind::Array)).
/// Elements can be read and replaced in place, the length cannot change.
///
/// ```
/// use cs_reflect::{Reflect, ops::List};
///
/// let mut items = vec![1_u8, 2, 3];
/// let list: &mut dyn List = items.reflect_mut().as_list().unwrap();
///
/// *list.get_mut(1).unwrap().downcast_mut::<u8>().unwrap() = 20;
/// assert_eq!(list.len(), 3);
/// assert_eq!(items, [1, 20, 3]);
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there is no item.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
