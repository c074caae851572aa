use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List trait

/// Access to an ordered sequence.
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ListItemIter<'_>;

    /// Iterates over mutable elements in order.
    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Reflect> + '_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// Iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
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
        let hint = self.list.len() - self.index;
        (hint, Some(hint))
    }
}

impl FusedIterator for ListItemIter<'_> {}

impl ExactSizeIterator for ListItemIter<'_> {}
