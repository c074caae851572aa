use alloc::boxed::Box;

use crate::Reflect;

/// Access to a key/value map.
///
/// Iteration order is the map's own order (sorted for `BTreeMap`).
pub trait Map: Reflect {
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Iterates over entries with mutable values.
    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&dyn Reflect, &mut dyn Reflect)> + '_>;
}
