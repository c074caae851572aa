use crate::Reflect;

/// Access to one level of indirection.
///
/// `Option<T>` is the nullable pointer: `None` has no pointee.
/// `Arc<T>` only yields a mutable pointee while it is not shared.
pub trait Pointer: Reflect {
    fn get(&self) -> Option<&dyn Reflect>;

    fn get_mut(&mut self) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_null(&self) -> bool {
        self.get().is_none()
    }
}
