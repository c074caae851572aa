use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// Creates a `T::default()` behind `Box<dyn Reflect>`.
///
/// Added by `#[reflect(default)]`, and by the impls of `Option`, `Vec`,
/// maps, strings and scalars.
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Typed + Reflect> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || -> Box<dyn Reflect> { Box::<T>::default() },
        }
    }
}
