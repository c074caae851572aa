use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

macro_rules! impl_reflect_for_pointer {
    ($ty:ident, $module:literal, nullable: $nullable:literal) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(PointerInfo::new::<Self, T>($nullable))
                })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            impl_reflect_cast_fn!(Pointer);
        }
    };
}

impl_reflect_for_pointer!(Option, "core::option", nullable: true);
impl_reflect_for_pointer!(Box, "alloc::boxed", nullable: false);
impl_reflect_for_pointer!(Arc, "alloc::sync", nullable: false);

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut type_meta = TypeMeta::with_capacity::<Self>(1);
        type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        type_meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self as &mut dyn Reflect)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Box<T> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Arc

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    /// `None` while the value is shared.
    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Arc<T> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{ReflectMut, ReflectRef, Scalar};

    #[test]
    fn option_is_nullable() {
        let info = <Option<i32>>::type_info().as_pointer().unwrap();
        assert!(info.is_nullable());
        assert!(info.pointee_ty().is::<i32>());
        assert!(!<Box<i32>>::type_info().as_pointer().unwrap().is_nullable());
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
    }

    #[test]
    fn pointers_deref() {
        let none: Option<u8> = None;
        assert!(none.reflect_ref().as_pointer().unwrap().is_null());

        let boxed = Box::new(5_u8);
        let inner = boxed.reflect_ref().as_pointer().unwrap().get().unwrap();
        assert_eq!(inner.reflect_ref().as_scalar().unwrap(), Scalar::UInt(5));
    }

    #[test]
    fn shared_arc_is_read_only() {
        let mut arc = Arc::new(1_i64);
        let other = Arc::clone(&arc);
        let ReflectMut::Pointer(ptr) = arc.reflect_mut() else {
            panic!("expected a pointer");
        };
        assert!(ptr.get_mut().is_none());
        drop(other);

        let ReflectRef::Pointer(ptr) = arc.reflect_ref() else {
            panic!("expected a pointer");
        };
        assert!(ptr.get().is_some());
    }
}
