use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

macro_rules! impl_reflect_for_map {
    ($ty:ident < K, V $(, $s:ident: [$($hash_bound:tt)*])? >, $module:literal, K: [$($key_bound:tt)*]) => {
        impl<K: TypePath, V: TypePath $(, $s: 'static)?> TypePath for $ty<K, V $(, $s)?> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", K::type_path(), ", ", V::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[stringify!($ty), "<", K::type_name(), ", ", V::type_name(), ">"])
                })
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

        impl<K, V $(, $s)?> Typed for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
            $($s: $($hash_bound)* + Send + Sync + 'static,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
            $($s: $($hash_bound)* + Send + Sync + 'static,)?
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
            $($s: $($hash_bound)* + Send + Sync + 'static,)?
        {
            #[inline]
            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                <$ty<K, V $(, $s)?>>::get(self, key).map(|value| value as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                <$ty<K, V $(, $s)?>>::get_mut(self, key).map(|value| value as &mut dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<K, V $(, $s)?>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    <$ty<K, V $(, $s)?>>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            fn iter_mut(
                &mut self,
            ) -> Box<dyn Iterator<Item = (&dyn Reflect, &mut dyn Reflect)> + '_> {
                Box::new(
                    <$ty<K, V $(, $s)?>>::iter_mut(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &mut dyn Reflect)),
                )
            }
        }

        impl<K, V $(, $s)?> GetTypeMeta for $ty<K, V $(, $s)?>
        where
            K: Reflect + GetTypeMeta + $($key_bound)*,
            V: Reflect + GetTypeMeta,
            $($s: $($hash_bound)* + Default + Send + Sync + 'static,)?
        {
            fn get_type_meta() -> TypeMeta {
                let mut type_meta = TypeMeta::with_capacity::<Self>(1);
                type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                type_meta
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    };
}

impl_reflect_for_map!(BTreeMap<K, V>, "alloc::collections", K: [Ord]);

mod std_impl {
    use super::*;
    use std::collections::HashMap;

    impl_reflect_for_map!(HashMap<K, V, S: [BuildHasher]>, "std::collections", K: [Hash + Eq]);
}

mod hashbrown_impl {
    use super::*;
    use wr_utils::hash::hashbrown::HashMap;

    impl_reflect_for_map!(HashMap<K, V, S: [BuildHasher]>, "hashbrown", K: [Hash + Eq]);
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{ReflectRef, Scalar};

    #[test]
    fn btree_map_lookup() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_u8);
        map.insert(String::from("b"), 2_u8);

        let ReflectRef::Map(dyn_map) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(dyn_map.len(), 2);

        let key = String::from("b");
        let value = dyn_map.get(&key).unwrap();
        assert_eq!(value.reflect_ref().as_scalar().unwrap(), Scalar::UInt(2));
        assert!(dyn_map.get(&3_u8).is_none());
    }

    #[test]
    fn map_paths() {
        assert_eq!(
            <BTreeMap<String, i64>>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, i64>",
        );
        let info = <BTreeMap<u8, bool>>::type_info().as_map().unwrap();
        assert!(info.key_ty().is::<u8>());
        assert!(info.value_ty().is::<bool>());
    }

    #[test]
    fn hash_maps_are_maps() {
        let mut map: wr_utils::hash::HashMap<u32, String> = wr_utils::hash::HashMap::default();
        map.insert(1_u32, String::from("one"));
        let value = match map.reflect_ref() {
            ReflectRef::Map(dyn_map) => dyn_map.get(&1_u32).unwrap(),
            _ => panic!("expected a map"),
        };
        assert_eq!(value.reflect_ref().as_scalar().unwrap(), Scalar::Str("one"));
        assert_eq!(
            <std::collections::HashMap<u8, u8>>::type_ident(),
            "HashMap",
        );
    }
}
