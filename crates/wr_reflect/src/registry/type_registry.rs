use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use wr_utils::TypeIdMap;
use wr_utils::hash::HashMap;

use crate::info::TypeInfo;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The runtime table of [`TypeMeta`]s, keyed by [`TypeId`].
///
/// Registering a type also registers its dependencies, so registering the
/// root types of a response is enough.
///
/// # Examples
///
/// ```
/// use wr_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vec<u32>>();
///
/// let default = registry
///     .get_type_trait::<TypeTraitDefault>(core::any::TypeId::of::<Vec<u32>>())
///     .unwrap();
/// assert!(default.default().is::<Vec<u32>>());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(wr_utils::hash::FixedHashState),
        }
    }

    /// Creates a registry with the scalar types and `String`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry
    }

    // Returns `false` without calling `get_type_meta` if the type exists.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        let type_path_to_id = &mut self.type_path_to_id;
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            type_path_to_id.insert(meta.type_path(), type_id);
            meta
        })
    }

    /// Registers `T` and, the first time, its dependencies.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    #[inline]
    pub fn register_by_val<T: GetTypeMeta>(&mut self, _: &T) {
        self.register::<T>();
    }

    /// Adds the type trait `D` to `T`, registering `T` first if needed.
    ///
    /// This is how capabilities are attached to types that cannot carry
    /// `#[reflect(type_trait = ...)]`, such as foreign types.
    pub fn register_type_trait<T: GetTypeMeta, D: TypeTrait + FromType<T>>(&mut self) {
        self.register::<T>();
        if let Some(type_meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            type_meta.insert_trait(D::from_type());
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the type trait `T` of the type `type_id`.
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table
            .values()
            .filter_map(|item| item.get_trait::<T>().map(|t| (item, t)))
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`] for servers that render on several threads.
///
/// Renders only need [`read`](Self::read); registration takes the write lock.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeRegistry, TypeRegistryArc};
    use crate::info::TypePath;
    use crate::registry::TypeTraitDefault;
    use core::any::TypeId;

    #[test]
    fn registers_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Option<Vec<u8>>>();
        assert!(registry.contains(TypeId::of::<Option<Vec<u8>>>()));
        assert!(registry.contains(TypeId::of::<Vec<u8>>()));
        assert!(registry.contains(TypeId::of::<u8>()));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_by_path() {
        let registry = TypeRegistry::new();
        let meta = registry.get_with_type_path(<i64 as TypePath>::type_path()).unwrap();
        assert!(meta.type_is::<i64>());
        assert!(meta.has_trait::<TypeTraitDefault>());
    }

    #[test]
    fn type_trait_on_unregistered_type() {
        let mut registry = TypeRegistry::empty();
        registry.register_type_trait::<Vec<i32>, TypeTraitDefault>();
        assert!(registry.contains(TypeId::of::<Vec<i32>>()));
        assert!(
            registry
                .get_type_trait::<TypeTraitDefault>(TypeId::of::<Vec<i32>>())
                .is_some()
        );
    }

    #[test]
    fn shared_registry_across_threads() {
        let shared = TypeRegistryArc::default();
        shared.write().register::<Vec<String>>();

        let reader = shared.clone();
        let found = std::thread::spawn(move || reader.read().contains(TypeId::of::<String>()))
            .join()
            .unwrap();
        assert!(found);
        assert!(shared.read().contains(TypeId::of::<Vec<String>>()));
    }
}
