//! Type capabilities consulted while rendering and collecting input.
//!
//! A capability is a trait registered per type in the [`TypeRegistry`], for
//! example with `#[reflect(type_trait = (ReflectLazyLoad, ReflectDisplay))]`.
//! [`Capabilities`] looks a capability up on the value's own type first and
//! then, for a non-empty pointer, on the pointee type.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::{error, fmt};

use wr_reflect::info::Typed;
use wr_reflect::ops::{ReflectMut, ReflectRef};
use wr_reflect::registry::{FromType, TypeRegistry, TypeTrait};
use wr_reflect::{Reflect, reflect_trait};

use crate::{InputError, Options, ResponseValue};

// -----------------------------------------------------------------------------
// Capability traits

/// Loads deferred data before the value is rendered.
///
/// The options are the ones in effect for this value, so an implementation
/// can decide which relations to join.
#[reflect_trait]
pub trait LazyLoad {
    fn lazy_load(&mut self, options: Option<&Options>);
}

/// Replaces the value with another one before it is rendered.
#[reflect_trait]
pub trait ResponseObjectCreator {
    fn response_object(&self) -> Box<dyn Reflect>;
}

/// Produces the rendered value directly, bypassing structural rendering.
#[reflect_trait]
pub trait ResponseValueCreator {
    fn response_value(&self, options: Option<&Options>) -> ResponseValue;
}

/// Relation name to link path, used by the response envelope.
#[reflect_trait]
pub trait RelatedLinker {
    fn related_links(&self) -> BTreeMap<String, String>;
}

/// Validates a raw input value on behalf of the field type.
///
/// Called on a default value of the field type.
#[reflect_trait]
pub trait InputValidator {
    fn validate_input(&self, input: &dyn Reflect) -> Result<(), InputError>;
}

/// Receives a raw input value, reporting whether it is acceptable.
///
/// Called on a default value of the field type.
#[reflect_trait]
pub trait RequestValueReceiver {
    fn receive(&mut self, input: &dyn Reflect) -> Result<(), InputError>;
}

// -----------------------------------------------------------------------------
// Standard traits

/// Casts `dyn Reflect` to `dyn Display` for types registered with this type trait.
#[derive(Clone)]
pub struct ReflectDisplay {
    get_func: fn(&dyn Reflect) -> Option<&dyn fmt::Display>,
}

impl ReflectDisplay {
    #[inline]
    pub fn get<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn fmt::Display> {
        (self.get_func)(value)
    }
}

impl<T: fmt::Display + Reflect + Typed> FromType<T> for ReflectDisplay {
    fn from_type() -> Self {
        Self {
            get_func: |value| {
                <dyn Reflect>::downcast_ref::<T>(value).map(|value| value as &dyn fmt::Display)
            },
        }
    }
}

/// Casts `dyn Reflect` to `dyn Error` for types registered with this type trait.
#[derive(Clone)]
pub struct ReflectError {
    get_func: fn(&dyn Reflect) -> Option<&dyn error::Error>,
}

impl ReflectError {
    #[inline]
    pub fn get<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn error::Error> {
        (self.get_func)(value)
    }
}

impl<T: error::Error + Reflect + Typed> FromType<T> for ReflectError {
    fn from_type() -> Self {
        Self {
            get_func: |value| {
                <dyn Reflect>::downcast_ref::<T>(value).map(|value| value as &dyn error::Error)
            },
        }
    }
}

// -----------------------------------------------------------------------------
// Capabilities

/// Capability lookups against a [`TypeRegistry`].
///
/// Every method returns `None` when the value does not have the capability.
#[derive(Clone, Copy)]
pub struct Capabilities<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> Capabilities<'r> {
    #[inline]
    pub const fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub const fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Finds `T` on the value's type, then on its pointee's type.
    ///
    /// Returns the type trait and the value it applies to.
    pub fn find<'v, T: TypeTrait>(
        &self,
        value: &'v dyn Reflect,
    ) -> Option<(&'r T, &'v dyn Reflect)> {
        if let Some(type_trait) = self.registry.get_type_trait::<T>(value.ty_id()) {
            return Some((type_trait, value));
        }

        let ReflectRef::Pointer(pointer) = value.reflect_ref() else {
            return None;
        };
        let pointee = pointer.get()?;
        let type_trait = self.registry.get_type_trait::<T>(pointee.ty_id())?;
        Some((type_trait, pointee))
    }

    /// The mutable version of [`find`](Self::find).
    ///
    /// A shared `Arc` has no mutable pointee, so only its own type is checked.
    pub fn find_mut<'v, T: TypeTrait>(
        &self,
        value: &'v mut dyn Reflect,
    ) -> Option<(&'r T, &'v mut dyn Reflect)> {
        if let Some(type_trait) = self.registry.get_type_trait::<T>(value.ty_id()) {
            return Some((type_trait, value));
        }

        let ReflectMut::Pointer(pointer) = value.reflect_mut() else {
            return None;
        };
        let pointee = pointer.get_mut()?;
        let type_trait = self.registry.get_type_trait::<T>(pointee.ty_id())?;
        Some((type_trait, pointee))
    }

    /// Runs the lazy-load capability, returning `true` if it ran.
    pub fn lazy_load(&self, value: &mut dyn Reflect, options: Option<&Options>) -> bool {
        let Some((reflect, target)) = self.find_mut::<ReflectLazyLoad>(value) else {
            return false;
        };
        match reflect.get_mut(target) {
            Some(loader) => {
                loader.lazy_load(options);
                true
            }
            None => false,
        }
    }

    pub fn response_object(&self, value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        let (reflect, target) = self.find::<ReflectResponseObjectCreator>(value)?;
        reflect.get(target).map(|creator| creator.response_object())
    }

    pub fn response_value(
        &self,
        value: &dyn Reflect,
        options: Option<&Options>,
    ) -> Option<ResponseValue> {
        let (reflect, target) = self.find::<ReflectResponseValueCreator>(value)?;
        reflect.get(target).map(|creator| creator.response_value(options))
    }

    /// The `Display` output of the value.
    pub fn display(&self, value: &dyn Reflect) -> Option<String> {
        let (reflect, target) = self.find::<ReflectDisplay>(value)?;
        reflect.get(target).map(|display| display.to_string())
    }

    /// The message of the value if its type is an error.
    pub fn error_message(&self, value: &dyn Reflect) -> Option<String> {
        let (reflect, target) = self.find::<ReflectError>(value)?;
        reflect.get(target).map(|error| error.to_string())
    }

    pub fn related_links(&self, value: &dyn Reflect) -> Option<BTreeMap<String, String>> {
        let (reflect, target) = self.find::<ReflectRelatedLinker>(value)?;
        reflect.get(target).map(|linker| linker.related_links())
    }

    pub fn validate_input(
        &self,
        value: &dyn Reflect,
        input: &dyn Reflect,
    ) -> Option<Result<(), InputError>> {
        let (reflect, target) = self.find::<ReflectInputValidator>(value)?;
        reflect.get(target).map(|validator| validator.validate_input(input))
    }

    pub fn receive(
        &self,
        value: &mut dyn Reflect,
        input: &dyn Reflect,
    ) -> Option<Result<(), InputError>> {
        let (reflect, target) = self.find_mut::<ReflectRequestValueReceiver>(value)?;
        reflect.get_mut(target).map(|receiver| receiver.receive(input))
    }
}

impl fmt::Debug for Capabilities<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("types", &self.registry.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use core::fmt;

    use wr_reflect::Reflect;
    use wr_reflect::registry::TypeRegistry;

    use super::{Capabilities, LazyLoad, ReflectDisplay, ReflectError, ReflectLazyLoad};
    use crate::Options;

    #[derive(Reflect, Default)]
    #[reflect(default, type_trait = (ReflectDisplay, ReflectLazyLoad))]
    pub struct Slug {
        pub text: String,
        pub loads: u32,
    }

    impl fmt::Display for Slug {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "slug:{}", self.text)
        }
    }

    impl LazyLoad for Slug {
        fn lazy_load(&mut self, _: Option<&Options>) {
            self.loads += 1;
        }
    }

    #[derive(Reflect, Debug)]
    #[reflect(type_trait = ReflectError)]
    pub struct Denied {
        pub reason: String,
    }

    impl fmt::Display for Denied {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "denied: {}", self.reason)
        }
    }

    impl core::error::Error for Denied {}

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Slug>();
        registry.register::<Denied>();
        registry
    }

    #[test]
    fn own_type_first() {
        let registry = registry();
        let caps = Capabilities::new(&registry);

        let slug = Slug { text: "a".into(), loads: 0 };
        assert_eq!(caps.display(&slug).as_deref(), Some("slug:a"));
        assert_eq!(caps.error_message(&slug), None);

        let denied = Denied { reason: "no".into() };
        assert_eq!(caps.error_message(&denied).as_deref(), Some("denied: no"));
    }

    #[test]
    fn through_one_pointer() {
        let registry = registry();
        let caps = Capabilities::new(&registry);

        let boxed: Box<Slug> = Box::new(Slug { text: "b".into(), loads: 0 });
        assert_eq!(caps.display(&boxed).as_deref(), Some("slug:b"));

        let mut maybe: Option<Slug> = Some(Slug::default());
        assert!(caps.lazy_load(&mut maybe, None));
        assert_eq!(maybe.as_ref().map(|slug| slug.loads), Some(1));

        let mut empty: Option<Slug> = None;
        assert!(!caps.lazy_load(&mut empty, None));
        assert_eq!(caps.display(&empty), None);
    }

    #[test]
    fn unregistered_types_have_nothing() {
        let caps_registry = TypeRegistry::new();
        let caps = Capabilities::new(&caps_registry);
        let slug = Slug::default();
        assert_eq!(caps.display(&slug), None);
        assert!(caps.response_value(&slug, None).is_none());
    }
}
