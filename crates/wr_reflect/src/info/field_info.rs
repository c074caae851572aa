use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldTags

/// The `key = "value"` tags attached to a field with `#[reflect(tag(...))]`.
///
/// ```ignore
/// #[reflect(tag(response = "full_name", db = "name", request = "name,optional"))]
/// pub name: String,
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTags(&'static [(&'static str, &'static str)]);

impl FieldTags {
    pub const EMPTY: Self = Self(&[]);

    #[inline]
    pub const fn new(tags: &'static [(&'static str, &'static str)]) -> Self {
        Self(tags)
    }

    /// Returns the value of the first tag named `key`.
    ///
    /// An explicitly empty tag (`db = ""`) is returned as `Some("")`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.0.iter().copied()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// The static description of a named struct field.
///
/// Besides the type, it records what the engine needs to walk a struct:
/// whether the field is `pub` ("visible"), whether it is embedded
/// (`#[reflect(embed)]`, its fields are merged into the parent) and its tags.
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    visible: bool,
    embedded: bool,
    tags: FieldTags,
}

impl NamedField {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            visible: true,
            embedded: false,
            tags: FieldTags::EMPTY,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[inline]
    pub const fn with_tags(mut self, tags: FieldTags) -> Self {
        self.tags = tags;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// The declared name, without any `r#` prefix.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// `true` for `pub` fields.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }
}
