//! Rendering of reflected values into [`ResponseValue`] trees.
//!
//! The entry point is [`ResponseBuilder::create_response`]. Every value goes
//! through the same steps:
//!
//! 1. The lazy-load capability runs with the options in effect.
//! 2. A response-object substitute replaces the value.
//! 3. One pointer level is followed, an empty pointer renders as null.
//! 4. The value is rendered by kind. Struct fields, list items and map
//!    values go through [`render_value`](ResponseBuilder::render_value),
//!    which gives the value capabilities a chance to short-circuit.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use wr_reflect::Reflect;
use wr_reflect::info::{ReflectKind, StructInfo};
use wr_reflect::ops::{ReflectMut, ReflectRef};
use wr_reflect::registry::TypeRegistry;

use crate::capability::Capabilities;
use crate::nullable::{self, Nullable, NullableMut};
use crate::options::{self, Options};
use crate::schema::StructSchema;
use crate::value::{ResponseMap, ResponseValue};
use crate::RenderError;

// -----------------------------------------------------------------------------
// Constructor

/// Wraps a rendered sub-response, given the value it was rendered from.
///
/// Implemented for closures:
///
/// ```
/// use wr_reflect::Reflect;
/// use wr_respond::{Constructor, ResponseValue};
///
/// let wrap = |rendered: ResponseValue, _: &dyn Reflect| ResponseValue::List(vec![rendered]);
/// let wrapped = wrap.wrap(ResponseValue::from(1_i64), &0_u8);
/// assert_eq!(wrapped, ResponseValue::List(vec![ResponseValue::Int(1)]));
/// ```
pub trait Constructor {
    fn wrap(&self, rendered: ResponseValue, original: &dyn Reflect) -> ResponseValue;
}

impl<F> Constructor for F
where
    F: Fn(ResponseValue, &dyn Reflect) -> ResponseValue,
{
    #[inline]
    fn wrap(&self, rendered: ResponseValue, original: &dyn Reflect) -> ResponseValue {
        self(rendered, original)
    }
}

// -----------------------------------------------------------------------------
// Cursor

/// A value being rendered.
///
/// Values are visited mutably so that lazy loading can fill them in. A
/// shared `Arc` only hands out a read view, below which lazy loading is
/// skipped.
enum Cursor<'a> {
    Mut(&'a mut dyn Reflect),
    Ref(&'a dyn Reflect),
}

type Items<'a> = Box<dyn Iterator<Item = Cursor<'a>> + 'a>;
type Entries<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, Cursor<'a>)> + 'a>;

impl<'a> Cursor<'a> {
    #[inline]
    fn get(&self) -> &dyn Reflect {
        match self {
            Self::Mut(value) => &**value,
            Self::Ref(value) => *value,
        }
    }

    /// Follows one pointer level. `None` for an empty pointer.
    fn follow_pointer(self) -> Option<Cursor<'a>> {
        match self {
            Self::Mut(value) => {
                if value.reflect_kind() != ReflectKind::Pointer {
                    return Some(Self::Mut(value));
                }
                let pointer = value.reflect_mut().as_pointer().ok()?;
                if pointer.get_mut().is_some() {
                    pointer.get_mut().map(Self::Mut)
                } else {
                    pointer.get().map(Self::Ref)
                }
            }
            Self::Ref(value) => match value.reflect_ref() {
                ReflectRef::Pointer(pointer) => pointer.get().map(Self::Ref),
                _ => Some(Self::Ref(value)),
            },
        }
    }

    fn field_at(&mut self, index: usize) -> Option<Cursor<'_>> {
        match self {
            Self::Mut(value) => match value.reflect_mut() {
                ReflectMut::Struct(data) => data.field_at_mut(index).map(Cursor::Mut),
                _ => None,
            },
            Self::Ref(value) => value
                .reflect_ref()
                .as_struct()
                .ok()?
                .field_at(index)
                .map(Cursor::Ref),
        }
    }

    /// Unwraps a nullable wrapper: `Some(None)` when it holds no value.
    fn unwrap_nullable(&mut self) -> Option<Option<Cursor<'_>>> {
        match self {
            Self::Mut(value) => match nullable::try_unwrap_mut(value.reflect_mut().as_struct().ok()?)? {
                NullableMut::Present(payload) => Some(Some(Cursor::Mut(payload))),
                NullableMut::Absent => Some(None),
            },
            Self::Ref(value) => match nullable::try_unwrap(value.reflect_ref().as_struct().ok()?)? {
                Nullable::Present(payload) => Some(Some(Cursor::Ref(payload))),
                Nullable::Absent => Some(None),
            },
        }
    }

    fn items(&mut self) -> Option<Items<'_>> {
        match self {
            Self::Mut(value) => {
                let list = value.reflect_mut().as_list().ok()?;
                Some(Box::new(list.iter_mut().map(Cursor::Mut)))
            }
            Self::Ref(value) => {
                let list = value.reflect_ref().as_list().ok()?;
                Some(Box::new(list.iter().map(Cursor::Ref)))
            }
        }
    }

    fn entries(&mut self) -> Option<Entries<'_>> {
        match self {
            Self::Mut(value) => {
                let map = value.reflect_mut().as_map().ok()?;
                Some(Box::new(map.iter_mut().map(|(key, value)| (key, Cursor::Mut(value)))))
            }
            Self::Ref(value) => {
                let map = value.reflect_ref().as_map().ok()?;
                Some(Box::new(map.iter().map(|(key, value)| (key, Cursor::Ref(value)))))
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ResponseBuilder

/// Renders values into response trees, directed by an [`Options`] tree.
///
/// Capabilities are looked up in the registry the builder is created with.
///
/// # Examples
///
/// ```
/// use wr_reflect::Reflect;
/// use wr_reflect::registry::TypeRegistry;
/// use wr_respond::{ResponseBuilder, ResponseValue};
///
/// #[derive(Reflect)]
/// pub struct Track {
///     #[reflect(tag(db = "track_title"))]
///     pub title: String,
///     #[reflect(tag(response = "-"))]
///     pub storage_key: String,
/// }
///
/// let registry = TypeRegistry::new();
/// let mut track = Track { title: "Intro".into(), storage_key: "k".into() };
///
/// let response = ResponseBuilder::new(&registry)
///     .create_response(&mut track, None)
///     .unwrap();
/// assert_eq!(response.get("track_title").and_then(ResponseValue::as_str), Some("Intro"));
/// assert!(response.get("storage_key").is_none());
/// ```
#[derive(Clone, Copy)]
pub struct ResponseBuilder<'a> {
    capabilities: Capabilities<'a>,
    constructor: Option<&'a dyn Constructor>,
}

impl<'a> ResponseBuilder<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            capabilities: Capabilities::new(registry),
            constructor: None,
        }
    }

    /// Sets the callback that wraps sub-responses.
    #[inline]
    pub fn with_constructor(mut self, constructor: &'a dyn Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    #[inline]
    pub const fn capabilities(&self) -> &Capabilities<'a> {
        &self.capabilities
    }

    /// Renders `value` as the root of a response.
    ///
    /// A value with the error capability renders as its message.
    pub fn create_response(
        &self,
        value: &mut dyn Reflect,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        log::trace!("rendering response for `{}`", value.reflect_type_path());
        self.respond(Cursor::Mut(value), options)
    }

    /// Renders `value` with [`create_response`](Self::create_response) and
    /// wraps the result with the constructor, if there is one.
    pub fn create_wrapped_response(
        &self,
        value: &mut dyn Reflect,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        let rendered = self.create_response(&mut *value, options)?;
        Ok(match self.constructor {
            Some(constructor) => constructor.wrap(rendered, value),
            None => rendered,
        })
    }

    /// Renders a nested value.
    ///
    /// Outside of full mode the custom value producer, `Display` and
    /// `Error` capabilities are tried in that order before the value is
    /// rendered by kind.
    pub fn render_value(
        &self,
        value: &mut dyn Reflect,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        self.render(Cursor::Mut(value), options)
    }

    fn respond(&self, value: Cursor<'_>, options: Option<&Options>) -> Result<ResponseValue, RenderError> {
        if let Some(message) = self.capabilities.error_message(value.get()) {
            log::debug!("`{}` is an error, rendering its message", value.get().reflect_type_path());
            return Ok(ResponseValue::String(message));
        }
        self.build(value, false, options)
    }

    fn render(&self, value: Cursor<'_>, options: Option<&Options>) -> Result<ResponseValue, RenderError> {
        if !options::is_full(options) {
            let target = value.get();
            if let Some(rendered) = self.capabilities.response_value(target, options) {
                return Ok(rendered);
            }
            if let Some(text) = self.capabilities.display(target) {
                return Ok(ResponseValue::String(text));
            }
            if let Some(message) = self.capabilities.error_message(target) {
                return Ok(ResponseValue::String(message));
            }
        }
        self.build(value, true, options)
    }

    fn build(
        &self,
        mut value: Cursor<'_>,
        sub_response: bool,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        if let Cursor::Mut(target) = &mut value {
            self.capabilities.lazy_load(&mut **target, options);
        }

        if let Some(mut substitute) = self.capabilities.response_object(value.get()) {
            log::debug!(
                "`{}` substituted by `{}`",
                value.get().reflect_type_path(),
                substitute.reflect_type_path(),
            );
            return self.dispatch(Cursor::Mut(&mut *substitute), sub_response, options);
        }

        self.dispatch(value, sub_response, options)
    }

    fn dispatch(
        &self,
        value: Cursor<'_>,
        sub_response: bool,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        let Some(value) = value.follow_pointer() else {
            return Ok(ResponseValue::Null);
        };

        match value.get().reflect_ref() {
            ReflectRef::Struct(data) => {
                let info = data.struct_info();
                self.build_struct(value, info, options)
            }
            ReflectRef::List(_) => self.build_list(value, sub_response, options),
            ReflectRef::Map(_) => self.build_map(value, options),
            // A pointer to a pointer: the next level renders as a value of its own.
            ReflectRef::Pointer(_) => self.render(value, options),
            ReflectRef::Scalar(scalar) => Ok(ResponseValue::from(scalar)),
        }
    }

    fn build_struct(
        &self,
        mut value: Cursor<'_>,
        info: &'static StructInfo,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        let schema = StructSchema::of(info);

        if let Some(unwrapped) = value.unwrap_nullable() {
            return match unwrapped {
                Some(payload) => self.render(payload, options),
                None => Ok(ResponseValue::Null),
            };
        }

        let mut response = ResponseMap::new();
        for field in schema.iter() {
            let Some(field_value) = value.field_at(field.index()) else {
                continue;
            };

            if field.is_embedded() {
                match self.respond(field_value, options)? {
                    ResponseValue::Map(embedded) => {
                        for (key, rendered) in embedded {
                            response.entry(key).or_insert(rendered);
                        }
                    }
                    ResponseValue::Null => {}
                    _ => {
                        return Err(RenderError::EmbeddedNotMap {
                            type_path: field.type_info().type_path(),
                        });
                    }
                }
                continue;
            }

            if !field.is_visible() {
                continue;
            }

            let Some(name) = field.response_name().as_str() else {
                log::debug!("`{}.{}` is hidden from responses", schema.type_path(), field.name());
                continue;
            };

            let sub_options = options::narrow(options, name)?;
            response.insert(String::from(name), self.render(field_value, sub_options)?);
        }

        Ok(ResponseValue::Map(response))
    }

    fn build_list(
        &self,
        mut value: Cursor<'_>,
        sub_response: bool,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        let mut rendered = Vec::new();
        if let Some(items) = value.items() {
            for item in items {
                rendered.push(self.render(item, options)?);
            }
        }
        let rendered = ResponseValue::List(rendered);

        match self.constructor {
            Some(constructor) if sub_response && options.is_some() => {
                Ok(constructor.wrap(rendered, value.get()))
            }
            _ => Ok(rendered),
        }
    }

    fn build_map(
        &self,
        mut value: Cursor<'_>,
        options: Option<&Options>,
    ) -> Result<ResponseValue, RenderError> {
        let type_path = value.get().reflect_type_path();

        let mut response = ResponseMap::new();
        if let Some(entries) = value.entries() {
            for (key, entry) in entries {
                let ReflectRef::Scalar(key) = key.reflect_ref() else {
                    return Err(RenderError::MapKey { type_path });
                };
                let key = key.to_key();
                let sub_options = options::narrow(options, &key)?;
                let rendered = self.render(entry, sub_options)?;
                response.insert(key, rendered);
            }
        }

        Ok(ResponseValue::Map(response))
    }
}

impl core::fmt::Debug for ResponseBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponseBuilder")
            .field("capabilities", &self.capabilities)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::fmt;

    use serde_json::{Value, json};
    use wr_reflect::Reflect;
    use wr_reflect::registry::TypeRegistry;

    use super::ResponseBuilder;
    use crate::capability::{
        LazyLoad, ReflectDisplay, ReflectError, ReflectLazyLoad, ReflectResponseObjectCreator,
        ReflectResponseValueCreator, ResponseObjectCreator, ResponseValueCreator,
    };
    use crate::{ConfigError, Options, RenderError, ResponseValue};

    #[derive(Reflect)]
    #[reflect(type_trait = ReflectDisplay)]
    pub struct Artist {
        pub name: String,
    }

    impl fmt::Display for Artist {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "artist:{}", self.name)
        }
    }

    #[derive(Reflect)]
    pub struct Album {
        pub title: String,
        pub artist: Artist,
        #[reflect(tag(db = "release_year"))]
        pub year: u16,
        #[reflect(tag(response = "-", db = "storage"))]
        pub storage_path: String,
        pub tracks: Vec<String>,
        cache_key: u64,
    }

    #[derive(Reflect)]
    pub struct Base {
        pub id: i64,
        pub title: String,
    }

    #[derive(Reflect)]
    pub struct Post {
        #[reflect(embed)]
        pub base: Base,
        pub title: String,
    }

    #[derive(Reflect)]
    pub struct Note {
        pub title: String,
        #[reflect(embed)]
        pub base: Option<Base>,
    }

    #[derive(Reflect)]
    pub struct NullInt64 {
        pub int64: i64,
        pub valid: bool,
    }

    #[derive(Reflect)]
    pub struct Row {
        pub score: NullInt64,
    }

    #[derive(Reflect, Debug)]
    #[reflect(type_trait = ReflectError)]
    pub struct Failure {
        pub code: u16,
    }

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed with {}", self.code)
        }
    }

    impl core::error::Error for Failure {}

    #[derive(Reflect)]
    #[reflect(type_trait = ReflectLazyLoad)]
    pub struct Playlist {
        pub tracks: Vec<String>,
        loads: u32,
    }

    impl LazyLoad for Playlist {
        fn lazy_load(&mut self, options: Option<&Options>) {
            self.loads += 1;
            if options.is_some_and(|options| options.contains("tracks")) {
                self.tracks = Vec::from([String::from("one"), String::from("two")]);
            }
        }
    }

    #[derive(Reflect)]
    #[reflect(type_trait = ReflectResponseObjectCreator)]
    pub struct Secret {
        pub inner: String,
    }

    impl ResponseObjectCreator for Secret {
        fn response_object(&self) -> Box<dyn Reflect> {
            Box::new(String::from("redacted"))
        }
    }

    #[derive(Reflect)]
    #[reflect(type_trait = ReflectResponseValueCreator)]
    pub struct Money {
        pub cents: i64,
    }

    impl ResponseValueCreator for Money {
        fn response_value(&self, _: Option<&Options>) -> ResponseValue {
            ResponseValue::String(format!("${}.{:02}", self.cents / 100, self.cents % 100))
        }
    }

    #[derive(Reflect)]
    pub struct Account {
        pub owner: Secret,
        pub balance: Money,
        pub history: Vec<Money>,
        pub shared: Arc<Playlist>,
        pub labels: BTreeMap<u32, String>,
    }

    #[derive(Reflect, Debug)]
    #[reflect(type_trait = (ReflectResponseValueCreator, ReflectDisplay, ReflectError))]
    pub struct Badge {
        pub label: String,
    }

    impl ResponseValueCreator for Badge {
        fn response_value(&self, _: Option<&Options>) -> ResponseValue {
            ResponseValue::String(format!("badge:{}", self.label))
        }
    }

    impl fmt::Display for Badge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "shown:{}", self.label)
        }
    }

    impl core::error::Error for Badge {}

    #[derive(Reflect, Debug)]
    #[reflect(type_trait = (ReflectDisplay, ReflectError))]
    pub struct Warning {
        pub level: u8,
    }

    impl fmt::Display for Warning {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "warning level {}", self.level)
        }
    }

    impl core::error::Error for Warning {}

    #[derive(Reflect)]
    pub struct Report {
        pub badge: Badge,
        pub warning: Warning,
        pub pinned: Option<Badge>,
        pub earned: Vec<Badge>,
        pub missing: Option<Badge>,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Album>();
        registry.register::<Post>();
        registry.register::<Note>();
        registry.register::<Row>();
        registry.register::<Failure>();
        registry.register::<Playlist>();
        registry.register::<Account>();
        registry.register::<Report>();
        registry
    }

    fn album() -> Album {
        Album {
            title: String::from("Blue"),
            artist: Artist { name: String::from("Joni") },
            year: 1971,
            storage_path: String::from("/srv/blue"),
            tracks: Vec::from([String::from("All I Want"), String::from("My Old Man")]),
            cache_key: 9,
        }
    }

    fn render(registry: &TypeRegistry, value: &mut dyn Reflect, options: Option<&Options>) -> Value {
        let response = ResponseBuilder::new(registry).create_response(value, options).unwrap();
        serde_json::to_value(&response).unwrap()
    }

    fn options(json: &str) -> Options {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn struct_fields_follow_tags() {
        let registry = registry();
        let mut album = album();
        assert_eq!(
            render(&registry, &mut album, None),
            json!({
                "title": "Blue",
                "artist": "artist:Joni",
                "release_year": 1971,
                "tracks": ["All I Want", "My Old Man"],
            }),
        );
        assert_eq!(album.cache_key, 9);
    }

    #[test]
    fn rendering_is_idempotent() {
        let registry = registry();
        let mut album = album();
        let options = options(r#"{"artist": {"type": "full"}}"#);
        let first = render(&registry, &mut album, Some(&options));
        assert_eq!(first, render(&registry, &mut album, Some(&options)));
    }

    #[test]
    fn wildcard_selects_full_mode() {
        let registry = registry();
        let mut album = album();
        let response = render(&registry, &mut album, Some(&options(r#"{"*": {"type": "full"}}"#)));
        assert_eq!(response["artist"], json!({ "name": "Joni" }));

        let response = render(
            &registry,
            &mut album,
            Some(&options(r#"{"*": {"type": "full"}, "artist": {}}"#)),
        );
        assert_eq!(response["artist"], json!("artist:Joni"));
    }

    #[test]
    fn directive_where_node_expected() {
        let registry = registry();
        let mut album = album();
        let error = ResponseBuilder::new(&registry)
            .create_response(&mut album, Some(&options(r#"{"artist": "full"}"#)))
            .unwrap_err();
        assert_eq!(
            error,
            RenderError::Config(ConfigError::NotANode { key: String::from("artist") }),
        );
    }

    #[test]
    fn own_fields_win_over_embedded() {
        let registry = registry();
        let mut post = Post {
            base: Base { id: 3, title: String::from("base") },
            title: String::from("own"),
        };
        assert_eq!(render(&registry, &mut post, None), json!({ "id": 3, "title": "own" }));

        let mut note = Note {
            title: String::from("own"),
            base: Some(Base { id: 4, title: String::from("base") }),
        };
        assert_eq!(render(&registry, &mut note, None), json!({ "id": 4, "title": "own" }));

        note.base = None;
        assert_eq!(render(&registry, &mut note, None), json!({ "title": "own" }));
    }

    #[test]
    fn nullable_unwraps_to_payload() {
        let registry = registry();
        let mut row = Row { score: NullInt64 { int64: 7, valid: true } };
        assert_eq!(render(&registry, &mut row, None), json!({ "score": 7 }));

        row.score.valid = false;
        assert_eq!(render(&registry, &mut row, None), json!({ "score": null }));
    }

    #[test]
    fn root_error_renders_message() {
        let registry = registry();
        let mut failure = Failure { code: 404 };
        assert_eq!(render(&registry, &mut failure, None), json!("failed with 404"));

        let mut boxed: Box<Failure> = Box::new(Failure { code: 500 });
        assert_eq!(render(&registry, &mut boxed, None), json!("failed with 500"));
    }

    #[test]
    fn lazy_load_sees_current_options() {
        let registry = registry();
        let mut playlist = Playlist { tracks: Vec::new(), loads: 0 };

        assert_eq!(render(&registry, &mut playlist, None), json!({ "tracks": [] }));
        let response = render(&registry, &mut playlist, Some(&options(r#"{"tracks": {}}"#)));
        assert_eq!(response, json!({ "tracks": ["one", "two"] }));
        assert_eq!(playlist.loads, 2);
    }

    #[test]
    fn value_capabilities() {
        let registry = registry();
        let playlist = Arc::new(Playlist { tracks: Vec::new(), loads: 0 });
        let mut account = Account {
            owner: Secret { inner: String::from("k") },
            balance: Money { cents: 150 },
            history: Vec::from([Money { cents: 5 }, Money { cents: 1000 }]),
            shared: Arc::clone(&playlist),
            labels: BTreeMap::from([(2, String::from("b")), (1, String::from("a"))]),
        };

        assert_eq!(
            render(&registry, &mut account, Some(&options(r#"{"shared": {"tracks": {}}}"#))),
            json!({
                "owner": "redacted",
                "balance": "$1.50",
                "history": ["$0.05", "$10.00"],
                "shared": { "tracks": [] },
                "labels": { "1": "a", "2": "b" },
            }),
        );
        // Shared values are rendered without lazy loading.
        assert_eq!(playlist.loads, 0);

        drop(playlist);
        render(&registry, &mut account, Some(&options(r#"{"shared": {"tracks": {}}}"#)));
        assert_eq!(account.shared.loads, 1);
    }

    #[test]
    fn capabilities_apply_in_precedence_order() {
        let registry = registry();
        let badge = |label: &str| Badge { label: String::from(label) };
        let mut report = Report {
            badge: badge("gold"),
            warning: Warning { level: 2 },
            pinned: Some(badge("pin")),
            earned: Vec::from([badge("a"), badge("b")]),
            missing: None,
        };

        assert_eq!(
            render(&registry, &mut report, None),
            json!({
                "badge": "badge:gold",
                "warning": "warning level 2",
                "pinned": "badge:pin",
                "earned": ["badge:a", "badge:b"],
                "missing": null,
            }),
        );

        // Full mode skips every value capability.
        let full = options(r#"{"badge": {"type": "full"}, "warning": {"type": "full"}}"#);
        let response = render(&registry, &mut report, Some(&full));
        assert_eq!(response["badge"], json!({ "label": "gold" }));
        assert_eq!(response["warning"], json!({ "level": 2 }));
    }

    #[test]
    fn map_keys_must_be_scalars() {
        let registry = TypeRegistry::new();
        let mut map = BTreeMap::from([(Vec::from([1_u8]), 1_u8)]);
        let error = ResponseBuilder::new(&registry)
            .create_response(&mut map, None)
            .unwrap_err();
        assert!(matches!(error, RenderError::MapKey { .. }));
    }

    #[test]
    fn constructor_wraps_sub_lists_with_options() {
        let registry = registry();
        let wrap = |rendered: ResponseValue, original: &dyn Reflect| {
            let mut map = crate::ResponseMap::new();
            map.insert(String::from("type"), ResponseValue::from(original.reflect_type_name()));
            map.insert(String::from("items"), rendered);
            ResponseValue::Map(map)
        };
        let builder = ResponseBuilder::new(&registry).with_constructor(&wrap);

        let mut album = album();
        let options = options(r#"{"tracks": {}}"#);
        let response = builder.create_response(&mut album, Some(&options)).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap()["tracks"],
            json!({ "type": "Vec<String>", "items": ["All I Want", "My Old Man"] }),
        );

        // No options, no wrapping.
        let response = builder.create_response(&mut album, None).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap()["tracks"],
            json!(["All I Want", "My Old Man"]),
        );

        // The root is only wrapped on request.
        let mut numbers = Vec::from([3_u8, 1, 2]);
        let response = builder.create_response(&mut numbers, Some(&options)).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), json!([3, 1, 2]));

        let response = builder.create_wrapped_response(&mut numbers, None).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "type": "Vec<u8>", "items": [3, 1, 2] }),
        );
    }
}
