//! The options tree that directs a render pass.
//!
//! An [`Options`] node maps field names (or map keys) to nested nodes, with
//! `"*"` as a fallback for names without an entry. A node may also carry
//! directives; the only one recognized is `"type": "full"`, which disables
//! the value capabilities and forces structural rendering.
//!
//! ```
//! use wr_respond::options::Options;
//!
//! let options: Options = serde_json::from_str(r#"{"author": {"type": "full"}, "*": {}}"#).unwrap();
//!
//! assert!(options.narrow("author").unwrap().unwrap().is_full());
//! assert!(!options.narrow("title").unwrap().unwrap().is_full());
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::ConfigError;

/// The key matched when a name has no entry of its own.
pub const WILDCARD: &str = "*";

/// The directive key selecting a rendering mode.
pub const TYPE_DIRECTIVE: &str = "type";

/// The rendering mode that forces structural rendering.
pub const FULL_MODE: &str = "full";

// -----------------------------------------------------------------------------
// OptionValue

/// An entry of an options node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    /// A leaf directive, such as `"type": "full"`.
    Directive(String),
    /// Options for the child with this name.
    Node(Options),
}

impl OptionValue {
    #[inline]
    pub fn as_node(&self) -> Option<&Options> {
        match self {
            Self::Node(node) => Some(node),
            Self::Directive(_) => None,
        }
    }

    #[inline]
    pub fn as_directive(&self) -> Option<&str> {
        match self {
            Self::Directive(directive) => Some(directive),
            Self::Node(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Options

/// A read-only options node, narrowed by reference as a render descends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    entries: BTreeMap<String, OptionValue>,
}

impl Options {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// A node carrying only `"type": "full"`.
    #[inline]
    pub fn full() -> Self {
        Self::new().with_directive(TYPE_DIRECTIVE, FULL_MODE)
    }

    #[inline]
    pub fn with_node(mut self, name: impl Into<String>, node: Options) -> Self {
        self.entries.insert(name.into(), OptionValue::Node(node));
        self
    }

    #[inline]
    pub fn with_directive(mut self, name: impl Into<String>, directive: impl Into<String>) -> Self {
        self.entries
            .insert(name.into(), OptionValue::Directive(directive.into()));
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Whether this node carries `"type": "full"`.
    pub fn is_full(&self) -> bool {
        self.get(TYPE_DIRECTIVE)
            .and_then(OptionValue::as_directive)
            .is_some_and(|mode| mode == FULL_MODE)
    }

    /// Selects the options of the child `name`.
    ///
    /// The exact entry wins, then the `"*"` entry; without either the child
    /// gets no options. A selected entry that is a directive is an error.
    pub fn narrow(&self, name: &str) -> Result<Option<&Options>, ConfigError> {
        let selected = match self.entries.get_key_value(name) {
            Some(entry) => Some(entry),
            None => self.entries.get_key_value(WILDCARD),
        };

        match selected {
            None => Ok(None),
            Some((_, OptionValue::Node(node))) => Ok(Some(node)),
            Some((key, OptionValue::Directive(_))) => Err(ConfigError::NotANode { key: key.clone() }),
        }
    }
}

/// [`Options::narrow`] for a possibly absent node.
#[inline]
pub fn narrow<'a>(options: Option<&'a Options>, name: &str) -> Result<Option<&'a Options>, ConfigError> {
    match options {
        Some(options) => options.narrow(name),
        None => Ok(None),
    }
}

/// [`Options::is_full`] for a possibly absent node.
#[inline]
pub fn is_full(options: Option<&Options>) -> bool {
    options.is_some_and(Options::is_full)
}

impl FromIterator<(String, OptionValue)> for Options {
    fn from_iter<T: IntoIterator<Item = (String, OptionValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match OptionValue::deserialize(deserializer)? {
            OptionValue::Node(node) => Ok(node),
            OptionValue::Directive(directive) => Err(de::Error::custom(ConfigError::UnsupportedShape {
                found: directive,
            })),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}

struct OptionValueVisitor;

impl OptionValueVisitor {
    fn unsupported<E: de::Error>(found: &str) -> E {
        E::custom(ConfigError::UnsupportedShape {
            found: found.to_string(),
        })
    }
}

impl<'de> Visitor<'de> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an options object or a scalar directive")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(OptionValue::Directive(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(Self::unsupported("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, OptionValue>()? {
            entries.insert(key, value);
        }
        Ok(OptionValue::Node(Options { entries }))
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionValue, Options, is_full, narrow};
    use crate::ConfigError;

    #[test]
    fn narrow_prefers_exact_then_wildcard() {
        let options = Options::new()
            .with_node("author", Options::full())
            .with_node("*", Options::new());

        assert!(options.narrow("author").unwrap().unwrap().is_full());
        assert_eq!(options.narrow("title").unwrap(), Some(&Options::new()));

        let no_wildcard = Options::new().with_node("author", Options::new());
        assert_eq!(no_wildcard.narrow("title").unwrap(), None);
        assert_eq!(narrow(None, "title").unwrap(), None);
    }

    #[test]
    fn narrow_into_directive_fails() {
        let options = Options::full();
        assert_eq!(
            options.narrow("type"),
            Err(ConfigError::NotANode { key: "type".into() }),
        );

        let wildcard = Options::new().with_directive("*", "full");
        assert_eq!(
            wildcard.narrow("name"),
            Err(ConfigError::NotANode { key: "*".into() }),
        );
    }

    #[test]
    fn full_mode() {
        assert!(is_full(Some(&Options::full())));
        assert!(!is_full(Some(&Options::new().with_directive("type", "short"))));
        assert!(!is_full(None));
    }

    #[test]
    fn deserialize_shapes() {
        let options: Options =
            serde_json::from_str(r#"{"a": {"type": "full", "depth": 2}, "b": {}}"#).unwrap();
        let a = options.get("a").and_then(OptionValue::as_node).unwrap();
        assert!(a.is_full());
        assert_eq!(a.get("depth"), Some(&OptionValue::Directive("2".into())));
        assert_eq!(options.len(), 2);

        let error = serde_json::from_str::<Options>(r#"{"a": [1, 2]}"#).unwrap_err();
        assert!(error.to_string().contains("unsupported options value: array"));

        assert!(serde_json::from_str::<Options>(r#"{"a": null}"#).is_err());
        assert!(serde_json::from_str::<Options>(r#""full""#).is_err());
    }
}
