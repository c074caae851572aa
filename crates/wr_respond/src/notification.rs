//! Field keyed input messages.

use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::ser::{Serialize, Serializer};

use crate::value::{ResponseMap, ResponseValue};

/// A required input that was not supplied.
pub const MISSING_INPUT: &str = "No input for required field";

/// A supplied input that no field consumes.
pub const UNMATCHED_INPUT: &str = "No target field found for this input";

/// A supplied input whose type does not convert to the field type.
pub const WRONG_TYPE: &str = "Input is of the wrong type and cannot be converted";

/// Input name to message, at most one message per name.
///
/// Serializes as a flat map.
///
/// ```
/// use wr_respond::notification::{MISSING_INPUT, NotificationMap};
///
/// let mut notes = NotificationMap::new();
/// notes.set_input_message("email", "too short");
/// notes.set_input_message("email", MISSING_INPUT);
/// assert_eq!(notes.input_message("email"), Some(MISSING_INPUT));
/// assert_eq!(notes.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationMap {
    input: BTreeMap<String, String>,
}

impl NotificationMap {
    #[inline]
    pub const fn new() -> Self {
        Self {
            input: BTreeMap::new(),
        }
    }

    /// Sets the message of `name`, replacing an earlier one.
    pub fn set_input_message(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.input.insert(name.into(), message.into());
    }

    #[inline]
    pub fn input_message(&self, name: &str) -> Option<&str> {
        self.input.get(name).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.input.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Iterates in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.input
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Moves the messages of `other` in, replacing messages with the same name.
    pub fn extend(&mut self, other: NotificationMap) {
        self.input.extend(other.input);
    }

    /// The messages as a response map.
    pub fn to_response_value(&self) -> ResponseValue {
        let map: ResponseMap = self
            .input
            .iter()
            .map(|(name, message)| (name.clone(), ResponseValue::String(message.clone())))
            .collect();
        ResponseValue::Map(map)
    }
}

impl Serialize for NotificationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationMap, UNMATCHED_INPUT, WRONG_TYPE};

    #[test]
    fn extend_replaces() {
        let mut notes = NotificationMap::new();
        notes.set_input_message("age", WRONG_TYPE);

        let mut other = NotificationMap::new();
        other.set_input_message("age", UNMATCHED_INPUT);
        other.set_input_message("name", WRONG_TYPE);
        notes.extend(other);

        assert_eq!(notes.input_message("age"), Some(UNMATCHED_INPUT));
        assert!(notes.contains("name"));
        assert_eq!(
            notes.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            ["age", "name"]
        );
    }

    #[test]
    fn serializes_flat() {
        let mut notes = NotificationMap::new();
        notes.set_input_message("age", WRONG_TYPE);
        assert_eq!(
            serde_json::to_value(&notes).unwrap(),
            serde_json::json!({ "age": WRONG_TYPE }),
        );
        assert_eq!(
            serde_json::to_value(notes.to_response_value()).unwrap(),
            serde_json::to_value(&notes).unwrap(),
        );
    }
}
