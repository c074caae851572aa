//! Raw input values keyed by parameter name.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;

use wr_reflect::Reflect;

/// The flat parameter map a request parser produces.
///
/// Input collection removes every parameter that a field consumes, so the
/// entries left afterwards have no target.
#[derive(Debug, Default)]
pub struct InputParams {
    values: BTreeMap<String, Box<dyn Reflect>>,
}

impl InputParams {
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl Reflect) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a value, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Reflect) -> Option<Box<dyn Reflect>> {
        self.insert_boxed(name, Box::new(value))
    }

    pub fn insert_boxed(
        &mut self,
        name: impl Into<String>,
        value: Box<dyn Reflect>,
    ) -> Option<Box<dyn Reflect>> {
        self.values.insert(name.into(), value)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&dyn Reflect> {
        self.values.get(name).map(|value| &**value)
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Reflect>> {
        self.values.remove(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &dyn Reflect)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), &**value))
    }

    /// Iterates over parameter names in order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<N: Into<String>> FromIterator<(N, Box<dyn Reflect>)> for InputParams {
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Reflect>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InputParams;

    #[test]
    fn remove_consumes() {
        let mut params = InputParams::new().with("age", 30_i64).with("name", String::from("ana"));
        assert_eq!(params.names().collect::<Vec<_>>(), ["age", "name"]);

        let age = params.remove("age").unwrap();
        assert_eq!(age.downcast_ref::<i64>(), Some(&30));
        assert!(!params.contains("age"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name").and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("ana"));
    }
}
