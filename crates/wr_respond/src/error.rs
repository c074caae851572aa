use alloc::string::String;

use thiserror::Error;

/// An options tree that does not have the expected shape.
///
/// This is a caller mistake, so it aborts the whole render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The entry selected for `key` is a directive, not a nested node.
    #[error("option `{key}` must be a nested options node")]
    NotANode { key: String },
    /// A deserialized value that is neither an object nor a scalar directive.
    #[error("unsupported options value: {found}")]
    UnsupportedShape { found: String },
}

/// Failure of a render pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A map whose keys are not scalars.
    #[error("map keys of `{type_path}` cannot be rendered as strings")]
    MapKey { type_path: &'static str },
    /// An embedded field that rendered to something other than a map.
    #[error("embedded field of type `{type_path}` did not render to a map")]
    EmbeddedNotMap { type_path: &'static str },
}

/// Failure of an input collection pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    #[error("`{type_path}` is not a struct and has no input fields")]
    NotAStruct { type_path: &'static str },
}

/// A user facing validation message, returned by the input capabilities.
///
/// ```
/// use wr_respond::InputError;
///
/// let error = InputError::new("must be positive");
/// assert_eq!(error.to_string(), "must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InputError {
    message: String,
}

impl InputError {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}
