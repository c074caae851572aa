//! External names of struct fields.
//!
//! Three tags are read from a field (`#[reflect(tag(..))]`):
//!
//! - `response`: the key used in a rendered response, `"-"` hides the field.
//! - `db`: the persistence name, used as the response key when there is no
//!   `response` tag, except on the `id` field.
//! - `request`: `"name,arg,..."`, the input name and its arguments.

use alloc::borrow::Cow;
use alloc::string::String;

use wr_reflect::info::NamedField;

pub const RESPONSE_TAG: &str = "response";
pub const DB_TAG: &str = "db";
pub const REQUEST_TAG: &str = "request";

/// The value of a name tag that hides a field.
pub const SKIP: &str = "-";

/// The `request` tag argument marking an input as optional.
pub const OPTIONAL_ARG: &str = "optional";

/// The field whose `db` tag never names the response key.
const ID_FIELD: &str = "id";

/// A resolved external name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Named(Cow<'static, str>),
    Skip,
}

impl FieldName {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Skip => None,
        }
    }

    #[inline]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

/// The input side of a field: its parameter name and whether it may be absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputName {
    pub name: FieldName,
    pub optional: bool,
}

#[inline]
fn lowercase(name: &str) -> String {
    name.to_lowercase()
}

/// Resolves the response key of a field.
///
/// ```
/// use wr_reflect::info::{FieldTags, NamedField};
/// use wr_respond::tag::{FieldName, response_name};
///
/// let field = NamedField::new::<String>("Title")
///     .with_tags(FieldTags::new(&[("db", "title_text")]));
/// assert_eq!(response_name(&field), FieldName::Named("title_text".into()));
///
/// let field = NamedField::new::<String>("Author");
/// assert_eq!(response_name(&field), FieldName::Named("author".into()));
/// ```
pub fn response_name(field: &NamedField) -> FieldName {
    let tags = field.tags();

    match tags.get(RESPONSE_TAG) {
        Some(SKIP) => return FieldName::Skip,
        Some(name) if !name.is_empty() => return FieldName::Named(Cow::Borrowed(name)),
        _ => {}
    }

    if !field.name().eq_ignore_ascii_case(ID_FIELD) {
        match tags.get(DB_TAG) {
            Some(SKIP) | None => {}
            Some(name) if !name.is_empty() => return FieldName::Named(Cow::Borrowed(name)),
            Some(_) => {}
        }
    }

    FieldName::Named(Cow::Owned(lowercase(field.name())))
}

/// Resolves the input name of a field from its `request` tag.
pub fn input_name(field: &NamedField) -> InputName {
    let tag = field.tags().get(REQUEST_TAG).unwrap_or_default();
    let mut parts = tag.split(',');

    let name = match parts.next() {
        Some(SKIP) => FieldName::Skip,
        Some(name) if !name.is_empty() => FieldName::Named(Cow::Borrowed(name)),
        _ => FieldName::Named(Cow::Owned(lowercase(field.name()))),
    };
    let optional = parts.any(|arg| arg.trim() == OPTIONAL_ARG);

    InputName { name, optional }
}

#[cfg(test)]
mod tests {
    use super::{FieldName, InputName, input_name, response_name};
    use wr_reflect::info::{FieldTags, NamedField};

    fn field(name: &'static str, tags: &'static [(&'static str, &'static str)]) -> NamedField {
        NamedField::new::<i32>(name).with_tags(FieldTags::new(tags))
    }

    fn named(name: &str) -> FieldName {
        FieldName::Named(name.to_string().into())
    }

    #[test]
    fn response_tag_wins_over_db_tag() {
        let f = field("Title", &[("db", "title_db"), ("response", "heading")]);
        assert_eq!(response_name(&f), named("heading"));
    }

    #[test]
    fn response_dash_skips() {
        let f = field("Secret", &[("response", "-"), ("db", "secret")]);
        assert_eq!(response_name(&f), FieldName::Skip);
    }

    #[test]
    fn db_tag_ignored_for_id_and_dash() {
        assert_eq!(response_name(&field("Id", &[("db", "user_id")])), named("id"));
        assert_eq!(response_name(&field("id", &[("db", "user_id")])), named("id"));
        assert_eq!(response_name(&field("Hidden", &[("db", "-")])), named("hidden"));
        assert_eq!(response_name(&field("Owner", &[("db", "owner_id")])), named("owner_id"));
    }

    #[test]
    fn empty_tags_fall_through() {
        assert_eq!(response_name(&field("Name", &[("response", "")])), named("name"));
    }

    #[test]
    fn request_tag() {
        assert_eq!(
            input_name(&field("Age", &[("request", "age_years,optional")])),
            InputName { name: named("age_years"), optional: true },
        );
        assert_eq!(
            input_name(&field("Age", &[("request", ",optional")])),
            InputName { name: named("age"), optional: true },
        );
        assert_eq!(
            input_name(&field("Name", &[])),
            InputName { name: named("name"), optional: false },
        );
        assert_eq!(input_name(&field("Internal", &[("request", "-")])).name, FieldName::Skip);
    }
}
