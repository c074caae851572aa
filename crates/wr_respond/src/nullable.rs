//! Structural detection of nullable wrappers.
//!
//! A struct whose type name is `Null{Suffix}` and which has a field named
//! `{suffix}` plus a `bool` field named `valid` (both matched ignoring ASCII
//! case) is a nullable wrapper, such as:
//!
//! ```ignore
//! #[derive(Reflect)]
//! pub struct NullInt64 {
//!     pub int64: i64,
//!     pub valid: bool,
//! }
//! ```
//!
//! It renders as its payload when `valid` is true and as null otherwise.
//! The match is on shape only, so third-party wrapper types qualify.

use wr_reflect::Reflect;
use wr_reflect::info::StructInfo;
use wr_reflect::ops::{Scalar, Struct};

use crate::schema::StructSchema;

/// The type name prefix of nullable wrappers.
pub const NULLABLE_PREFIX: &str = "Null";

/// The name of the validity field.
pub const VALID_FIELD: &str = "Valid";

/// The field positions of a nullable wrapper type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableShape {
    payload: usize,
    valid: usize,
}

impl NullableShape {
    /// Returns the shape if `info` describes a nullable wrapper.
    pub fn of(info: &StructInfo) -> Option<Self> {
        let suffix = info.type_ident().strip_prefix(NULLABLE_PREFIX)?;
        if suffix.is_empty() {
            return None;
        }

        let position = |name: &str| {
            info.iter()
                .position(|field| field.name().eq_ignore_ascii_case(name))
        };

        let payload = position(suffix)?;
        let valid = position(VALID_FIELD)?;
        let valid_is_bool = info.field_at(valid).is_some_and(|field| field.type_is::<bool>());

        (valid_is_bool && payload != valid).then_some(Self { payload, valid })
    }

    #[inline]
    pub fn payload_index(&self) -> usize {
        self.payload
    }

    #[inline]
    pub fn valid_index(&self) -> usize {
        self.valid
    }

    /// Reads the validity flag of a value of the wrapper type.
    pub fn is_valid(&self, value: &dyn Struct) -> bool {
        value
            .field_at(self.valid)
            .and_then(|valid| valid.reflect_ref().as_scalar().ok())
            .is_some_and(|valid| valid == Scalar::Bool(true))
    }
}

/// The result of unwrapping a nullable wrapper.
#[derive(Debug)]
pub enum Nullable<'a> {
    Present(&'a dyn Reflect),
    Absent,
}

/// The mutable counterpart of [`Nullable`].
#[derive(Debug)]
pub enum NullableMut<'a> {
    Present(&'a mut dyn Reflect),
    Absent,
}

/// Unwraps `value` if it is a nullable wrapper, `None` if it has another shape.
pub fn try_unwrap(value: &dyn Struct) -> Option<Nullable<'_>> {
    let shape = StructSchema::of(value.struct_info()).nullable()?;
    if !shape.is_valid(value) {
        return Some(Nullable::Absent);
    }
    value.field_at(shape.payload).map(Nullable::Present)
}

/// Like [`try_unwrap`], handing out the payload mutably.
pub fn try_unwrap_mut(value: &mut dyn Struct) -> Option<NullableMut<'_>> {
    let shape = StructSchema::of(value.struct_info()).nullable()?;
    if !shape.is_valid(value) {
        return Some(NullableMut::Absent);
    }
    value.field_at_mut(shape.payload).map(NullableMut::Present)
}

#[cfg(test)]
mod tests {
    use wr_reflect::Reflect;
    use wr_reflect::info::Typed;

    use super::{Nullable, NullableMut, NullableShape, try_unwrap, try_unwrap_mut};

    #[derive(Reflect)]
    pub struct NullInt {
        pub int: i64,
        pub valid: bool,
    }

    #[derive(Reflect)]
    #[allow(non_snake_case)]
    pub struct NullText {
        pub Text: String,
        pub Valid: bool,
    }

    #[derive(Reflect)]
    pub struct NullMarker {
        pub marker: i64,
        pub valid: u8,
    }

    #[derive(Reflect)]
    pub struct Plain {
        pub plain: i64,
        pub valid: bool,
    }

    fn as_struct(value: &dyn Reflect) -> &dyn wr_reflect::ops::Struct {
        value.reflect_ref().as_struct().unwrap()
    }

    #[test]
    fn valid_payload_is_present() {
        let value = NullInt { int: 7, valid: true };
        let Some(Nullable::Present(payload)) = try_unwrap(as_struct(&value)) else {
            panic!("expected a payload");
        };
        assert_eq!(payload.downcast_ref::<i64>(), Some(&7));
    }

    #[test]
    fn invalid_payload_is_absent() {
        let value = NullInt { int: 7, valid: false };
        assert!(matches!(try_unwrap(as_struct(&value)), Some(Nullable::Absent)));
    }

    #[test]
    fn payload_can_be_updated_in_place() {
        let mut value = NullInt { int: 7, valid: true };
        let data = value.reflect_mut().as_struct().unwrap();
        let Some(NullableMut::Present(payload)) = try_unwrap_mut(data) else {
            panic!("expected a payload");
        };
        *payload.downcast_mut::<i64>().unwrap() = 8;
        assert_eq!(value.int, 8);
    }

    #[test]
    fn names_match_ignoring_case() {
        let shape = NullableShape::of(NullText::type_info().as_struct().unwrap()).unwrap();
        assert_eq!(shape.payload_index(), 0);
        assert_eq!(shape.valid_index(), 1);
    }

    #[test]
    fn other_shapes_are_not_nullable() {
        assert!(NullableShape::of(NullMarker::type_info().as_struct().unwrap()).is_none());
        assert!(NullableShape::of(Plain::type_info().as_struct().unwrap()).is_none());

        let value = Plain { plain: 1, valid: true };
        assert!(try_unwrap(as_struct(&value)).is_none());
    }
}
