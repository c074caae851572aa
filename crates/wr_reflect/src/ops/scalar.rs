use alloc::string::{String, ToString};
use core::fmt;

/// A borrowed view of a leaf value.
///
/// Integers are widened to 64 bits and `f32` to `f64`; the exact type is
/// still available from the value's [`ScalarInfo`](crate::info::ScalarInfo).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Unit,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(&'a str),
}

impl Scalar<'_> {
    /// The text form used when a scalar is a map key.
    ///
    /// ```
    /// use wr_reflect::ops::Scalar;
    ///
    /// assert_eq!(Scalar::Int(-3).to_key(), "-3");
    /// assert_eq!(Scalar::Str("id").to_key(), "id");
    /// ```
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::UInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}
