use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use wr_reflect::ops::Scalar;

/// A rendered map. Keys are unique and sorted.
pub type ResponseMap = BTreeMap<String, ResponseValue>;

/// The generic tree a render pass produces, ready for a wire encoder.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResponseValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<ResponseValue>),
    Map(ResponseMap),
}

impl ResponseValue {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ResponseMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this is a map.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<Scalar<'_>> for ResponseValue {
    fn from(scalar: Scalar<'_>) -> Self {
        match scalar {
            Scalar::Unit => Self::Null,
            Scalar::Bool(v) => Self::Bool(v),
            Scalar::Char(v) => Self::String(v.into()),
            Scalar::Int(v) => Self::Int(v),
            Scalar::UInt(v) => Self::UInt(v),
            Scalar::Float(v) => Self::Float(v),
            Scalar::Str(v) => Self::String(v.into()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ResponseValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => UInt,
    u64 => UInt,
    f64 => Float,
    String => String,
    &str => String,
    Vec<ResponseValue> => List,
    ResponseMap => Map,
}

impl Serialize for ResponseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser.serialize_entry(key, value)?;
                }
                ser.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ResponseMap, ResponseValue};
    use wr_reflect::ops::Scalar;

    #[test]
    fn scalars_convert() {
        assert_eq!(ResponseValue::from(Scalar::Char('x')), ResponseValue::from("x"));
        assert_eq!(ResponseValue::from(Scalar::Unit), ResponseValue::Null);
        assert_eq!(ResponseValue::from(Scalar::UInt(3)), ResponseValue::UInt(3));
    }

    #[test]
    fn serializes_as_plain_json() {
        let mut map = ResponseMap::new();
        map.insert("b".into(), ResponseValue::List(vec![1_i64.into(), ResponseValue::Null]));
        map.insert("a".into(), "text".into());

        let json = serde_json::to_string(&ResponseValue::Map(map)).unwrap();
        assert_eq!(json, r#"{"a":"text","b":[1,null]}"#);
    }
}
