use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, Scalar};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_reflect_for_scalar {
    ($ty:ty, $path:literal, $name:literal, $kind:ident, |$value:ident| $scalar:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $value = self;
                ReflectRef::Scalar($scalar)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                let $value = &*self;
                ReflectMut::Scalar($scalar)
            }
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut type_meta = TypeMeta::with_capacity::<Self>(1);
                type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                type_meta
            }
        }
    };
}

impl_reflect_for_scalar!((), "()", "()", Unit, |_v| Scalar::Unit);
impl_reflect_for_scalar!(bool, "bool", "bool", Bool, |v| Scalar::Bool(*v));
impl_reflect_for_scalar!(char, "char", "char", Char, |v| Scalar::Char(*v));

impl_reflect_for_scalar!(i8, "i8", "i8", I8, |v| Scalar::Int(i64::from(*v)));
impl_reflect_for_scalar!(i16, "i16", "i16", I16, |v| Scalar::Int(i64::from(*v)));
impl_reflect_for_scalar!(i32, "i32", "i32", I32, |v| Scalar::Int(i64::from(*v)));
impl_reflect_for_scalar!(i64, "i64", "i64", I64, |v| Scalar::Int(*v));
impl_reflect_for_scalar!(isize, "isize", "isize", Isize, |v| Scalar::Int(*v as i64));

impl_reflect_for_scalar!(u8, "u8", "u8", U8, |v| Scalar::UInt(u64::from(*v)));
impl_reflect_for_scalar!(u16, "u16", "u16", U16, |v| Scalar::UInt(u64::from(*v)));
impl_reflect_for_scalar!(u32, "u32", "u32", U32, |v| Scalar::UInt(u64::from(*v)));
impl_reflect_for_scalar!(u64, "u64", "u64", U64, |v| Scalar::UInt(*v));
impl_reflect_for_scalar!(usize, "usize", "usize", Usize, |v| Scalar::UInt(*v as u64));

impl_reflect_for_scalar!(f32, "f32", "f32", F32, |v| Scalar::Float(f64::from(*v)));
impl_reflect_for_scalar!(f64, "f64", "f64", F64, |v| Scalar::Float(*v));

impl_reflect_for_scalar!(String, "alloc::string::String", "String", Str, |v| Scalar::Str(v.as_str()));
impl_reflect_for_scalar!(&'static str, "&str", "&str", Str, |v| Scalar::Str(v));

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::{ReflectRef, Scalar};

    #[test]
    fn scalars_widen() {
        assert_eq!(7_u8.reflect_ref().as_scalar().unwrap(), Scalar::UInt(7));
        assert_eq!((-2_i16).reflect_ref().as_scalar().unwrap(), Scalar::Int(-2));
        assert_eq!(1.5_f32.reflect_ref().as_scalar().unwrap(), Scalar::Float(1.5));
    }

    #[test]
    fn strings_are_str_scalars() {
        let owned = String::from("hi");
        let ReflectRef::Scalar(Scalar::Str(s)) = owned.reflect_ref() else {
            panic!("expected a string scalar");
        };
        assert_eq!(s, "hi");

        let kind = <&'static str>::type_info().as_scalar().unwrap().kind();
        assert_eq!(kind, ScalarKind::Str);
        assert_eq!(String::type_info().as_scalar().unwrap().kind(), ScalarKind::Str);
    }
}
