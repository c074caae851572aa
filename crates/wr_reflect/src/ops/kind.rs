use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Pointer, Scalar, Struct};

macro_rules! impl_kind_cast {
    ($name:ident : $kind:ident => $ty:ty) => {
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received,
                }),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a value by kind.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Scalar(Scalar<'a>),
}

impl<'a> ReflectRef<'a> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a dyn Struct);
    impl_kind_cast!(as_list: List => &'a dyn List);
    impl_kind_cast!(as_map: Map => &'a dyn Map);
    impl_kind_cast!(as_pointer: Pointer => &'a dyn Pointer);
    impl_kind_cast!(as_scalar: Scalar => Scalar<'a>);
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a value by kind.
///
/// Scalars are leaves and only expose a read view.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Scalar(Scalar<'a>),
}

impl<'a> ReflectMut<'a> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a mut dyn Struct);
    impl_kind_cast!(as_list: List => &'a mut dyn List);
    impl_kind_cast!(as_map: Map => &'a mut dyn Map);
    impl_kind_cast!(as_pointer: Pointer => &'a mut dyn Pointer);
    impl_kind_cast!(as_scalar: Scalar => Scalar<'a>);
}
