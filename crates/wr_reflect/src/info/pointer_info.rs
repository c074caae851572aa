use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// The static description of a single level of indirection.
///
/// `nullable` is `true` when the pointer may hold nothing (`Option<T>`).
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_ty: Type,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TPtr: Pointer + TypePath, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee_ty: Type::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    #[inline]
    pub const fn pointee_ty(&self) -> Type {
        self.pointee_ty
    }

    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
