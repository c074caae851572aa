use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The primitive a scalar type is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Unit,
    Bool,
    Char,
    Str,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl ScalarKind {
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize)
    }

    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int() || self.is_float()
    }

    /// Width in bits of numeric kinds, `0` otherwise.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
            Self::Isize | Self::Usize => usize::BITS,
            _ => 0,
        }
    }

    /// Integers up to this many bits are exact in the float kind.
    const fn mantissa_bits(self) -> u32 {
        match self {
            Self::F32 => 24,
            Self::F64 => 53,
            _ => 0,
        }
    }

    /// Returns `true` if every value of `self` is exactly representable as `target`.
    ///
    /// ```
    /// use wr_reflect::info::ScalarKind;
    ///
    /// assert!(ScalarKind::I32.widens_to(ScalarKind::I64));
    /// assert!(ScalarKind::U16.widens_to(ScalarKind::F32));
    /// assert!(!ScalarKind::I64.widens_to(ScalarKind::F64));
    /// assert!(!ScalarKind::U32.widens_to(ScalarKind::I32));
    /// ```
    pub const fn widens_to(self, target: ScalarKind) -> bool {
        if self as u8 == target as u8 {
            return true;
        }
        if self.is_signed_int() {
            return (target.is_signed_int() && target.bits() >= self.bits())
                || (target.is_float() && target.mantissa_bits() >= self.bits());
        }
        if self.is_unsigned_int() {
            return (target.is_unsigned_int() && target.bits() >= self.bits())
                || (target.is_signed_int() && target.bits() > self.bits())
                || (target.is_float() && target.mantissa_bits() >= self.bits());
        }
        matches!((self, target), (Self::F32, Self::F64))
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// The static description of a leaf type.
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKind;

    #[test]
    fn widening() {
        assert!(ScalarKind::I8.widens_to(ScalarKind::I8));
        assert!(ScalarKind::U8.widens_to(ScalarKind::I16));
        assert!(!ScalarKind::U64.widens_to(ScalarKind::I64));
        assert!(ScalarKind::I32.widens_to(ScalarKind::F64));
        assert!(!ScalarKind::I32.widens_to(ScalarKind::F32));
        assert!(ScalarKind::F32.widens_to(ScalarKind::F64));
        assert!(!ScalarKind::F64.widens_to(ScalarKind::F32));
        assert!(!ScalarKind::Bool.widens_to(ScalarKind::I8));
        assert!(!ScalarKind::Char.widens_to(ScalarKind::Str));
        assert!(!ScalarKind::I8.widens_to(ScalarKind::U64));
    }
}
