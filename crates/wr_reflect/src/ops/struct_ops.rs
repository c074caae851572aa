use core::iter::FusedIterator;

use crate::Reflect;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Struct trait

/// Access to the named fields of a struct, in declaration order.
///
/// Implemented by `#[derive(Reflect)]`.
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// The static [`StructInfo`] of this struct.
    ///
    /// # Panics
    ///
    /// Panics if a hand-written `Typed` impl reports a non-struct info.
    fn struct_info(&self) -> &'static StructInfo {
        self.reflect_type_info()
            .as_struct()
            .expect("`Struct` types must describe themselves as `TypeInfo::Struct`")
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// Iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self {
            target: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.target.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.target.field_len() - self.index;
        (hint, Some(hint))
    }
}

impl FusedIterator for StructFieldIter<'_> {}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::ReflectMut;

    #[derive(Reflect)]
    pub struct Track {
        pub title: String,
        pub length: u32,
        plays: u64,
    }

    #[test]
    fn derived_fields_by_name_and_index() {
        let mut track = Track { title: String::from("Blue"), length: 181, plays: 3 };

        let ReflectMut::Struct(data) = track.reflect_mut() else {
            panic!("expected a struct");
        };
        assert_eq!(data.field_len(), 3);
        assert_eq!(data.name_at(2), Some("plays"));
        assert!(data.name_at(3).is_none());
        assert_eq!(data.field("length").unwrap().downcast_ref::<u32>(), Some(&181));
        assert!(data.field("missing").is_none());
        assert_eq!(data.field_at(0).unwrap().downcast_ref::<String>().unwrap(), "Blue");

        *data.field_mut("length").unwrap().downcast_mut::<u32>().unwrap() = 200;
        *data.field_at_mut(2).unwrap().downcast_mut::<u64>().unwrap() += 1;
        assert_eq!(data.iter_fields().len(), 3);

        assert_eq!(track.length, 200);
        assert_eq!(track.plays, 4);
    }
}
