//! Per-type field schemas.
//!
//! Resolving tags on every render would repeat the same string work for
//! every value of a type, so the resolved names are computed once per
//! struct type and cached for the life of the process.

use alloc::boxed::Box;
use core::any::TypeId;

use std::sync::{PoisonError, RwLock};

use wr_reflect::info::{NamedField, StructInfo, TypeInfo};
use wr_utils::TypeIdMap;

use crate::nullable::NullableShape;
use crate::tag::{self, FieldName};

/// The resolved description of one struct field.
#[derive(Clone, Debug)]
pub struct FieldSchema {
    index: usize,
    name: &'static str,
    response_name: FieldName,
    input_name: FieldName,
    optional: bool,
    visible: bool,
    embedded: bool,
    field: &'static NamedField,
}

impl FieldSchema {
    /// Position of the field in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The declared field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn response_name(&self) -> &FieldName {
        &self.response_name
    }

    #[inline]
    pub fn input_name(&self) -> &FieldName {
        &self.input_name
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The type info of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.field.type_info()
    }

    /// The reflected field this schema was resolved from.
    #[inline]
    pub fn field(&self) -> &'static NamedField {
        self.field
    }
}

/// The resolved fields of a struct type, in declaration order.
#[derive(Debug)]
pub struct StructSchema {
    type_path: &'static str,
    fields: Box<[FieldSchema]>,
    nullable: Option<NullableShape>,
}

static SCHEMAS: RwLock<TypeIdMap<&'static StructSchema>> = RwLock::new(TypeIdMap::new());

impl StructSchema {
    /// Returns the cached schema of a struct type, building it on first use.
    pub fn of(info: &'static StructInfo) -> &'static StructSchema {
        let type_id = info.ty_id();

        let found = SCHEMAS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match found {
            Some(schema) => schema,
            None => Self::insert(type_id, Self::build(info)),
        }
    }

    #[inline(never)]
    fn insert(type_id: TypeId, schema: StructSchema) -> &'static StructSchema {
        let mut guard = SCHEMAS.write().unwrap_or_else(PoisonError::into_inner);
        *guard.get_or_insert(type_id, || Box::leak(Box::new(schema)))
    }

    fn build(info: &'static StructInfo) -> StructSchema {
        log::trace!("building field schema of `{}`", info.type_path());

        let fields = info
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let input = tag::input_name(field);
                FieldSchema {
                    index,
                    name: field.name(),
                    response_name: tag::response_name(field),
                    input_name: input.name,
                    optional: input.optional,
                    visible: field.is_visible(),
                    embedded: field.is_embedded(),
                    field,
                }
            })
            .collect();

        StructSchema {
            type_path: info.type_path(),
            fields,
            nullable: NullableShape::of(info),
        }
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldSchema> {
        self.fields.iter()
    }

    /// The field positions if the type is a nullable wrapper.
    #[inline]
    pub fn nullable(&self) -> Option<NullableShape> {
        self.nullable
    }
}

#[cfg(test)]
mod tests {
    use wr_reflect::Reflect;
    use wr_reflect::info::Typed;

    use super::StructSchema;
    use crate::tag::FieldName;

    #[derive(Reflect)]
    struct Account {
        #[reflect(tag(db = "account_id"))]
        pub id: i64,
        #[reflect(tag(db = "account_name", request = "display_name,optional"))]
        pub name: String,
        secret: String,
    }

    #[test]
    fn resolves_once_per_type() {
        let info = Account::type_info().as_struct().unwrap();
        let schema = StructSchema::of(info);
        assert!(core::ptr::eq(schema, StructSchema::of(info)));
        assert_eq!(schema.fields().len(), 3);

        let id = &schema.fields()[0];
        assert_eq!(id.response_name(), &FieldName::Named("id".into()));

        let name = &schema.fields()[1];
        assert_eq!(name.index(), 1);
        assert_eq!(name.response_name(), &FieldName::Named("account_name".into()));
        assert_eq!(name.input_name(), &FieldName::Named("display_name".into()));
        assert!(name.is_optional());
        assert!(name.type_info().type_is::<String>());

        let secret = &schema.fields()[2];
        assert!(!secret.is_visible());
        assert!(!secret.is_embedded());

        assert!(schema.nullable().is_none());
    }
}
