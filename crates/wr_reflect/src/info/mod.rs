//! Static type descriptions.
//!
//! - [`TypePath`] / [`Typed`]: per-type static data, implemented by the derive macro.
//! - [`TypeInfo`]: the description of a type, one variant per [`ReflectKind`].
//! - [`NamedField`] and [`FieldTags`]: what the engine knows about a struct field.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldTags, NamedField};
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;
