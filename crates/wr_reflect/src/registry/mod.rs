//! Per-type metadata and capabilities.
//!
//! - [`TypeTrait`]: a capability of a type, stored type-erased.
//! - [`FromType`]: builds a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`] plus the table of its type traits.
//! - [`GetTypeMeta`]: builds the `TypeMeta` of a type, implemented by the derive macro.
//! - [`TypeRegistry`]: the `TypeId -> TypeMeta` table consulted at runtime.
//! - [`TypeTraitDefault`]: creates a default instance of a type.
//!
//! New capabilities are usually declared with [`reflect_trait`], which generates
//! a `Reflect{Trait}` type trait casting `dyn Reflect` to `dyn Trait`.
//!
//! [`reflect_trait`]: crate::derive::reflect_trait
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitDefault;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
