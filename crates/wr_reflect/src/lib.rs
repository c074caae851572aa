//! Runtime reflection for the response engine.
//!
//! Types opt in with `#[derive(Reflect)]` (structs) or through the impls in
//! [`impls`] (scalars, strings, sequences, maps and pointer-like wrappers).
//! A reflected value can be observed as one of five [kinds](info::ReflectKind):
//!
//! - `Struct`: named fields with visibility, embedding and string tags.
//! - `List`: ordered elements.
//! - `Map`: key/value entries.
//! - `Pointer`: zero or one pointee (`Option`, `Box`, `Arc`).
//! - `Scalar`: leaf values.
//!
//! Per-type behavior ("capabilities") is attached through the
//! [`TypeRegistry`](registry::TypeRegistry) as type traits, usually generated
//! with [`reflect_trait`](derive::reflect_trait).
//!
//! ```
//! use wr_reflect::{Reflect, info::Typed, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! pub struct User {
//!     #[reflect(tag(db = "user_id"))]
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! let user = User { id: 7, name: "ana".into() };
//! let info = User::type_info().as_struct().unwrap();
//! assert_eq!(info.field("id").unwrap().tags().get("db"), Some("user_id"));
//!
//! let ReflectRef::Struct(value) = user.reflect_ref() else { unreachable!() };
//! assert_eq!(value.field("id").unwrap().downcast_ref::<i64>(), Some(&7));
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// `wr_macro_utils::Manifest` resolves to `::wr_reflect` inside this crate,
// so `wr_reflect` has to be an alias of `crate`.
extern crate self as wr_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use wr_reflect_derive as derive;

pub use wr_reflect_derive::{Reflect, reflect_trait};
