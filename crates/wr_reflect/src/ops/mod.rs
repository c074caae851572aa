//! Kind-specific access to reflected values.
//!
//! - [`Struct`]: named fields in declaration order (`struct A { .. }`).
//! - [`List`]: ordered elements (`Vec<T>`, `[T; N]`).
//! - [`Map`]: key/value entries (`HashMap`, `BTreeMap`).
//! - [`Pointer`]: zero or one pointee (`Option<T>`, `Box<T>`, `Arc<T>`).
//! - [`Scalar`]: a borrowed view of a leaf value.
//!
//! [`ReflectRef`] and [`ReflectMut`] select one of them for a value.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use scalar::Scalar;
pub use struct_ops::{Struct, StructFieldIter};
