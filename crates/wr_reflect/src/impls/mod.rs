//! Reflection impls for standard types, and helpers for writing impls.
//!
//! - scalars: `()`, `bool`, `char`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//! - strings: `String`, `&'static str`
//! - lists: `Vec<T>`, `[T; N]`
//! - maps: `std::collections::HashMap<K, V>`, `BTreeMap<K, V>`, `wr_utils::hash::HashMap<K, V>`
//! - pointers: `Option<T>`, `Box<T>`, `Arc<T>`
//!
//! [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`] and [`GenericTypePathCell`]
//! store the lazily built static data of `Typed` / `TypePath` impls.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;
mod list;
mod map;
mod pointer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use debug::{list_debug, map_debug, pointer_debug, struct_debug};

/// Concatenates string slices with a single allocation.
///
/// Used to build the type paths of generic types.
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for item in arr {
        res.push_str(item);
    }
    res
}
