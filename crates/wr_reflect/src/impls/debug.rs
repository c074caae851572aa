use core::fmt;

use crate::ops::{List, Map, Pointer, Struct};

/// The default `reflect_debug` of structs: `Name { field: value, .. }`.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (index, value) in dyn_struct.iter_fields().enumerate() {
        if let Some(name) = dyn_struct.name_at(index) {
            debug.field(name, &value);
        }
    }
    debug.finish()
}

/// The default `reflect_debug` of lists: `[a, b, ..]`.
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(dyn_list.iter()).finish()
}

/// The default `reflect_debug` of maps: `{k: v, ..}`.
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(dyn_map.iter()).finish()
}

/// The default `reflect_debug` of pointers: the pointee, or `null`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.get() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str("null"),
    }
}
