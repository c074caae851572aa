//! Items used by the code generated from `wr_reflect_derive`.

pub mod macro_utils {
    pub use ::alloc::borrow::ToOwned;
    pub use ::alloc::boxed::Box;
    pub use ::alloc::string::ToString;

    pub use crate::impls::concat as __concat;
}
