#![doc = include_str!("../README.md")]

pub use wr_codec as codec;
pub use wr_reflect as reflect;
pub use wr_respond as respond;
pub use wr_utils as utils;
