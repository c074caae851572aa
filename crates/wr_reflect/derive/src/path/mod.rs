//! Paths of the `wr_reflect` items used by generated code.
//!
//! Everything goes through these helpers so that a change of module layout
//! in `wr_reflect` only has to be mirrored here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `wr_reflect` crate.
///
/// 1. For crates that depend on `wr_reflect`, `::wr_reflect` is returned.
/// 2. For crates that depend on `wr_core`, `::wr_core::reflect` is returned.
/// 3. Otherwise `::wr_reflect` is returned, which may be incorrect.
///
/// This reads the caller's manifest, so the path is passed around rather
/// than requested again.
pub(crate) fn wr_reflect() -> syn::Path {
    wr_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("wr_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;
mod registry;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_utils_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::Reflect
    }
}
