//! Full paths of `core` items, usable directly in `quote!`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! full_path {
    ($name:ident => $($path:tt)+) => {
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote! { $($path)+ });
            }
        }
    };
}

full_path!(OptionFP => ::core::option::Option);
full_path!(ResultFP => ::core::result::Result);
full_path!(AnyFP => ::core::any::Any);
full_path!(SendFP => ::core::marker::Send);
full_path!(SyncFP => ::core::marker::Sync);
full_path!(CloneFP => ::core::clone::Clone);
