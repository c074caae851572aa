use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_meta_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::registry::TypeMeta
    }
}

#[inline]
pub(crate) fn get_type_meta_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::registry::GetTypeMeta
    }
}

#[inline]
pub(crate) fn from_type_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::registry::FromType
    }
}

#[inline]
pub(crate) fn type_registry_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::registry::TypeRegistry
    }
}

#[inline]
pub(crate) fn type_trait_default_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::registry::TypeTraitDefault
    }
}
