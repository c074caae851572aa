use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn type_info_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn reflect_kind_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::ReflectKind
    }
}

#[inline]
pub(crate) fn struct_info_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::StructInfo
    }
}

#[inline]
pub(crate) fn named_field_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::NamedField
    }
}

#[inline]
pub(crate) fn field_tags_(wr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #wr_reflect_path::info::FieldTags
    }
}
