use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemTrait, parse_macro_input, spanned::Spanned};

use crate::path::fp::{CloneFP, OptionFP, ResultFP};

/// Generates `Reflect{Trait}` for the annotated trait, see [`reflect_trait`](crate::reflect_trait).
pub(crate) fn impl_reflect_trait(input: TokenStream) -> TokenStream {
    let item_trait = parse_macro_input!(input as ItemTrait);

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new(
            item_trait.generics.span(),
            "`reflect_trait` does not support generic traits",
        )
        .into_compile_error()
        .into();
    }

    let wr_reflect_path = crate::path::wr_reflect();
    let reflect_ = crate::path::reflect_(&wr_reflect_path);
    let typed_ = crate::path::typed_(&wr_reflect_path);
    let from_type_ = crate::path::from_type_(&wr_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(&wr_reflect_path);

    let vis = &item_trait.vis;
    let trait_ident = &item_trait.ident;
    let reflect_trait_ident = format_ident!("Reflect{}", trait_ident);

    let struct_doc = format!(
        " Casts `dyn Reflect` to `dyn {trait_ident}` for types registered with this type trait."
    );
    let get_doc = format!(" Casts `&dyn Reflect` to `&dyn {trait_ident}`.");
    let get_mut_doc = format!(" Casts `&mut dyn Reflect` to `&mut dyn {trait_ident}`.");
    let get_boxed_doc = format!(
        " Casts `Box<dyn Reflect>` to `Box<dyn {trait_ident}>`, returning the box unchanged on mismatch."
    );

    TokenStream::from(quote! {
        #item_trait

        #[doc = #struct_doc]
        #[derive(#CloneFP)]
        #vis struct #reflect_trait_ident {
            get_func: fn(&dyn #reflect_) -> #OptionFP<&dyn #trait_ident>,
            get_mut_func: fn(&mut dyn #reflect_) -> #OptionFP<&mut dyn #trait_ident>,
            get_boxed_func: fn(#macro_utils_::Box<dyn #reflect_>) -> #ResultFP<
                #macro_utils_::Box<dyn #trait_ident>,
                #macro_utils_::Box<dyn #reflect_>,
            >,
        }

        impl #reflect_trait_ident {
            #[doc = #get_doc]
            #[inline]
            pub fn get<'a>(&self, value: &'a dyn #reflect_) -> #OptionFP<&'a dyn #trait_ident> {
                (self.get_func)(value)
            }

            #[doc = #get_mut_doc]
            #[inline]
            pub fn get_mut<'a>(&self, value: &'a mut dyn #reflect_) -> #OptionFP<&'a mut dyn #trait_ident> {
                (self.get_mut_func)(value)
            }

            #[doc = #get_boxed_doc]
            #[inline]
            pub fn get_boxed(
                &self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<#macro_utils_::Box<dyn #trait_ident>, #macro_utils_::Box<dyn #reflect_>> {
                (self.get_boxed_func)(value)
            }
        }

        impl<T: #trait_ident + #reflect_ + #typed_> #from_type_<T> for #reflect_trait_ident {
            fn from_type() -> Self {
                Self {
                    get_func: |value| {
                        <dyn #reflect_>::downcast_ref::<T>(value).map(|value| value as &dyn #trait_ident)
                    },
                    get_mut_func: |value| {
                        <dyn #reflect_>::downcast_mut::<T>(value).map(|value| value as &mut dyn #trait_ident)
                    },
                    get_boxed_func: |value| {
                        <dyn #reflect_>::downcast::<T>(value)
                            .map(|value| value as #macro_utils_::Box<dyn #trait_ident>)
                    },
                }
            }
        }
    })
}
