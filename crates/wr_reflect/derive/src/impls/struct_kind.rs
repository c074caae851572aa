use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{impl_trait_get_type_meta, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct));
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, get_registry_dependencies(info));

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();
    let option_ = OptionFP.to_token_stream();

    let wr_reflect_path = meta.wr_reflect_path();
    let struct_ = crate::path::struct_(wr_reflect_path);
    let reflect_ = crate::path::reflect_(wr_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(wr_reflect_path);

    let field_names = info.fields().iter().map(|field| &field.name).collect::<Vec<_>>();
    let members = info.fields().iter().map(|field| field.member()).collect::<Vec<_>>();
    let field_indices = (0..members.len()).collect::<Vec<usize>>();
    let field_count = members.len();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, false);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `GetTypeMeta::register_dependencies` tokens, registering every field type.
fn get_registry_dependencies(info: &ReflectStruct) -> TokenStream {
    let wr_reflect_path = info.meta().wr_reflect_path();
    let type_registry_ = crate::path::type_registry_(wr_reflect_path);

    if info.fields().is_empty() {
        return crate::utils::empty();
    }

    let field_types = info.fields().iter().map(|field| &field.data.ty);

    quote! {
        fn register_dependencies(registry: &mut #type_registry_) {
            #(registry.register::<#field_types>();)*
        }
    }
}
