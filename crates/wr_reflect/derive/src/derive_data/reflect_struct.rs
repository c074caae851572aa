use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Member, Visibility, ext::IdentExt, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A field of a struct with named fields.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// The field name without the `r#` prefix.
    pub name: String,
}

impl StructField<'_> {
    /// `self.#member`
    #[inline]
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => unreachable!("unnamed fields are rejected while parsing"),
        }
    }

    /// Only `pub` fields are visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_))
    }
}

/// A struct with named fields (or a unit struct).
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let type_attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .map(|field| {
                        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                        let name = match &field.ident {
                            Some(ident) => ident.unraw().to_string(),
                            None => unreachable!("named fields carry an ident"),
                        };
                        Ok(StructField { data: field, attrs, name })
                    })
                    .collect::<syn::Result<Vec<_>>>()?,
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) => {
                    return Err(syn::Error::new(
                        unnamed.span(),
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let mut meta = ReflectMeta::new(type_attrs, &input.ident, &input.generics);
        meta.set_active_types(fields.iter().map(|field| &field.data.ty));

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Generates the `TypeInfo` expression.
    ///
    /// ```ignore
    /// TypeInfo::Struct(StructInfo::new::<Self>(&[
    ///     NamedField::new::<FieldType>("name")
    ///         .with_visibility(true)
    ///         .with_embedded(false)
    ///         .with_tags(FieldTags::new(&[("db", "user_name")])),
    /// ]))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let wr_reflect_path = self.meta.wr_reflect_path();
        let type_info_ = crate::path::type_info_(wr_reflect_path);
        let struct_info_ = crate::path::struct_info_(wr_reflect_path);
        let named_field_ = crate::path::named_field_(wr_reflect_path);
        let field_tags_ = crate::path::field_tags_(wr_reflect_path);

        let fields = self.fields.iter().map(|field| {
            let ty = &field.data.ty;
            let name = &field.name;
            let visible = field.is_visible();
            let embedded = field.attrs.embedded;

            let with_tags = if field.attrs.tags.is_empty() {
                crate::utils::empty()
            } else {
                let tags = field.attrs.tags.iter().map(|(key, value)| quote!((#key, #value)));
                quote! {
                    .with_tags(#field_tags_::new(&[ #(#tags),* ]))
                }
            };

            quote! {
                #named_field_::new::<#ty>(#name)
                    .with_visibility(#visible)
                    .with_embedded(#embedded)
                    #with_tags
            }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[ #(#fields),* ]))
        }
    }
}
