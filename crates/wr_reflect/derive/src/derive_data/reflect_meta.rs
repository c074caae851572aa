use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, ImplGenerics, Path, Token, Type, TypeGenerics};
use syn::{punctuated::Punctuated, spanned::Spanned};

use super::TypeAttributes;
use crate::utils::StringExpr;

/// Type level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    wr_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types that mention a type parameter, in declaration order.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("wr_reflect_path", &self.wr_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            wr_reflect_path: crate::path::wr_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Records the field types that need bounds in generic impls.
    pub(super) fn set_active_types<'t>(&mut self, types: impl Iterator<Item = &'t Type>) {
        let params = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<Ident>>();
        if params.is_empty() {
            return;
        }

        for ty in types {
            if is_any_ident_in_token_stream(&params, ty.to_token_stream())
                && !self.active_types.contains(ty)
            {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn wr_reflect_path(&self) -> &Path {
        &self.wr_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// Whether the type has type or const parameters.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self
            .generics
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.ident.to_token_stream()
    }

    pub fn type_ident(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(path) => match path.segments.last() {
                Some(segment) => StringExpr::from(&segment.ident),
                None => StringExpr::from(self.ident),
            },
            None => StringExpr::from(self.ident),
        }
    }

    pub fn module_path(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len().saturating_sub(1))
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                StringExpr::from_lit(&syn::LitStr::new(&module, path.span()))
            }
            None => StringExpr::Const(quote! { ::core::module_path!() }),
        }
    }

    /// `module::Ident<A, B>` with the full paths of the parameters.
    pub fn type_path(&self) -> StringExpr {
        let type_path_ = crate::path::type_path_(&self.wr_reflect_path);
        let head = [self.module_path(), StringExpr::from_str("::"), self.type_ident()];
        let params = self.reduce_generics(|ident| {
            StringExpr::Borrowed(quote! { <#ident as #type_path_>::type_path() })
        });
        StringExpr::from_iter(head.into_iter().chain(params), &self.wr_reflect_path)
    }

    /// `Ident<A, B>` with the short names of the parameters.
    pub fn type_name(&self) -> StringExpr {
        let type_path_ = crate::path::type_path_(&self.wr_reflect_path);
        let params = self.reduce_generics(|ident| {
            StringExpr::Borrowed(quote! { <#ident as #type_path_>::type_name() })
        });
        StringExpr::from_iter(core::iter::once(self.type_ident()).chain(params), &self.wr_reflect_path)
    }

    /// `["<", A, ", ", B, ">"]`, or nothing without type or const parameters.
    fn reduce_generics(&self, mut type_param: impl FnMut(&Ident) -> StringExpr) -> Vec<StringExpr> {
        let macro_utils_ = crate::path::macro_utils_(&self.wr_reflect_path);

        let mut params = Vec::new();
        for param in &self.generics.params {
            let expr = match param {
                GenericParam::Type(param) => type_param(&param.ident),
                GenericParam::Const(param) => {
                    let ident = &param.ident;
                    StringExpr::Owned(quote! { #macro_utils_::ToString::to_string(&#ident) })
                }
                GenericParam::Lifetime(_) => continue,
            };
            if !params.is_empty() {
                params.push(StringExpr::from_str(", "));
            }
            params.push(expr);
        }

        if params.is_empty() {
            return params;
        }
        params.insert(0, StringExpr::from_str("<"));
        params.push(StringExpr::from_str(">"));
        params
    }

    /// Returns `impl_generics`, `ty_generics` and the extended `where_clause`.
    ///
    /// - `Self: Any + Send + Sync` when there are type parameters, or
    ///   `Self: 'static` when there are only lifetimes.
    /// - `T: TypePath` for every type parameter.
    /// - `FieldType: Reflect + Typed` for field types mentioning a type
    ///   parameter, plus `GetTypeMeta` if `add_get_type_meta`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
        add_get_type_meta: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics;
        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();

        let type_path_ = crate::path::type_path_(&self.wr_reflect_path);
        predicates.extend(generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #type_path_)
        }));

        if add_reflect_typed {
            let reflect_ = crate::path::reflect_(&self.wr_reflect_path);
            let typed_ = crate::path::typed_(&self.wr_reflect_path);
            let get_type_meta = if add_get_type_meta {
                let get_type_meta_ = crate::path::get_type_meta_(&self.wr_reflect_path);
                quote!( + #get_type_meta_ )
            } else {
                crate::utils::empty()
            };

            predicates.extend(self.active_types.iter().map(|ty| {
                quote!(#ty: #reflect_ + #typed_ #get_type_meta)
            }));
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
    token_stream.into_iter().any(|token_tree| match token_tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => is_any_ident_in_token_stream(idents, group.stream()),
        _ => false,
    })
}
