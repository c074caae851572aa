use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, Token, parenthesized, punctuated::Punctuated};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level attributes.
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(default, type_path = "app::models::User")]
/// #[reflect(type_trait = (ReflectDisplay, ReflectRelatedLinker))]
/// struct User { /* ... */ }
/// ```
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(default)]`: the type implements `Default`.
    pub default: Option<Span>,
    /// `#[reflect(type_path = "...")]`, without generics.
    pub type_path: Option<Path>,
    /// `#[reflect(type_trait = ...)]`, inserted into `get_type_meta`.
    pub extra_type_trait: Vec<Path>,
}

impl core::fmt::Debug for TypeAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeAttributes")
            .field("default", &self.default.is_some())
            .field("type_path", &self.type_path.is_some())
            .field("extra_type_trait", &self.extra_type_trait.len())
            .finish()
    }
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    this.default = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    this.type_path = Some(lit.parse::<Path>()?);
                    Ok(())
                } else if meta.path.is_ident("type_trait") {
                    let value = meta.value()?;
                    if value.peek(syn::token::Paren) {
                        let content;
                        parenthesized!(content in value);
                        let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                        this.extra_type_trait.extend(paths);
                    } else {
                        this.extra_type_trait.push(value.parse()?);
                    }
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `default`, `type_path` or `type_trait`"))
                }
            })?;
        }

        Ok(this)
    }
}
