use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level attributes.
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Page {
///     #[reflect(embed)]
///     pub base: Base,
///     #[reflect(tag(response = "title", request = "title,optional"))]
///     pub name: String,
/// }
/// ```
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(embed)]`
    pub embedded: bool,
    /// `#[reflect(tag(key = "value", ...))]`, in declaration order.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("embed") {
                    this.embedded = true;
                    Ok(())
                } else if meta.path.is_ident("tag") {
                    meta.parse_nested_meta(|tag| {
                        let key = tag.path.require_ident()?.to_string();
                        let value: LitStr = tag.value()?.parse()?;
                        if this.tags.iter().any(|(k, _)| *k == key) {
                            return Err(tag.error(format!("duplicate tag `{key}`")));
                        }
                        this.tags.push((key, value));
                        Ok(())
                    })
                } else {
                    Err(meta.error("unsupported field attribute, expected `embed` or `tag(...)`"))
                }
            })?;
        }

        Ok(this)
    }
}
