//! See following macros:
//!
//! - [`Reflect`]
//! - [`reflect_trait`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Reflect`, `Struct`
/// and `GetTypeMeta` for a struct with named fields (or a unit struct).
/// Tuple structs, enums and unions are rejected.
///
/// Field visibility is recorded: only `pub` fields are visible.
///
/// ## Field Attributes
///
/// `embed` marks a field whose own fields are promoted into the parent,
/// and `tag(key = "value", ...)` attaches string tags that can be read back
/// from the `NamedField` of the type info.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Article {
///     #[reflect(embed)]
///     pub base: Base,
///     #[reflect(tag(response = "title", db = "article_title"))]
///     pub name: String,
///     #[reflect(tag(response = "-"))]
///     pub secret: String,
/// }
/// ```
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::models::Article")]
/// struct Article { /* ... */ }
/// ```
///
/// This path does not need to include generics (they are appended).
///
/// ## Type Traits
///
/// `#[reflect(default)]` inserts `TypeTraitDefault` (the type must implement
/// `Default`), and `#[reflect(type_trait = ...)]` inserts any type trait that
/// implements `FromType<Self>`:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(default, type_trait = ReflectLazyLoad)]
/// struct A { /* ... */ }
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = (ReflectDisplay, ReflectRelatedLinker))]
/// struct B { /* ... */ }
/// ```
///
/// These attributes can only be applied at the type level.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_struct = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&reflect_struct);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}

/// Impl `TypeTrait` for specific trait with a new struct.
///
/// This macro will generate a `Reflect{trait_name}` struct, for example
/// `ReflectLazyLoad` for `LazyLoad`.
///
/// It only contains three methods:
/// - `get`: cast `&dyn Reflect` to `&dyn {trait_name}`
/// - `get_mut`: cast `&mut dyn Reflect` to `&mut dyn {trait_name}`
/// - `get_boxed`: cast `Box<dyn Reflect>` to `Box<dyn {trait_name}>`
///
/// ## Example
///
/// ```ignore
/// #[reflect_trait]
/// pub trait Describe {
///     fn describe(&self) -> String;
/// }
///
/// impl Describe for Article { /* ... */ }
///
/// let mut registry = TypeRegistry::new();
/// registry.register_type_trait::<Article, ReflectDescribe>();
///
/// let value: &dyn Reflect = &article;
/// let describe = registry.get_type_trait::<ReflectDescribe>(value.ty_id()).unwrap();
/// println!("{}", describe.get(value).unwrap().describe());
/// ```
#[proc_macro_attribute]
pub fn reflect_trait(_args: TokenStream, input: TokenStream) -> TokenStream {
    impls::impl_reflect_trait(input)
}
