use crate::info::Typed;

/// Creates a type trait for the concrete type `T`.
///
/// ```ignore
/// meta.insert_trait::<TypeTraitDefault>(FromType::<Foo>::from_type());
/// ```
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
