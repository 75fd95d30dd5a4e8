use super::Table;
use crate::value::Value;

/// A Rust type mapped to a table.
///
/// Usually implemented by `#[derive(Entity)]`. `Fields` is a struct of
/// [`Field`](crate::Field) handles, one per mapped field, handed to the
/// predicate closures of the statement builders:
///
/// ```ignore
/// sleet.select::<User>().r#where(|u| u.age.gt(18) & u.name.like("A%"))
/// ```
pub trait Entity {
    type Fields: Clone;

    /// The table descriptor. Built once and shared.
    fn table() -> &'static Table;

    /// Field handles for predicates and ordering.
    fn fields() -> Self::Fields;

    /// The current value of a mapped property, or `None` if the property
    /// is not mapped.
    fn value(&self, property: &str) -> Option<Value>;
}
