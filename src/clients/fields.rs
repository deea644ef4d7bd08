//! Sparse field selection.
//!
//! Some Graph API fields are only returned when asked for by name. Result
//! types that need them declare their field list through [`FieldSelection`].

/// A result type with an explicit `fields=` projection.
///
/// # Example
///
/// ```rust
/// use facebook_graph::clients::{fields_for, FieldSelection};
///
/// struct Summary;
///
/// impl FieldSelection for Summary {
///     const FIELDS: &'static [&'static str] = &["id", "created_time"];
/// }
///
/// assert_eq!(fields_for::<Summary>(), vec!["id", "created_time"]);
/// ```
pub trait FieldSelection {
    /// Field names in the order they are requested.
    const FIELDS: &'static [&'static str];
}

/// Returns the field names declared by `T`, in declaration order.
///
/// Names are not deduplicated.
#[must_use]
pub fn fields_for<T: FieldSelection>() -> Vec<&'static str> {
    T::FIELDS.to_vec()
}
