//! Error types for filter validation.

use thiserror::Error;

/// A specialized Result type for filter validation.
pub type FilterResult<T> = Result<T, FilterError>;

/// Reasons a filter is not eligible for submission.
///
/// The normalization pipeline itself never returns these: every pipeline
/// operation is total over its input domain. They exist for the advisory
/// [`Filter::validate`](crate::filter::Filter::validate) surface, so UI layers
/// can explain why a filter was rejected instead of silently disabling it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The filter has no comparison value.
    #[error("filter on \"{field}\" has no value")]
    MissingValue {
        /// The target attribute of the incomplete filter.
        field: String,
    },

    /// A dictionary-type filter has no key selector.
    #[error("dictionary filter on \"{field}\" has no key")]
    MissingKey {
        /// The target attribute of the incomplete filter.
        field: String,
    },
}
