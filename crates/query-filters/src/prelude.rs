//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types so library consumers can bring in
//! everything they need with a single use statement.
//!
//! # Example
//!
//! ```
//! use query_filters_rs::prelude::*;
//!
//! // Now you have access to:
//! // - Filter, ColumnType, FilterOperator (filter model)
//! // - build_query_params, FilterParams (query construction)
//! // - expand_all, expand_time_filter (time expansion)
//! // - IdSource, UuidSource, SequenceSource (id generation)
//! // - FilterError, FilterResult (validation errors)
//! ```

// Filter model
pub use crate::filter::{search_by_id_filters, ColumnType, Filter, FilterOperator};

// Query construction
pub use crate::params::{build_query_params, FilterParams};

// Time expansion
pub use crate::expand::{expand_all, expand_time_filter};

// Day boundaries
pub use crate::date::{end_of_day, start_of_day};

// Id generation
pub use crate::id::{IdSource, SequenceSource, UuidSource};

// Error types
pub use crate::error::{FilterError, FilterResult};
