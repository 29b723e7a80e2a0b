//! Client-side filter normalization for search/listing API requests.
//!
//! UI layers produce raw [`Filter`](filter::Filter) values; this crate
//! validates them (advisory), expands ambiguous date-only time filters into
//! day-boundary pairs, merges filters from multiple sources, and serializes
//! the result into the single `filters` query parameter the backend's listing
//! endpoints accept. The transport layer is out of scope: the output is a
//! plain value to merge into an outgoing request.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use query_filters_rs::prelude::*;
//!
//! let filters = vec![
//!     Filter::new("1", "start_time", ColumnType::Time, FilterOperator::Equal, "2026-03-15"),
//! ];
//! let params = build_query_params(Some(&filters), None);
//! assert!(!params.is_empty());
//! ```

pub mod date;
pub mod error;
pub mod expand;
pub mod filter;
pub mod id;
pub mod params;
pub mod prelude;
