//! Query-parameter construction.
//!
//! The composition entry point of the pipeline: merge filter lists, expand
//! time filters, and serialize the result into the single `filters` query
//! parameter the listing endpoints accept.

use serde::{Deserialize, Serialize};

use crate::expand::expand_all;
use crate::filter::Filter;

/// The filter portion of a listing request's query parameters.
///
/// When no filters remain after normalization, `filters` is `None` and the
/// key is omitted from serialized output entirely, so the transport layer
/// does not send a spurious filter constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// The combined filter list as compact JSON array text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl FilterParams {
    /// Returns true when no filter constraint is carried.
    pub fn is_empty(&self) -> bool {
        self.filters.is_none()
    }

    /// Renders the parameters in form-urlencoded format for a request URL.
    ///
    /// Returns the empty string when no filter constraint is carried.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).expect("query serialization should not fail")
    }
}

/// Builds the `filters` query parameter from up to two filter lists.
///
/// The primary list (typically user-constructed) is expanded first, then the
/// additional list (typically derived, e.g. from
/// [`search_by_id_filters`](crate::filter::search_by_id_filters)); an absent
/// or empty list contributes nothing. The combined sequence is serialized as
/// a compact JSON array in that order.
///
/// Validity is a producer-side contract: invalid filters are not dropped
/// here, they serialize as-is (gate them with
/// [`Filter::is_valid`](crate::filter::Filter::is_valid) before calling).
///
/// # Examples
///
/// ```
/// use query_filters_rs::filter::{ColumnType, Filter, FilterOperator};
/// use query_filters_rs::params::build_query_params;
///
/// assert!(build_query_params(None, None).is_empty());
///
/// let filters = vec![Filter::new("1", "name", ColumnType::String, FilterOperator::Equal, "bob")];
/// let params = build_query_params(Some(&filters), None);
/// assert_eq!(
///     params.filters.as_deref(),
///     Some(r#"[{"id":"1","field":"name","type":"string","operator":"=","key":"","value":"bob"}]"#)
/// );
/// ```
pub fn build_query_params(
    primary: Option<&[Filter]>,
    additional: Option<&[Filter]>,
) -> FilterParams {
    let mut combined: Vec<Filter> = Vec::new();

    for list in [primary, additional].into_iter().flatten() {
        if !list.is_empty() {
            combined.extend(expand_all(list));
        }
    }

    if combined.is_empty() {
        return FilterParams::default();
    }

    FilterParams {
        filters: Some(
            serde_json::to_string(&combined).expect("filter serialization should not fail"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ColumnType, FilterOperator};

    // Test: absent lists yield no filters key at all
    #[test]
    fn test_absent_lists_yield_empty_params() {
        let params = build_query_params(None, None);
        assert!(params.is_empty());
        assert_eq!(params.filters, None);
    }

    // Test: empty lists behave like absent lists
    #[test]
    fn test_empty_lists_yield_empty_params() {
        let params = build_query_params(Some(&[]), Some(&[]));
        assert!(params.is_empty());
    }

    // Test: empty params serialize to an object with no filters key
    #[test]
    fn test_empty_params_omit_key_in_json() {
        let json = serde_json::to_string(&FilterParams::default()).unwrap();
        assert_eq!(json, "{}");
        assert_eq!(FilterParams::default().to_query_string(), "");
    }

    // Test: a single string filter serializes to the exact wire text
    #[test]
    fn test_single_filter_wire_text() {
        let filters = vec![Filter::new(
            "1",
            "name",
            ColumnType::String,
            FilterOperator::Equal,
            "bob",
        )];
        let params = build_query_params(Some(&filters), None);
        assert_eq!(
            params.filters.as_deref(),
            Some(r#"[{"id":"1","field":"name","type":"string","operator":"=","key":"","value":"bob"}]"#)
        );
    }

    // Test: primary results precede additional results
    #[test]
    fn test_primary_precedes_additional() {
        let primary = vec![Filter::new(
            "p",
            "name",
            ColumnType::String,
            FilterOperator::Equal,
            "bob",
        )];
        let additional = vec![Filter::new(
            "a",
            "id",
            ColumnType::String,
            FilterOperator::Equal,
            "trace-1",
        )];
        let params = build_query_params(Some(&primary), Some(&additional));
        let decoded: Vec<Filter> =
            serde_json::from_str(params.filters.as_deref().unwrap()).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].id, "p");
        assert_eq!(decoded[1].id, "a");
    }

    // Test: both lists are expanded before merging
    #[test]
    fn test_time_filters_expanded_in_both_lists() {
        let primary = vec![Filter::new(
            "p",
            "start_time",
            ColumnType::Time,
            FilterOperator::Equal,
            "2026-03-15",
        )];
        let additional = vec![Filter::new(
            "a",
            "id",
            ColumnType::String,
            FilterOperator::Equal,
            "trace-1",
        )];
        let params = build_query_params(Some(&primary), Some(&additional));
        let decoded: Vec<Filter> =
            serde_json::from_str(params.filters.as_deref().unwrap()).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].operator, FilterOperator::GreaterThan);
        assert_eq!(decoded[1].operator, FilterOperator::LessThan);
        assert_eq!(decoded[2].id, "a");
    }

    // Test: identical inputs produce byte-identical output
    #[test]
    fn test_build_is_deterministic() {
        let filters = vec![
            Filter::new(
                "1",
                "start_time",
                ColumnType::Time,
                FilterOperator::GreaterOrEqual,
                "2026-03-15",
            ),
            Filter::new("2", "name", ColumnType::String, FilterOperator::Contains, "eval"),
        ];
        let first = build_query_params(Some(&filters), None);
        let second = build_query_params(Some(&filters), None);
        assert_eq!(first, second);
    }

    // Test: the urlencoded rendering carries the filters key when present
    #[test]
    fn test_to_query_string_encodes_filters() {
        let filters = vec![Filter::new(
            "1",
            "name",
            ColumnType::String,
            FilterOperator::Equal,
            "bob",
        )];
        let query = build_query_params(Some(&filters), None).to_query_string();
        assert!(query.starts_with("filters="));
        assert!(query.contains("%22name%22"));
    }
}
