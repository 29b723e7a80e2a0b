//! Time-filter expansion.
//!
//! A single time filter authored against a date-only value is reinterpreted as
//! one or two boundary filters covering the full day:
//!
//! | input operator | output |
//! |---|---|
//! | `=`          | `>` start-of-day AND `<` end-of-day (conjunctive pair) |
//! | `>` or `<=`  | same operator, end-of-day |
//! | `<` or `>=`  | same operator, start-of-day |
//! | anything else | unchanged |
//!
//! Expansion copies filters rather than mutating them; `id`, `field`, `type`
//! and `key` are preserved, only `operator` and `value` change.

use crate::date::{end_of_day, start_of_day};
use crate::filter::{ColumnType, Filter, FilterOperator};

/// Expands one time filter into its day-boundary form.
///
/// Returns one or two filters per the table above. Filters whose operator is
/// not a day-boundary comparison, and filters whose value is not a
/// recognizable date, come back unchanged as a single-element list.
///
/// # Examples
///
/// ```
/// use query_filters_rs::expand::expand_time_filter;
/// use query_filters_rs::filter::{ColumnType, Filter, FilterOperator};
///
/// let filter = Filter::new("1", "start_time", ColumnType::Time, FilterOperator::Equal, "2026-03-15");
/// let expanded = expand_time_filter(&filter);
/// assert_eq!(expanded.len(), 2);
/// assert_eq!(expanded[0].operator, FilterOperator::GreaterThan);
/// assert_eq!(expanded[0].value, "2026-03-15T00:00:00.000Z");
/// assert_eq!(expanded[1].operator, FilterOperator::LessThan);
/// assert_eq!(expanded[1].value, "2026-03-15T23:59:59.999Z");
/// ```
pub fn expand_time_filter(filter: &Filter) -> Vec<Filter> {
    match filter.operator {
        FilterOperator::Equal => {
            match (start_of_day(&filter.value), end_of_day(&filter.value)) {
                (Some(start), Some(end)) => vec![
                    rebound(filter, FilterOperator::GreaterThan, start),
                    rebound(filter, FilterOperator::LessThan, end),
                ],
                _ => vec![filter.clone()],
            }
        }
        FilterOperator::GreaterThan | FilterOperator::LessOrEqual => {
            match end_of_day(&filter.value) {
                Some(end) => vec![rebound(filter, filter.operator.clone(), end)],
                None => vec![filter.clone()],
            }
        }
        FilterOperator::LessThan | FilterOperator::GreaterOrEqual => {
            match start_of_day(&filter.value) {
                Some(start) => vec![rebound(filter, filter.operator.clone(), start)],
                None => vec![filter.clone()],
            }
        }
        _ => vec![filter.clone()],
    }
}

/// Expands every time filter in a list and flattens the result.
///
/// Non-time filters pass through unchanged. Order is preserved: the expansion
/// of each input filter appears contiguously at that filter's original
/// relative position, with the `>` boundary preceding the `<` boundary for
/// equality expansions.
pub fn expand_all(filters: &[Filter]) -> Vec<Filter> {
    filters
        .iter()
        .flat_map(|filter| {
            if filter.column_type == ColumnType::Time {
                expand_time_filter(filter)
            } else {
                vec![filter.clone()]
            }
        })
        .collect()
}

/// Copies a filter with a new operator and value, keeping everything else.
fn rebound(filter: &Filter, operator: FilterOperator, value: String) -> Filter {
    Filter {
        operator,
        value,
        ..filter.clone()
    }
}
