//! Filter model types shared across the normalization pipeline.
//!
//! A [`Filter`] is a single comparison predicate authored in the UI and applied
//! by the downstream query engine: a target `field`, its column type, a
//! comparison operator, an optional `key` selector (for map-valued columns),
//! and the comparison value. Values are always carried as strings at this
//! layer; date values are ISO-date strings at the boundary.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FilterError, FilterResult};
use crate::id::IdSource;

/// Column type of the attribute a filter targets.
///
/// The set is open: types the backend introduces later deserialize into
/// [`ColumnType::Other`] and flow through the pipeline unchanged rather than
/// being rejected. Only [`ColumnType::Time`] and the two dictionary variants
/// carry special semantics (day-boundary expansion and the `key` requirement).
///
/// # Examples
///
/// ```
/// use query_filters_rs::filter::ColumnType;
///
/// let ty = ColumnType::NumberDictionary;
/// let json = serde_json::to_string(&ty).unwrap();
/// assert_eq!(json, "\"numberDictionary\"");
///
/// let unknown: ColumnType = serde_json::from_str("\"geo\"").unwrap();
/// assert_eq!(unknown, ColumnType::Other("geo".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Free-form text attribute.
    String,
    /// Numeric attribute.
    Number,
    /// Date/time attribute; equality and comparisons expand to day boundaries.
    Time,
    /// Elapsed-time attribute.
    Duration,
    /// List-valued attribute.
    List,
    /// Enumerated attribute.
    Category,
    /// Map-valued attribute; filters need a `key` selector into the map.
    Dictionary,
    /// Map-valued attribute with numeric values; also needs a `key` selector.
    NumberDictionary,
    /// A type this crate does not know about; passed through unchanged.
    Other(String),
}

impl ColumnType {
    /// Returns the wire representation of this column type.
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Time => "time",
            ColumnType::Duration => "duration",
            ColumnType::List => "list",
            ColumnType::Category => "category",
            ColumnType::Dictionary => "dictionary",
            ColumnType::NumberDictionary => "numberDictionary",
            ColumnType::Other(s) => s,
        }
    }

    /// Returns true for the map-valued variants that require a `key` selector.
    pub fn is_dictionary(&self) -> bool {
        matches!(self, ColumnType::Dictionary | ColumnType::NumberDictionary)
    }
}

impl From<String> for ColumnType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "string" => ColumnType::String,
            "number" => ColumnType::Number,
            "time" => ColumnType::Time,
            "duration" => ColumnType::Duration,
            "list" => ColumnType::List,
            "category" => ColumnType::Category,
            "dictionary" => ColumnType::Dictionary,
            "numberDictionary" => ColumnType::NumberDictionary,
            _ => ColumnType::Other(s),
        }
    }
}

impl From<&str> for ColumnType {
    fn from(s: &str) -> Self {
        ColumnType::from(s.to_string())
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ColumnType::from(String::deserialize(deserializer)?))
    }
}

/// Comparison operator of a filter.
///
/// Like [`ColumnType`], the set is open: operators this crate does not
/// recognize deserialize into [`FilterOperator::Other`] and pass through
/// expansion unchanged.
///
/// # Examples
///
/// ```
/// use query_filters_rs::filter::FilterOperator;
///
/// assert_eq!(FilterOperator::GreaterOrEqual.as_str(), ">=");
/// assert_eq!(FilterOperator::from("~"), FilterOperator::Other("~".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Equal,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `contains`
    Contains,
    /// `not_contains`
    NotContains,
    /// `starts_with`
    StartsWith,
    /// `ends_with`
    EndsWith,
    /// `is_empty`
    IsEmpty,
    /// `is_not_empty`
    IsNotEmpty,
    /// An operator this crate does not know about; passed through unchanged.
    Other(String),
}

impl FilterOperator {
    /// Returns the wire representation of this operator.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessOrEqual => "<=",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "not_contains",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
            FilterOperator::IsEmpty => "is_empty",
            FilterOperator::IsNotEmpty => "is_not_empty",
            FilterOperator::Other(s) => s,
        }
    }
}

impl From<String> for FilterOperator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "=" => FilterOperator::Equal,
            ">" => FilterOperator::GreaterThan,
            ">=" => FilterOperator::GreaterOrEqual,
            "<" => FilterOperator::LessThan,
            "<=" => FilterOperator::LessOrEqual,
            "contains" => FilterOperator::Contains,
            "not_contains" => FilterOperator::NotContains,
            "starts_with" => FilterOperator::StartsWith,
            "ends_with" => FilterOperator::EndsWith,
            "is_empty" => FilterOperator::IsEmpty,
            "is_not_empty" => FilterOperator::IsNotEmpty,
            _ => FilterOperator::Other(s),
        }
    }
}

impl From<&str> for FilterOperator {
    fn from(s: &str) -> Self {
        FilterOperator::from(s.to_string())
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilterOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(FilterOperator::from(String::deserialize(deserializer)?))
    }
}

/// A single filter predicate.
///
/// Filters are immutable once constructed: the pipeline copies them during
/// expansion and never mutates them in place. Field declaration order matches
/// the wire format (`id, field, type, operator, key, value`), which is the
/// order `serde_json` emits.
///
/// # Examples
///
/// ```
/// use query_filters_rs::filter::{ColumnType, Filter, FilterOperator};
///
/// let filter = Filter::new("1", "name", ColumnType::String, FilterOperator::Equal, "bob");
/// assert!(filter.is_valid());
///
/// let json = serde_json::to_string(&filter).unwrap();
/// assert_eq!(
///     json,
///     r#"{"id":"1","field":"name","type":"string","operator":"=","key":"","value":"bob"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Opaque unique identifier, assigned at creation. Used only for UI
    /// identity; carries no cross-request meaning.
    pub id: String,

    /// Name of the target attribute (backend-defined vocabulary).
    pub field: String,

    /// Column type of the target attribute.
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Comparison operator.
    pub operator: FilterOperator,

    /// Secondary attribute name, required only for dictionary-type columns.
    /// Empty otherwise.
    #[serde(default)]
    pub key: String,

    /// Comparison value, always carried as a string at this layer.
    #[serde(default)]
    pub value: String,
}

impl Filter {
    /// Creates a fully populated filter with an empty `key`.
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        column_type: ColumnType,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            column_type,
            operator,
            key: String::new(),
            value: value.into(),
        }
    }

    /// Sets the `key` selector (for dictionary-type columns).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Creates an empty filter template with a freshly generated id.
    ///
    /// Used as a UI placeholder before the user fills in field, operator and
    /// value. All fields other than `id` start as empty strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use query_filters_rs::filter::Filter;
    /// use query_filters_rs::id::UuidSource;
    ///
    /// let filter = Filter::empty(&UuidSource);
    /// assert!(!filter.id.is_empty());
    /// assert!(filter.field.is_empty());
    /// assert!(!filter.is_valid());
    /// ```
    pub fn empty(ids: &dyn IdSource) -> Self {
        Self {
            id: ids.next_id(),
            field: String::new(),
            column_type: ColumnType::Other(String::new()),
            operator: FilterOperator::Other(String::new()),
            key: String::new(),
            value: String::new(),
        }
    }

    /// Returns true if this filter is eligible for submission.
    ///
    /// A filter is valid iff `value` is non-empty and, for dictionary-type
    /// columns, `key` is non-empty as well. This predicate is advisory: the
    /// normalization pipeline itself does not re-check it (see
    /// [`build_query_params`](crate::params::build_query_params)).
    pub fn is_valid(&self) -> bool {
        let key_ok = if self.column_type.is_dictionary() {
            !self.key.is_empty()
        } else {
            true
        };
        key_ok && !self.value.is_empty()
    }

    /// Like [`is_valid`](Self::is_valid), but names what is missing.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MissingValue`] when `value` is empty, and
    /// [`FilterError::MissingKey`] when a dictionary-type filter has an empty
    /// `key`.
    pub fn validate(&self) -> FilterResult<()> {
        if self.column_type.is_dictionary() && self.key.is_empty() {
            return Err(FilterError::MissingKey {
                field: self.field.clone(),
            });
        }
        if self.value.is_empty() {
            return Err(FilterError::MissingValue {
                field: self.field.clone(),
            });
        }
        Ok(())
    }
}

/// Builds the "search by identifier" override filter list.
///
/// Returns `None` when the search text is absent or empty, signaling "no
/// override filter". Otherwise returns a single equality filter on the `id`
/// field. String-type filters are never subject to time expansion, so the
/// result flows through the pipeline as-is.
///
/// # Examples
///
/// ```
/// use query_filters_rs::filter::search_by_id_filters;
/// use query_filters_rs::id::UuidSource;
///
/// assert!(search_by_id_filters(None, &UuidSource).is_none());
/// assert!(search_by_id_filters(Some(""), &UuidSource).is_none());
///
/// let filters = search_by_id_filters(Some("abc"), &UuidSource).unwrap();
/// assert_eq!(filters.len(), 1);
/// assert_eq!(filters[0].field, "id");
/// assert_eq!(filters[0].value, "abc");
/// ```
pub fn search_by_id_filters(search: Option<&str>, ids: &dyn IdSource) -> Option<Vec<Filter>> {
    let search = search.filter(|s| !s.is_empty())?;

    Some(vec![Filter::new(
        ids.next_id(),
        "id",
        ColumnType::String,
        FilterOperator::Equal,
        search,
    )])
}
