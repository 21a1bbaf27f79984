//! The contract every fetched record type fulfils.
//!
//! The query engine never looks at concrete structs. It asks a record for its
//! identity key and for the value of a named field, and the record type
//! declares up front which field names may be used as filter dimensions and
//! as sort keys.

use chrono::{DateTime, Utc};

use crate::ids::RecordId;

/// A typed field value, as seen by filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Wide enough for every `u64` id and every `i64` count.
    Number(i128),
    Date(DateTime<Utc>),
    /// Multi-valued field such as the practice areas of a team member.
    List(Vec<String>),
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Wraps an optional date, mapping `None` to `Missing`.
    pub fn date(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }

    pub fn number(value: Option<i64>) -> Self {
        value.map_or(Self::Missing, |n| Self::Number(n.into()))
    }

    pub fn id(id: RecordId) -> Self {
        Self::Number(id.get().into())
    }

    /// String values this field contributes to a filter dimension.
    ///
    /// `Missing` contributes nothing, so a record without a value never
    /// matches a non-empty accepted set.
    pub fn filter_values(&self) -> Vec<String> {
        match self {
            Self::Text(value) => vec![value.clone()],
            Self::Number(value) => vec![value.to_string()],
            Self::Date(value) => vec![value.to_rfc3339()],
            Self::List(values) => values.clone(),
            Self::Missing => Vec::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// A record held in a collection.
pub trait Record {
    /// Human-readable collection name, used in logs and messages.
    const KIND: &'static str;
    /// Field names accepted as filter dimensions.
    const DIMENSIONS: &'static [&'static str];
    /// Field names accepted as sort keys.
    const SORT_FIELDS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// Value of a named field; unknown names yield `FieldValue::Missing`.
    fn field(&self, name: &str) -> FieldValue;

    /// Text matched by free-text search (usually the display name).
    fn search_text(&self) -> &str;
}
