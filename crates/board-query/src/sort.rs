//! Sort stage.
//!
//! Exactly one key is active at a time. Text compares case-insensitively
//! under a locale-aware collation, dates chronologically and numbers numerically; a missing value sorts
//! before any present value in ascending order. Records with equal keys keep
//! their input order (`slice::sort_by` is a stable sort).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use board_model::{FieldValue, Record, TextCollator, fold_case};
use chrono::{DateTime, Utc};

use crate::error::{QueryError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    field: String,
    direction: SortDirection,
}

impl SortKey {
    /// Builds a key without checking the field against a record type.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Builds a key for `R`, rejecting fields it does not declare sortable.
    pub fn for_record<R: Record>(field: &str, direction: SortDirection) -> Result<Self> {
        if !R::SORT_FIELDS.contains(&field) {
            return Err(QueryError::UnknownSortField {
                kind: R::KIND,
                field: field.to_string(),
                expected: R::SORT_FIELDS.join(", "),
            });
        }
        Ok(Self::new(field, direction))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Comparable projection of a [`FieldValue`].
///
/// Variant order doubles as the cross-type order, so `Missing` sorts first.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SortValue {
    Missing,
    Number(i128),
    Date(DateTime<Utc>),
    /// Case-folded text.
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }

    fn compare(&self, other: &Self, collator: &mut TextCollator) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => collator.compare(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<FieldValue> for SortValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Missing => Self::Missing,
            FieldValue::Number(n) => Self::Number(n),
            FieldValue::Date(d) => Self::Date(d),
            FieldValue::Text(text) => Self::Text(fold_case(&text)),
            FieldValue::List(values) if values.is_empty() => Self::Missing,
            FieldValue::List(values) => Self::Text(fold_case(&values.join(", "))),
        }
    }
}

/// Orders records by `key`, preserving input order among equal keys.
pub fn apply_sort<'a, R: Record>(records: Vec<&'a R>, key: &SortKey) -> Vec<&'a R> {
    let mut collator = TextCollator::new();
    let mut keyed: Vec<(SortValue, &'a R)> = records
        .into_iter()
        .map(|record| (SortValue::from(record.field(&key.field)), record))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| {
        key.direction.apply(left.compare(right, &mut collator))
    });
    keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use board_model::{Company, Industry, RecordId};
    use chrono::TimeZone;

    use super::*;

    fn company(id: u64, name: &str, created: Option<i64>) -> Company {
        Company {
            id: RecordId::new(id),
            name: name.to_string(),
            industry: Industry::Technology,
            website: String::new(),
            headquarters: String::new(),
            created_at: created.map(|secs| Utc.timestamp_opt(secs, 0).unwrap()),
        }
    }

    fn names(records: &[&Company]) -> Vec<String> {
        records.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn text_sort_ignores_case() {
        let records = vec![
            company(1, "Beta", None),
            company(2, "alpha", None),
            company(3, "Gamma", None),
        ];
        let key = SortKey::for_record::<Company>("name", SortDirection::Ascending).unwrap();
        let sorted = apply_sort(records.iter().collect(), &key);
        assert_eq!(names(&sorted), vec!["alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let records: Vec<Company> = ["Zoe", "Émile", "Eva", "Ölberg", "Otto"]
            .iter()
            .enumerate()
            .map(|(index, name)| company(index as u64 + 1, name, None))
            .collect();
        let key = SortKey::new("name", SortDirection::Ascending);
        assert_eq!(
            names(&apply_sort(records.iter().collect(), &key)),
            vec!["Émile", "Eva", "Ölberg", "Otto", "Zoe"]
        );
        let key = SortKey::new("name", SortDirection::Descending);
        assert_eq!(
            names(&apply_sort(records.iter().collect(), &key)),
            vec!["Zoe", "Otto", "Ölberg", "Eva", "Émile"]
        );
    }

    #[test]
    fn ids_above_i64_max_sort_after_small_ids() {
        let records = vec![
            company(u64::MAX, "huge", None),
            company(7, "small", None),
        ];
        let key = SortKey::new("id", SortDirection::Ascending);
        assert_eq!(
            names(&apply_sort(records.iter().collect(), &key)),
            vec!["small", "huge"]
        );
    }

    #[test]
    fn dates_sort_chronologically_with_missing_first() {
        let records = vec![
            company(1, "late", Some(2_000)),
            company(2, "none", None),
            company(3, "early", Some(1_000)),
        ];
        let key = SortKey::new("createdAt", SortDirection::Ascending);
        assert_eq!(
            names(&apply_sort(records.iter().collect(), &key)),
            vec!["none", "early", "late"]
        );
        let key = SortKey::new("createdAt", SortDirection::Descending);
        assert_eq!(
            names(&apply_sort(records.iter().collect(), &key)),
            vec!["late", "early", "none"]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![
            company(1, "same", None),
            company(2, "SAME", None),
            company(3, "Same", None),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = apply_sort(records.iter().collect(), &SortKey::new("name", direction));
            let ids: Vec<u64> = sorted.iter().map(|c| c.id.get()).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = SortKey::for_record::<Company>("salary", SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, QueryError::UnknownSortField { .. }));
    }

    #[test]
    fn direction_parses() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
