//! Filter stage: per-dimension predicate sets and free-text search.
//!
//! A record matches a [`PredicateSet`] when, for every dimension with a
//! non-empty accepted set, at least one of the record's values for that
//! dimension is accepted. Values are OR-ed within a dimension and dimensions
//! are AND-ed together. Dimensions with an empty set place no constraint.

use std::collections::{BTreeMap, BTreeSet};

use board_model::Record;

use crate::error::{QueryError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    dimensions: BTreeMap<String, BTreeSet<String>>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one accepted value to a dimension.
    pub fn accept(&mut self, dimension: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.dimensions
            .entry(dimension.into())
            .or_default()
            .insert(value.into());
        self
    }

    /// Builder form of [`accept`](Self::accept) for several values at once.
    #[must_use]
    pub fn with<I, V>(mut self, dimension: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let entry = self.dimensions.entry(dimension.into()).or_default();
        entry.extend(values.into_iter().map(Into::into));
        self
    }

    /// Replaces the accepted set of one dimension; an empty iterator lifts
    /// the constraint.
    pub fn set_dimension<I, V>(&mut self, dimension: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        self.dimensions.insert(dimension.into(), values);
    }

    /// Parses a `DIMENSION=VALUE` pair and accepts it.
    pub fn accept_pair(&mut self, pair: &str) -> Result<&mut Self> {
        let (dimension, value) = pair
            .split_once('=')
            .map(|(d, v)| (d.trim(), v.trim()))
            .filter(|(d, v)| !d.is_empty() && !v.is_empty())
            .ok_or_else(|| QueryError::MalformedFilter(pair.to_string()))?;
        Ok(self.accept(dimension, value))
    }

    pub fn accepted(&self, dimension: &str) -> Option<&BTreeSet<String>> {
        self.dimensions.get(dimension)
    }

    /// True when no dimension constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.dimensions.values().all(BTreeSet::is_empty)
    }

    /// Rejects dimensions the record type does not declare.
    pub fn check<R: Record>(&self) -> Result<()> {
        for dimension in self.dimensions.keys() {
            if !R::DIMENSIONS.contains(&dimension.as_str()) {
                return Err(QueryError::UnknownDimension {
                    kind: R::KIND,
                    dimension: dimension.clone(),
                    expected: R::DIMENSIONS.join(", "),
                });
            }
        }
        Ok(())
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.dimensions
            .iter()
            .filter(|(_, accepted)| !accepted.is_empty())
            .all(|(dimension, accepted)| {
                record
                    .field(dimension)
                    .filter_values()
                    .iter()
                    .any(|value| accepted.contains(value))
            })
    }
}

/// Keeps the records matched by `predicates`, in input order.
///
/// An unconstrained set returns every record. Dimensions the record type does
/// not know resolve to missing values and therefore match nothing; call
/// [`PredicateSet::check`] first to report them instead.
pub fn apply_filters<'a, R: Record>(records: &'a [R], predicates: &PredicateSet) -> Vec<&'a R> {
    if predicates.is_unconstrained() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| predicates.matches(*record))
        .collect()
}

/// Case-insensitive substring search over [`Record::search_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Returns `None` for a blank query, which constrains nothing.
    pub fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        (!needle.is_empty()).then_some(Self { needle })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        record.search_text().to_lowercase().contains(&self.needle)
    }
}

/// Narrows an already filtered list by a search query.
pub fn apply_search<'a, R: Record>(records: Vec<&'a R>, query: Option<&SearchQuery>) -> Vec<&'a R> {
    match query {
        Some(query) => records
            .into_iter()
            .filter(|record| query.matches(*record))
            .collect(),
        None => records,
    }
}
