//! Locale-aware text ordering.
//!
//! Names are compared under the CLDR root collation after case folding, so
//! `"Émile"` sorts next to `"Eva"` rather than after `"Zoe"`.

use std::cmp::Ordering;

use feruca::Collator;

/// Case-folds text into the form [`TextCollator::compare`] expects.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Reusable collator; keeps its lookup caches across comparisons.
#[derive(Default)]
pub struct TextCollator {
    inner: Collator,
}

impl TextCollator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares two case-folded strings.
    pub fn compare(&mut self, left: &str, right: &str) -> Ordering {
        if left == right {
            return Ordering::Equal;
        }
        self.inner.collate(left, right)
    }
}
