//! Include/exclude predicates evaluated against an id before diffing.

use std::fmt;
use std::sync::Arc;

/// A single filter predicate, applied to every id before it reaches the
/// diff engine.
#[derive(Clone)]
pub enum Filter {
    /// The id is kept only if the predicate returns `true`.
    Include(Arc<dyn Fn(&str) -> bool + Send + Sync>),
    /// The id is dropped if the predicate returns `true`.
    Exclude(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Include(_) => f.write_str("Filter::Include(..)"),
            Filter::Exclude(_) => f.write_str("Filter::Exclude(..)"),
        }
    }
}

impl Filter {
    /// Builds an include filter from a predicate.
    pub fn include(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Filter::Include(Arc::new(predicate))
    }

    /// Builds an exclude filter from a predicate.
    pub fn exclude(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Filter::Exclude(Arc::new(predicate))
    }
}

/// Whether `id` survives every filter in `filters`.
#[must_use]
pub fn passes(id: &str, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Include(predicate) => predicate(id),
        Filter::Exclude(predicate) => !predicate(id),
    })
}
