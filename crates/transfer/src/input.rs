//! Per-command input overrides merged into the low-level store call before
//! dispatch.

use std::fmt;
use std::sync::Arc;

/// Either a fixed value, or a function of the derived input that computes
/// one — the sum type §9 of the design notes calls for.
#[derive(Clone)]
pub enum Override<T> {
    /// Overwrites the derived field unconditionally.
    Literal(T),
    /// Computed from the derived field at dispatch time.
    Computed(Arc<dyn Fn(&T) -> T + Send + Sync>),
}

impl<T: fmt::Debug> fmt::Debug for Override<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Override::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Override::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T: Clone> Override<T> {
    /// Applies this override to `derived`, returning the final value.
    pub fn apply(&self, derived: &T) -> T {
        match self {
            Override::Literal(value) => value.clone(),
            Override::Computed(compute) => compute(derived),
        }
    }
}

/// The bag of per-operation overrides passed through to the underlying
/// store for every command in a batch.
///
/// Only `content_type` is modeled explicitly — it is the one override every
/// `object_store` backend understands uniformly — but the type is built to
/// grow additional fields the same way.
#[derive(Clone, Debug, Default)]
pub struct CommandInput {
    /// Overrides the uploaded object's `Content-Type` attribute.
    pub content_type: Option<Override<String>>,
}

impl CommandInput {
    /// Resolves `content_type` against `derived` (typically the target id,
    /// used as a stand-in derived input for a content-type guess).
    #[must_use]
    pub fn resolve_content_type(&self, derived: &str) -> Option<String> {
        self.content_type.as_ref().map(|ov| ov.apply(&derived.to_string()))
    }
}
