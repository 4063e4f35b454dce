//! Prefix-rewriting algebra applied to identifiers during synchronization.

/// A `(source_prefix -> target_prefix)` rewrite rule.
///
/// A sync accepts an ordered list of relocations; the first rule whose
/// `source_prefix` matches an id is the one applied (see [`apply_relocations`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relocation {
    /// Prefix to match against an id. Empty means "matches every id".
    pub source_prefix: String,
    /// Prefix to rewrite the matched suffix under. Empty means "no prefix".
    pub target_prefix: String,
}

impl Relocation {
    /// Creates a new relocation rule.
    #[must_use]
    pub fn new(source_prefix: impl Into<String>, target_prefix: impl Into<String>) -> Self {
        Self {
            source_prefix: source_prefix.into(),
            target_prefix: target_prefix.into(),
        }
    }
}

/// Attempts to rewrite `id` under `(source_prefix, target_prefix)`.
///
/// Returns `None` when the rule does not apply to `id` at all, and
/// `Some(rewritten)` otherwise (including the identity case where the
/// rewritten id equals the original).
///
/// Implements the three-step algorithm from spec.md §4.1:
///
/// 1. If `id == source_prefix` exactly, the id is a folder marker for the
///    prefix itself, not an object under it — it is returned unchanged.
/// 2. Otherwise the suffix of `id` after `source_prefix` is computed. An
///    empty `source_prefix` matches the whole id as a suffix; otherwise `id`
///    must start with `source_prefix` followed by `/`, or there is no match.
/// 3. The suffix is joined onto `target_prefix` with `/`, omitting either
///    side (and the separator) when it is empty.
fn relocate_checked(id: &str, source_prefix: &str, target_prefix: &str) -> Option<String> {
    if id == source_prefix {
        return Some(id.to_string());
    }

    let suffix = if source_prefix.is_empty() {
        id
    } else {
        let rest = id.strip_prefix(source_prefix)?;
        rest.strip_prefix('/')?
    };

    Some(join(target_prefix, suffix))
}

fn join(target_prefix: &str, suffix: &str) -> String {
    match (target_prefix.is_empty(), suffix.is_empty()) {
        (true, true) => String::new(),
        (true, false) => suffix.to_string(),
        (false, true) => target_prefix.to_string(),
        (false, false) => format!("{target_prefix}/{suffix}"),
    }
}

/// Rewrites `id` under a single `(source_prefix, target_prefix)` rule.
///
/// Returns `id` unchanged when the rule does not match. See spec.md §4.1 for
/// the worked examples this function is seeded from.
#[must_use]
pub fn relocate(id: &str, source_prefix: &str, target_prefix: &str) -> String {
    relocate_checked(id, source_prefix, target_prefix).unwrap_or_else(|| id.to_string())
}

/// Rewrites `id` through an ordered list of relocations, applying the first
/// rule that matches and leaving `id` unchanged if none do.
#[must_use]
pub fn apply_relocations(id: &str, relocations: &[Relocation]) -> String {
    for rule in relocations {
        if let Some(rewritten) = relocate_checked(id, &rule.source_prefix, &rule.target_prefix) {
            return rewritten;
        }
    }
    id.to_string()
}
