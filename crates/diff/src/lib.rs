//! # Overview
//!
//! `diff` computes the set-algebraic difference between a source and a
//! target [`model::Inventory`], classifying every id into `created`,
//! `updated`, or `deleted` (unchanged ids are omitted).
//!
//! # Design
//!
//! The comparison is a pure function with no I/O: it borrows both
//! inventories and returns owned [`model::Object`] values, so it can be
//! exercised directly in unit tests without a filesystem or a store client.

use model::{Entry, Inventory, Object};

/// Options controlling how a target entry is judged "current" with respect
/// to its source counterpart.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiffOptions {
    /// When `true`, only size is compared; modification time is ignored.
    pub size_only: bool,
}

impl DiffOptions {
    /// Creates the default options (`size_only = false`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `size_only`.
    #[must_use]
    pub fn size_only(mut self, size_only: bool) -> Self {
        self.size_only = size_only;
        self
    }
}

/// The outcome of comparing two inventories.
///
/// Every id present in either inventory appears in exactly one of these
/// three lists, or in none of them if it is unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Ids present only in the source.
    pub created: Vec<Object>,
    /// Ids present in both, judged stale at the target.
    pub updated: Vec<Object>,
    /// Ids present only in the target.
    pub deleted: Vec<Object>,
}

/// Computes the difference between `source` and `target`.
///
/// The decision for an id present in both inventories:
/// - Different size: always `updated`.
/// - Equal size, `size_only`: unchanged.
/// - Equal size, target's modification time at least as recent as source's:
///   unchanged.
/// - Equal size, target older than source: `updated`.
#[must_use]
pub fn diff<S, T>(source: &Inventory<S>, target: &Inventory<T>, options: &DiffOptions) -> DiffResult
where
    S: Entry,
    T: Entry,
{
    let mut result = DiffResult::default();

    for (id, entry) in source.iter() {
        let source_object = entry.object();
        match target.get(id) {
            None => result.created.push(source_object.clone()),
            Some(target_entry) => {
                if !is_current(source_object, target_entry.object(), options) {
                    result.updated.push(source_object.clone());
                }
            }
        }
    }

    for (id, entry) in target.iter() {
        if source.get(id).is_none() {
            result.deleted.push(entry.object().clone());
        }
    }

    result
}

/// Whether `target` already reflects `source`'s content under `options`.
fn is_current(source: &Object, target: &Object, options: &DiffOptions) -> bool {
    if target.size != source.size {
        return false;
    }
    options.size_only || target.last_modified >= source.last_modified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(entries: &[(&str, u64, i64)]) -> Inventory<Object> {
        entries
            .iter()
            .map(|(id, size, mtime)| ((*id).to_string(), Object::new(*id, *size, *mtime)))
            .collect()
    }

    #[test]
    fn diff_scenario_from_spec() {
        let bucket_objects = inventory(&[
            ("abc/created", 1, 0),
            ("abc/updated1", 1, 1),
            ("abc/updated2", 2, 0),
            ("abc/unchanged", 1, 0),
        ]);
        let local_objects = inventory(&[
            ("abc/unchanged", 1, 0),
            ("abc/updated1", 1, 0),
            ("abc/updated2", 1, 0),
            ("deleted", 1, 0),
        ]);

        let mut result = diff(&bucket_objects, &local_objects, &DiffOptions::new());
        result.created.sort_by(|a, b| a.id.cmp(&b.id));
        result.updated.sort_by(|a, b| a.id.cmp(&b.id));
        result.deleted.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(result.created, vec![Object::new("abc/created", 1, 0)]);
        assert_eq!(
            result.updated,
            vec![Object::new("abc/updated1", 1, 1), Object::new("abc/updated2", 2, 0)]
        );
        assert_eq!(result.deleted, vec![Object::new("deleted", 1, 0)]);
    }

    #[test]
    fn empty_inventories_yield_empty_diff() {
        let empty: Inventory<Object> = Inventory::new();
        let result = diff(&empty, &empty, &DiffOptions::new());
        assert!(result.created.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn identical_inventories_are_unchanged() {
        let inv = inventory(&[("a", 1, 10), ("b", 2, 20)]);
        let result = diff(&inv, &inv, &DiffOptions::new());
        assert!(result.created.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn newer_target_mtime_with_equal_size_is_unchanged() {
        let source = inventory(&[("a", 1, 10)]);
        let target = inventory(&[("a", 1, 20)]);
        let result = diff(&source, &target, &DiffOptions::new());
        assert!(result.updated.is_empty());
    }

    #[test]
    fn older_target_mtime_with_equal_size_is_updated() {
        let source = inventory(&[("a", 1, 20)]);
        let target = inventory(&[("a", 1, 10)]);
        let result = diff(&source, &target, &DiffOptions::new());
        assert_eq!(result.updated, vec![Object::new("a", 1, 20)]);
    }

    #[test]
    fn size_only_ignores_mtime() {
        let source = inventory(&[("a", 1, 999)]);
        let target = inventory(&[("a", 1, 0)]);
        let result = diff(&source, &target, &DiffOptions::new().size_only(true));
        assert!(result.updated.is_empty());
    }

    #[test]
    fn diff_partitions_the_union_of_both_inventories() {
        let source = inventory(&[("created", 1, 0), ("shared", 1, 0)]);
        let target = inventory(&[("shared", 2, 0), ("deleted", 1, 0)]);

        let result = diff(&source, &target, &DiffOptions::new());

        let mut observed: Vec<&str> = result
            .created
            .iter()
            .chain(&result.updated)
            .chain(&result.deleted)
            .map(|object| object.id.as_str())
            .collect();
        observed.sort_unstable();
        assert_eq!(observed, vec!["created", "deleted", "shared"]);
    }

    #[test]
    fn swapping_source_and_target_swaps_created_and_deleted() {
        let a = inventory(&[("only_a", 1, 0), ("shared", 1, 5)]);
        let b = inventory(&[("only_b", 1, 0), ("shared", 1, 5)]);

        let forward = diff(&a, &b, &DiffOptions::new());
        let backward = diff(&b, &a, &DiffOptions::new());

        assert_eq!(forward.created, backward.deleted);
        assert_eq!(forward.deleted, backward.created);
    }
}
