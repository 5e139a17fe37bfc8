//! Grid widget collaborator.
//!
//! The chooser reads the grid's column state when it opens or resets and
//! writes it back only when the user applies. Both calls are synchronous.

use serde::{Deserialize, Serialize};

use crate::columns::ColumnEntry;

/// Final column state handed to the grid on apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStateUpdate {
    pub state: Vec<ColumnEntry>,
    /// When set, `state` is the authoritative column order, not just a
    /// visibility/pin patch.
    pub apply_order: bool,
}

impl ColumnStateUpdate {
    pub fn ordered(state: Vec<ColumnEntry>) -> Self {
        Self {
            state,
            apply_order: true,
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.state.iter().map(|c| c.id.as_str()).collect()
    }
}

/// A grid whose column configuration the chooser edits.
pub trait ColumnGrid {
    /// Current columns in display order, hidden ones included.
    fn column_state(&self) -> Vec<ColumnEntry>;

    fn apply_column_state(&mut self, update: ColumnStateUpdate);
}

/// Minimal grid that just stores column state; useful for headless callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryGrid {
    columns: Vec<ColumnEntry>,
    applied: usize,
}

impl InMemoryGrid {
    pub fn new(columns: Vec<ColumnEntry>) -> Self {
        Self { columns, applied: 0 }
    }

    /// Number of apply calls received.
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

/// Merges `update` into `current` the way a grid is expected to.
///
/// With `apply_order` the update's sequence becomes the new order; ids the
/// update omits keep their state and go last. Without it only `hidden` and
/// `pinned` are patched. Unknown ids are ignored, and a repeated id keeps
/// its first occurrence.
pub fn merge_column_state(current: &[ColumnEntry], update: &ColumnStateUpdate) -> Vec<ColumnEntry> {
    if update.apply_order {
        let mut merged: Vec<ColumnEntry> = Vec::with_capacity(current.len());
        for u in &update.state {
            if current.iter().any(|c| c.id == u.id) && !merged.iter().any(|m| m.id == u.id) {
                merged.push(u.clone());
            }
        }
        for c in current {
            if !merged.iter().any(|m| m.id == c.id) {
                merged.push(c.clone());
            }
        }
        merged
    } else {
        current
            .iter()
            .map(|c| match update.state.iter().find(|u| u.id == c.id) {
                Some(u) => ColumnEntry {
                    hidden: u.hidden,
                    pinned: u.pinned,
                    ..c.clone()
                },
                None => c.clone(),
            })
            .collect()
    }
}

impl ColumnGrid for InMemoryGrid {
    fn column_state(&self) -> Vec<ColumnEntry> {
        self.columns.clone()
    }

    fn apply_column_state(&mut self, update: ColumnStateUpdate) {
        self.columns = merge_column_state(&self.columns, &update);
        self.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::Pin;

    fn current() -> Vec<ColumnEntry> {
        vec![ColumnEntry::new("a"), ColumnEntry::new("b"), ColumnEntry::new("c").hidden(true)]
    }

    #[test]
    fn test_ordered_merge_reorders_and_appends_omitted() {
        let update = ColumnStateUpdate::ordered(vec![ColumnEntry::new("b"), ColumnEntry::new("zzz")]);
        let merged = merge_column_state(&current(), &update);
        let ids: Vec<_> = merged.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert!(merged[2].hidden);
    }

    #[test]
    fn test_ordered_merge_drops_repeated_ids() {
        let update = ColumnStateUpdate::ordered(vec![
            ColumnEntry::new("b"),
            ColumnEntry::new("a"),
            ColumnEntry::new("b").hidden(true),
        ]);
        let merged = merge_column_state(&[ColumnEntry::new("a"), ColumnEntry::new("b")], &update);
        let ids: Vec<_> = merged.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(!merged[0].hidden);
    }

    #[test]
    fn test_patch_merge_keeps_order() {
        let update = ColumnStateUpdate {
            state: vec![ColumnEntry::new("c").pinned(Pin::Left)],
            apply_order: false,
        };
        let merged = merge_column_state(&current(), &update);
        let ids: Vec<_> = merged.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(!merged[2].hidden);
        assert_eq!(merged[2].pinned, Pin::Left);
    }

    #[test]
    fn test_in_memory_grid_counts_applies() {
        let mut grid = InMemoryGrid::new(current());
        grid.apply_column_state(ColumnStateUpdate::ordered(vec![ColumnEntry::new("c")]));
        assert_eq!(grid.applied_count(), 1);
        assert_eq!(grid.column_state()[0].id, "c");
    }
}
