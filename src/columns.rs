//! Column entries and the available/selected sequence pair.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;

/// Column placement constraint, independent of scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pin {
    #[default]
    None,
    Left,
    Right,
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::None => f.write_str("None"),
            Pin::Left => f.write_str("Left"),
            Pin::Right => f.write_str("Right"),
        }
    }
}

/// One grid column as the chooser sees it. Order is the position in the
/// containing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnEntry {
    pub id: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub pinned: Pin,
}

impl ColumnEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hidden: false,
            pinned: Pin::None,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn pinned(mut self, pinned: Pin) -> Self {
        self.pinned = pinned;
        self
    }
}

/// Index of `id` in `columns`, exact match.
pub(crate) fn position_of(columns: &[ColumnEntry], id: &str) -> Option<usize> {
    columns.iter().position(|c| c.id == id)
}

/// Index of `id` in `columns`, ASCII case-insensitive.
pub(crate) fn position_of_ignore_case(columns: &[ColumnEntry], id: &str) -> Option<usize> {
    columns.iter().position(|c| c.id.eq_ignore_ascii_case(id))
}

/// The two ordered sequences the chooser edits.
///
/// `available` is every column in any order; `selected` holds exactly the
/// non-hidden ones in display order. Values are immutable snapshots: every
/// edit in [`crate::reorder`] returns a new set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSet {
    available: Vec<ColumnEntry>,
    selected: Vec<ColumnEntry>,
}

impl ColumnSet {
    /// Builds both sequences from a grid's column state.
    ///
    /// Only the first entry for a repeated id is kept.
    pub fn from_grid_state(state: Vec<ColumnEntry>) -> Self {
        let mut seen = HashSet::new();
        let available: Vec<ColumnEntry> = state.into_iter().filter(|c| seen.insert(c.id.clone())).collect();
        let selected = available.iter().filter(|c| !c.hidden).cloned().collect();
        Self { available, selected }
    }

    pub(crate) fn from_parts(available: Vec<ColumnEntry>, selected: Vec<ColumnEntry>) -> Self {
        let set = Self { available, selected };
        debug_assert_eq!(set.check_invariants(), Ok(()));
        set
    }

    pub fn available(&self) -> &[ColumnEntry] {
        &self.available
    }

    pub fn selected(&self) -> &[ColumnEntry] {
        &self.selected
    }

    pub fn available_entry(&self, id: &str) -> Option<&ColumnEntry> {
        self.available.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        position_of(&self.selected, id).is_some()
    }

    /// Available entries whose id contains `needle`, case-insensitively.
    pub fn filter_available<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a ColumnEntry> + 'a {
        let needle = needle.to_lowercase();
        self.available
            .iter()
            .filter(move |c| needle.is_empty() || c.id.to_lowercase().contains(&needle))
    }

    /// Verifies the available/selected relationship.
    ///
    /// Every selected id exists once in `available` with `hidden == false`,
    /// and every visible available id is selected exactly once.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        for c in &self.available {
            if !seen.insert(c.id.as_str()) {
                return Err(InvariantViolation::DuplicateAvailable(c.id.clone()));
            }
        }

        let mut selected_ids = HashSet::new();
        for c in &self.selected {
            if !selected_ids.insert(c.id.as_str()) {
                return Err(InvariantViolation::DuplicateSelected(c.id.clone()));
            }
            match self.available_entry(&c.id) {
                None => return Err(InvariantViolation::OrphanSelected(c.id.clone())),
                Some(a) if a.hidden => return Err(InvariantViolation::HiddenSelected(c.id.clone())),
                Some(_) => {}
            }
        }

        if let Some(missing) = self
            .available
            .iter()
            .find(|c| !c.hidden && !selected_ids.contains(c.id.as_str()))
        {
            return Err(InvariantViolation::VisibleNotSelected(missing.id.clone()));
        }

        Ok(())
    }
}
