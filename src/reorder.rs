//! Structural edits of the available/selected sequences.
//!
//! Every function here is pure: it takes the current [`ColumnSet`] (or a
//! preview sequence) and returns a new one. Ids that cannot be found turn the
//! call into a no-op. Lookups are exact, except for the dragged id in
//! [`preview_reorder`], which some platforms hand over lower-cased.
//!
//! Live drag previews go through [`DragContext`]: `preview` may run any
//! number of times and is thrown away on cancel, `commit` is the single write
//! back into the committed set.

use crate::columns::{position_of, position_of_ignore_case, ColumnEntry, ColumnSet, Pin};
use crate::drag_payload::{DragPayload, ListOrigin};
use crate::grid::ColumnStateUpdate;

/// Shows or hides `id`.
///
/// Showing appends the column to the end of `selected`; hiding removes it.
/// Showing an already visible column changes nothing.
pub fn toggle_visibility(columns: &ColumnSet, id: &str, make_visible: bool) -> ColumnSet {
    let Some(index) = position_of(columns.available(), id) else {
        return columns.clone();
    };
    if columns.available()[index].hidden != make_visible {
        // Already in the requested state.
        return columns.clone();
    }

    let mut available = columns.available().to_vec();
    available[index].hidden = !make_visible;

    let mut selected = columns.selected().to_vec();
    if make_visible {
        selected.push(available[index].clone());
    } else {
        selected.retain(|c| c.id != id);
    }
    ColumnSet::from_parts(available, selected)
}

/// Removes `id` from `selected` and hides it in `available`.
pub fn deselect(columns: &ColumnSet, id: &str) -> ColumnSet {
    let Some(index) = position_of(columns.available(), id) else {
        return columns.clone();
    };
    let mut available = columns.available().to_vec();
    available[index].hidden = true;

    let mut selected = columns.selected().to_vec();
    selected.retain(|c| c.id != id);
    ColumnSet::from_parts(available, selected)
}

/// Swaps the positions of `source_id` and `target_id`.
///
/// This is a direct two-element swap, not a splice-to-index move. The
/// source is matched case-insensitively, the target exactly.
pub fn preview_reorder(snapshot: &[ColumnEntry], source_id: &str, target_id: &str) -> Vec<ColumnEntry> {
    let mut next = snapshot.to_vec();
    if let (Some(source), Some(target)) = (
        position_of_ignore_case(snapshot, source_id),
        position_of(snapshot, target_id),
    ) {
        next.swap(source, target);
    }
    next
}

/// Makes `source_id` visible and places it right before `before_target_id`.
///
/// If the source is already selected it is moved rather than duplicated.
pub fn insert_across_lists(columns: &ColumnSet, source_id: &str, before_target_id: &str) -> ColumnSet {
    let Some(source_index) = position_of(columns.available(), source_id) else {
        return columns.clone();
    };
    if source_id == before_target_id || position_of(columns.selected(), before_target_id).is_none() {
        return columns.clone();
    }

    let mut available = columns.available().to_vec();
    available[source_index].hidden = false;

    let mut selected = columns.selected().to_vec();
    selected.retain(|c| c.id != source_id);
    let Some(target_index) = position_of(&selected, before_target_id) else {
        return columns.clone();
    };
    selected.insert(target_index, available[source_index].clone());
    ColumnSet::from_parts(available, selected)
}

/// Sets the pin of `id` in both sequences, order untouched.
pub fn update_pin(columns: &ColumnSet, id: &str, pin: Pin) -> ColumnSet {
    if position_of(columns.available(), id).is_none() {
        return columns.clone();
    }
    let repin = |entries: &[ColumnEntry]| -> Vec<ColumnEntry> {
        entries
            .iter()
            .map(|c| if c.id == id { c.clone().pinned(pin) } else { c.clone() })
            .collect()
    };
    ColumnSet::from_parts(repin(columns.available()), repin(columns.selected()))
}

/// Flat order for the grid: `selected`, then the rest of `available`.
pub fn commit_apply(columns: &ColumnSet) -> ColumnStateUpdate {
    let mut state = columns.selected().to_vec();
    state.extend(
        columns
            .available()
            .iter()
            .filter(|c| !columns.is_selected(&c.id))
            .cloned(),
    );
    ColumnStateUpdate::ordered(state)
}

/// Ephemeral state of one drag operation.
///
/// Holds the `selected` snapshot taken at drag start and the latest live
/// preview derived from it. The committed set is never touched until
/// [`DragContext::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragContext {
    payload: DragPayload,
    snapshot: Vec<ColumnEntry>,
    preview: Vec<ColumnEntry>,
}

impl DragContext {
    pub fn begin(columns: &ColumnSet, payload: DragPayload) -> Self {
        let snapshot = columns.selected().to_vec();
        Self {
            payload,
            preview: snapshot.clone(),
            snapshot,
        }
    }

    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    pub fn snapshot(&self) -> &[ColumnEntry] {
        &self.snapshot
    }

    pub fn preview(&self) -> &[ColumnEntry] {
        &self.preview
    }

    /// Whether the preview differs from the drag-start snapshot.
    pub fn is_dirty(&self) -> bool {
        self.preview != self.snapshot
    }

    /// Applies one drag-over step to the preview.
    pub fn preview_over(&mut self, source_id: &str, target_id: &str) {
        self.preview = preview_reorder(&self.preview, source_id, target_id);
    }

    /// Writes the preview back as the new `selected` order.
    ///
    /// Only reorders from the selected list commit. If `selected` changed
    /// membership since the drag started the preview is stale and dropped.
    pub fn commit(self, columns: &ColumnSet) -> ColumnSet {
        if self.payload.origin != ListOrigin::Selected || !self.is_dirty() {
            return columns.clone();
        }
        let same_members = self.preview.len() == columns.selected().len()
            && self.preview.iter().all(|c| columns.is_selected(&c.id));
        if !same_members {
            tracing::warn!(column = %self.payload.column_id, "discarding stale drag preview");
            return columns.clone();
        }

        // Take current entries so pins set mid-drag survive.
        let selected = self
            .preview
            .iter()
            .filter_map(|p| columns.selected().iter().find(|c| c.id == p.id).cloned())
            .collect();
        ColumnSet::from_parts(columns.available().to_vec(), selected)
    }
}
