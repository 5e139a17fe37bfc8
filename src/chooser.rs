//! Column chooser controller.
//!
//! Owns the editable [`ColumnSet`] and the optional [`DragContext`], and maps
//! the platform drag events (start, over, drop, end) onto the pure edits in
//! [`crate::reorder`]. The grid is read on open/reset and written on apply,
//! never in between.

use crate::columns::{ColumnEntry, ColumnSet, Pin};
use crate::drag_payload::{self, DataTransfer, DragPayload, ListOrigin};
use crate::grid::{ColumnGrid, ColumnStateUpdate};
use crate::reorder::{self, DragContext};

/// Answer to a drag-over, telling the platform whether a drop is welcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Move,
}

/// Editable column configuration behind the chooser panel.
#[derive(Debug, Clone, Default)]
pub struct ColumnChooser {
    columns: ColumnSet,
    drag: Option<DragContext>,
    search: String,
}

impl ColumnChooser {
    /// Opens the chooser on the grid's current column state.
    pub fn open(grid: &dyn ColumnGrid) -> Self {
        Self {
            columns: ColumnSet::from_grid_state(grid.column_state()),
            drag: None,
            search: String::new(),
        }
    }

    /// Reloads from the grid, dropping edits and any drag in progress.
    pub fn reset(&mut self, grid: &dyn ColumnGrid) {
        self.columns = ColumnSet::from_grid_state(grid.column_state());
        self.drag = None;
        tracing::info!(columns = self.columns.available().len(), "column chooser reset");
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Selected list as it should be drawn: the live preview while a
    /// selected-list drag is running, the committed list otherwise.
    pub fn selected_for_display(&self) -> &[ColumnEntry] {
        match &self.drag {
            Some(ctx) if ctx.payload().origin == ListOrigin::Selected => ctx.preview(),
            _ => self.columns.selected(),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Available entries matching the search text.
    pub fn visible_available(&self) -> impl Iterator<Item = &ColumnEntry> + '_ {
        self.columns.filter_available(&self.search)
    }

    /// Only hidden available entries and selected entries can be dragged.
    pub fn is_draggable(&self, origin: ListOrigin, id: &str) -> bool {
        match origin {
            ListOrigin::Available => self.columns.available_entry(id).is_some_and(|c| c.hidden),
            ListOrigin::Selected => self.columns.is_selected(id),
        }
    }

    pub fn drag(&self) -> Option<&DragContext> {
        self.drag.as_ref()
    }

    pub fn toggle_visibility(&mut self, id: &str, visible: bool) {
        self.columns = reorder::toggle_visibility(&self.columns, id, visible);
    }

    pub fn deselect(&mut self, id: &str) {
        self.columns = reorder::deselect(&self.columns, id);
    }

    pub fn set_pin(&mut self, id: &str, pin: Pin) {
        self.columns = reorder::update_pin(&self.columns, id, pin);
    }

    /// Starts a drag and registers its payload on `transfer`.
    ///
    /// Returns false (and writes nothing) if the entry is not draggable.
    pub fn drag_start(&mut self, origin: ListOrigin, id: &str, transfer: &mut dyn DataTransfer) -> bool {
        if !self.is_draggable(origin, id) {
            return false;
        }
        drag_payload::write(transfer, origin, id);
        self.drag = Some(DragContext::begin(&self.columns, DragPayload::new(origin, id)));
        tracing::debug!(%origin, column = id, "drag started");
        true
    }

    /// Drag-over of a selected row identified by `target_id`.
    ///
    /// Works from the transfer's type set only. A selected-list payload over
    /// a different row updates the live preview.
    pub fn drag_over<S: AsRef<str>>(&mut self, target_id: &str, types: &[S]) -> DropEffect {
        let Some(payload) = drag_payload::probe(types) else {
            return DropEffect::None;
        };
        match payload.origin {
            ListOrigin::Selected => {
                if payload.column_id.eq_ignore_ascii_case(target_id) {
                    return DropEffect::None;
                }
                if let Some(ctx) = self.drag.as_mut() {
                    ctx.preview_over(&payload.column_id, target_id);
                }
                DropEffect::Move
            }
            ListOrigin::Available => DropEffect::Move,
        }
    }

    /// Drop on the selected row `target_id`.
    ///
    /// An available-list payload is inserted before the target. A
    /// selected-list payload is left for drag end to commit. A drop with no
    /// recognizable payload cancels the drag.
    pub fn drop_on(&mut self, target_id: &str, transfer: &dyn DataTransfer) -> bool {
        match drag_payload::read_drop(transfer, ListOrigin::Available) {
            Some(payload) => {
                self.columns = reorder::insert_across_lists(&self.columns, &payload.column_id, target_id);
                tracing::debug!(column = %payload.column_id, before = target_id, "column inserted");
                true
            }
            None if drag_payload::probe(transfer.types()).is_some() => {
                tracing::debug!(row = target_id, "selected drop left for drag end");
                false
            }
            None => {
                tracing::debug!(types = ?transfer.types(), "unrecognized drop cancels drag");
                self.cancel_drag();
                false
            }
        }
    }

    /// Ends the drag, committing the latest preview.
    pub fn drag_end(&mut self) {
        if let Some(ctx) = self.drag.take() {
            tracing::debug!(column = %ctx.payload().column_id, dirty = ctx.is_dirty(), "drag ended");
            self.columns = ctx.commit(&self.columns);
        }
    }

    /// Ends the drag without touching the committed lists.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("drag cancelled");
        }
    }

    /// Hands the final order to the grid and returns what was applied.
    pub fn apply(&mut self, grid: &mut dyn ColumnGrid) -> ColumnStateUpdate {
        self.cancel_drag();
        let update = reorder::commit_apply(&self.columns);
        tracing::info!(columns = ?update.ids(), "applying column state");
        grid.apply_column_state(update.clone());
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag_payload::MemoryTransfer;
    use crate::grid::InMemoryGrid;

    fn grid() -> InMemoryGrid {
        InMemoryGrid::new(vec![
            ColumnEntry::new("isin"),
            ColumnEntry::new("issuer"),
            ColumnEntry::new("coupon"),
            ColumnEntry::new("rating").hidden(true),
        ])
    }

    fn selected_ids(chooser: &ColumnChooser) -> Vec<String> {
        chooser.columns().selected().iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_reorder_previews_then_commits_on_drag_end() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        assert!(chooser.drag_start(ListOrigin::Selected, "isin", &mut transfer));
        assert_eq!(transfer.types(), ["selected/isin"]);

        assert_eq!(chooser.drag_over("coupon", &transfer.types()), DropEffect::Move);
        let shown: Vec<_> = chooser.selected_for_display().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(shown, ["coupon", "issuer", "isin"]);
        assert_eq!(selected_ids(&chooser), ["isin", "issuer", "coupon"]);

        chooser.drag_end();
        assert!(chooser.drag().is_none());
        assert_eq!(selected_ids(&chooser), ["coupon", "issuer", "isin"]);
    }

    #[test]
    fn test_drag_over_self_is_rejected_case_insensitively() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        chooser.drag_start(ListOrigin::Selected, "isin", &mut transfer);
        assert_eq!(chooser.drag_over("isin", &["selected/ISIN"]), DropEffect::None);
    }

    #[test]
    fn test_lowercased_type_still_previews() {
        let grid = InMemoryGrid::new(vec![ColumnEntry::new("maturityDate"), ColumnEntry::new("price")]);
        let mut chooser = ColumnChooser::open(&grid);
        let mut transfer = MemoryTransfer::new();
        chooser.drag_start(ListOrigin::Selected, "maturityDate", &mut transfer);
        chooser.drag_over("price", &["selected/maturitydate"]);
        chooser.drag_end();
        assert_eq!(selected_ids(&chooser), ["price", "maturityDate"]);
    }

    #[test]
    fn test_cancel_discards_preview() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        chooser.drag_start(ListOrigin::Selected, "isin", &mut transfer);
        chooser.drag_over("coupon", &transfer.types());
        chooser.cancel_drag();
        assert_eq!(selected_ids(&chooser), ["isin", "issuer", "coupon"]);
    }

    #[test]
    fn test_available_drop_inserts_before_target() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        assert!(chooser.drag_start(ListOrigin::Available, "rating", &mut transfer));
        assert_eq!(chooser.drag_over("issuer", &transfer.types()), DropEffect::Move);
        // No preview for cross-list drags.
        assert_eq!(chooser.selected_for_display().len(), 3);
        assert!(chooser.drop_on("issuer", &transfer));
        chooser.drag_end();
        assert_eq!(selected_ids(&chooser), ["isin", "rating", "issuer", "coupon"]);
        assert!(chooser.columns().check_invariants().is_ok());
    }

    #[test]
    fn test_visible_available_entry_is_not_draggable() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        assert!(!chooser.drag_start(ListOrigin::Available, "isin", &mut transfer));
        assert!(transfer.types().is_empty());
        assert!(chooser.drag().is_none());
    }

    #[test]
    fn test_foreign_drop_is_ignored() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        transfer.set_data("text/plain", "hello");
        assert_eq!(chooser.drag_over("isin", &transfer.types()), DropEffect::None);
        assert!(!chooser.drop_on("isin", &transfer));
        assert_eq!(selected_ids(&chooser), ["isin", "issuer", "coupon"]);
    }

    #[test]
    fn test_foreign_drop_cancels_running_reorder() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        chooser.drag_start(ListOrigin::Selected, "isin", &mut transfer);
        chooser.drag_over("coupon", &transfer.types());

        let mut foreign = MemoryTransfer::new();
        foreign.set_data("text/plain", "isin");
        assert!(!chooser.drop_on("issuer", &foreign));
        assert!(chooser.drag().is_none());

        chooser.drag_end();
        assert_eq!(selected_ids(&chooser), ["isin", "issuer", "coupon"]);
    }

    #[test]
    fn test_selected_drop_keeps_preview_for_drag_end() {
        let mut chooser = ColumnChooser::open(&grid());
        let mut transfer = MemoryTransfer::new();
        chooser.drag_start(ListOrigin::Selected, "isin", &mut transfer);
        chooser.drag_over("coupon", &transfer.types());
        assert!(!chooser.drop_on("coupon", &transfer));
        assert!(chooser.drag().is_some());

        chooser.drag_end();
        assert_eq!(selected_ids(&chooser), ["coupon", "issuer", "isin"]);
    }

    #[test]
    fn test_apply_writes_grid_and_reset_reloads() {
        let mut grid = grid();
        let mut chooser = ColumnChooser::open(&grid);
        chooser.deselect("issuer");
        chooser.set_pin("coupon", Pin::Left);
        let update = chooser.apply(&mut grid);
        assert_eq!(update.ids(), ["isin", "coupon", "issuer", "rating"]);
        assert_eq!(grid.applied_count(), 1);

        chooser.toggle_visibility("rating", true);
        chooser.reset(&grid);
        assert_eq!(selected_ids(&chooser), ["isin", "coupon"]);
        assert_eq!(chooser.columns().selected()[1].pinned, Pin::Left);
    }

    #[test]
    fn test_search_filters_available_only() {
        let mut chooser = ColumnChooser::open(&grid());
        chooser.set_search_text("IS");
        let ids: Vec<_> = chooser.visible_available().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["isin", "issuer"]);
        assert_eq!(chooser.columns().selected().len(), 3);
    }
}
