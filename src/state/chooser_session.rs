//! One open column chooser: its editable columns, its floating surface and
//! the transfer of a column drag in progress.
//!
//! A session is created when the panel opens and dropped when it closes, so
//! the interaction machine starts fresh on every mount.

use colchooser::{
    ColumnChooser, ColumnGrid, DataTransfer, DropEffect, FloatingSurface, ListOrigin, MemoryTransfer, PanelConfig,
    Rectangle,
};

#[derive(Debug)]
pub struct ChooserSession {
    pub chooser: ColumnChooser,
    pub surface: FloatingSurface,
    /// Payload of the running column drag.
    transfer: Option<MemoryTransfer>,
    /// Selected row under the pointer and whether it accepts the drag.
    hover: Option<(String, DropEffect)>,
}

impl ChooserSession {
    pub fn open(grid: &dyn ColumnGrid, natural: Rectangle) -> Self {
        Self {
            chooser: ColumnChooser::open(grid),
            surface: FloatingSurface::mount(PanelConfig::column_chooser(), natural),
            transfer: None,
            hover: None,
        }
    }

    /// Rectangle to remember on close; `None` mid-move/resize.
    pub fn settled_rect(&self) -> Option<Rectangle> {
        self.surface.settled_rect()
    }

    pub fn is_dragging_column(&self) -> bool {
        self.transfer.is_some()
    }

    /// Row currently hovered by a column drag, if it accepts the drop.
    pub fn drop_target(&self) -> Option<&str> {
        match &self.hover {
            Some((id, DropEffect::Move)) => Some(id),
            _ => None,
        }
    }

    /// Starts dragging `id` out of `origin`; false if it is not draggable.
    pub fn begin_column_drag(&mut self, origin: ListOrigin, id: &str) -> bool {
        let mut transfer = MemoryTransfer::new();
        if !self.chooser.drag_start(origin, id, &mut transfer) {
            return false;
        }
        self.transfer = Some(transfer);
        self.hover = None;
        true
    }

    /// Pointer is over the selected row `target` (or over no row).
    pub fn hover_column(&mut self, target: Option<&str>) {
        let Some(types) = self.transfer.as_ref().map(|t| t.types()) else {
            return;
        };
        self.hover = target.map(|id| (id.to_string(), self.chooser.drag_over(id, &types)));
    }

    /// Pointer released: drop on the accepting row, then end the drag.
    pub fn release_column(&mut self) {
        let Some(transfer) = self.transfer.take() else {
            return;
        };
        if let Some((target, DropEffect::Move)) = self.hover.take() {
            self.chooser.drop_on(&target, &transfer);
        }
        self.chooser.drag_end();
    }

    /// Escape: abandon the drag and its preview.
    pub fn cancel_column_drag(&mut self) {
        if self.transfer.take().is_some() {
            self.hover = None;
            self.chooser.cancel_drag();
        }
    }
}
