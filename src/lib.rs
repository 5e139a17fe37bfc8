pub mod error;
pub mod geometry;
pub mod config;
pub mod interaction;
pub mod drag_payload;
pub mod columns;
pub mod reorder;
pub mod grid;
pub mod views;
pub mod chooser;

// Export panel geometry and pointer interaction
pub use geometry::{Point, Delta, Rectangle, ResizeZone};
pub use config::{PanelConfig, DEFAULT_HIT_THRESHOLD};
pub use interaction::{
    FloatingSurface, InteractionMode, CursorAffordance,
    PointerButtons, PointerSample, PointerEvent
};

// Export drag protocol
pub use drag_payload::{
    DataTransfer, MemoryTransfer, DragPayload, ListOrigin,
    AVAILABLE_PREFIX, SELECTED_PREFIX
};

// Export column model and edits
pub use columns::{ColumnEntry, ColumnSet, Pin};
pub use reorder::{
    toggle_visibility, deselect, preview_reorder, insert_across_lists,
    update_pin, commit_apply, DragContext
};

// Export collaborators
pub use grid::{ColumnGrid, ColumnStateUpdate, InMemoryGrid, merge_column_state};
pub use views::{View, ViewCatalog, ViewObserver};

pub use chooser::{ColumnChooser, DropEffect};
pub use error::{ConfigError, InvariantViolation};
