//! Centralized application state for the column chooser demo.
//!
//! Composes focused state components so each keeps its own invariants and
//! the borrow checker can hand out disjoint borrows (grid vs. chooser).

use colchooser::ViewCatalog;

use crate::state::{ChooserSession, GridState, LayoutState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Grid rows and authoritative column state
    pub grid: GridState,

    /// Saved views and the current one
    pub views: ViewCatalog,

    /// Persisted layout values
    pub layout: LayoutState,

    /// Open column chooser, if any
    pub chooser: Option<ChooserSession>,

    // ===== Top-Level State =====
    /// Name typed into the "save view" box
    pub view_name_input: String,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GridState::default())
    }
}

impl AppState {
    /// Creates a new application state around a grid.
    pub fn new(grid: GridState) -> Self {
        Self {
            grid,
            views: ViewCatalog::new(),
            layout: LayoutState::new(),
            chooser: None,
            view_name_input: String::new(),
            error_message: None,
        }
    }

    /// Creates a new application state with layout and views loaded from storage.
    pub fn with_settings(grid: GridState, layout: LayoutState, views: ViewCatalog) -> Self {
        Self {
            layout,
            views,
            ..Self::new(grid)
        }
    }

    /// Returns true while the column chooser panel is open.
    pub fn is_chooser_open(&self) -> bool {
        self.chooser.is_some()
    }

    /// Custom view state saved alongside columns: the row search text.
    pub fn custom_view_state(&self) -> serde_json::Value {
        serde_json::json!({ "search": self.grid.search() })
    }
}
