//! State management modules for the column chooser demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Grid state (columns, rows, row search)
//! - Layout state (chooser rectangle, cell width)
//! - Chooser session (open chooser + floating surface)

mod grid_state;
mod layout_state;
mod chooser_session;

pub use grid_state::GridState;
pub use layout_state::LayoutState;
pub use chooser_session::ChooserSession;
