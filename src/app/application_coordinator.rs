//! Application-level coordination and workflow management.
//!
//! Opens and closes the column chooser, routes apply/reset to the grid, and
//! keeps the view catalog informed of grid changes.

use anyhow::bail;
use colchooser::{ColumnGrid, ViewObserver};

use crate::app::AppState;
use crate::state::ChooserSession;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Chooser lifecycle (open, apply, reset, close)
/// - View selection and saving
/// - Row search changes
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Opens the column chooser on the grid's current state.
    ///
    /// Does nothing if it is already open.
    pub fn open_chooser(state: &mut AppState) {
        if state.chooser.is_some() {
            return;
        }
        let natural = state.layout.chooser_rect();
        state.chooser = Some(ChooserSession::open(&state.grid, natural));
        tracing::info!("column chooser opened");
    }

    /// Closes the chooser, discarding uncommitted edits.
    pub fn close_chooser(state: &mut AppState) {
        if let Some(session) = state.chooser.take() {
            if let Some(rect) = session.settled_rect() {
                state.layout.remember_chooser_rect(rect);
            }
            tracing::info!("column chooser closed");
        }
    }

    /// Applies the chooser's columns to the grid, then closes it.
    pub fn apply_chooser(state: &mut AppState) {
        if let Some(session) = state.chooser.as_mut() {
            session.chooser.apply(&mut state.grid);
            Self::notify_grid_changed(state);
        }
        Self::close_chooser(state);
    }

    /// Reloads the chooser from the grid.
    pub fn reset_chooser(state: &mut AppState) {
        if let Some(session) = state.chooser.as_mut() {
            session.chooser.reset(&state.grid);
        }
    }

    /// Selects a saved view: applies its columns and restores its search text.
    pub fn select_view(state: &mut AppState, name: &str) {
        let Some(view) = state.views.select(name).cloned() else {
            state.error_message = Some(format!("Unknown view: {}", name));
            return;
        };

        state.grid.apply_column_state(view.column_update());
        let search = view
            .custom_state
            .get("search")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        state.grid.set_search(search);
        state.view_name_input = view.name.clone();
        state.error_message = None;

        Self::reset_chooser(state);
    }

    /// Saves the grid's current state as a view named `name`.
    pub fn save_view(state: &mut AppState, name: &str) -> anyhow::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("view name must not be empty");
        }
        let custom = state.custom_view_state();
        state.views.save(name, state.grid.column_state(), custom);
        state.error_message = None;
        Ok(())
    }

    /// Deletes the view named `name`.
    pub fn delete_view(state: &mut AppState, name: &str) -> anyhow::Result<()> {
        if !state.views.remove(name) {
            bail!("no view named `{}`", name);
        }
        Ok(())
    }

    /// Updates the row search text.
    pub fn set_row_search(state: &mut AppState, text: String) {
        state.grid.set_search(text);
        Self::notify_grid_changed(state);
    }

    /// Reports the grid's state to the view catalog (fire-and-forget).
    pub fn notify_grid_changed(state: &mut AppState) {
        let custom = state.custom_view_state();
        state.views.view_changed(&state.grid.column_state(), &custom);
    }

    /// Records an error for display in the header.
    pub fn report_error(state: &mut AppState, error: anyhow::Error) {
        tracing::warn!("{:#}", error);
        state.error_message = Some(format!("{:#}", error));
    }
}
