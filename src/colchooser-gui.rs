//! Column Chooser demo application
//!
//! An egui front end for the `colchooser` core: a bond grid whose columns
//! are configured through a floating chooser panel.
//! - Drag hidden columns from the available list into the selected list
//! - Reorder selected columns by dragging, with a live preview
//! - Pin columns left or right, hide or remove them
//! - Move the panel by its body, resize it from any edge or corner

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state, coordination and settings persistence
//! - `io/` - Sample bond data
//! - `state/` - Grid, layout and chooser session state
//! - `ui/` - Panel rendering and input translation

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use state::GridState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the demo.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional row count, e.g. `colchooser-gui 5000`
    let row_count = std::env::args()
        .nth(1)
        .and_then(|arg| match arg.parse::<usize>() {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!(%arg, "ignoring row count: {}", e);
                None
            }
        })
        .unwrap_or(io::DEFAULT_ROW_COUNT);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Column Chooser"),
        ..Default::default()
    };

    eframe::run_native(
        "Column Chooser",
        options,
        Box::new(move |cc| Ok(Box::new(ColumnChooserApp::new(cc, row_count)))),
    )
}

/// The column chooser demo application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles chooser lifecycle, views and search
/// - `SettingsCoordinator` handles persistence
/// - `PanelManager` handles UI panel layout and rendering
struct ColumnChooserApp {
    /// Centralized application state
    state: AppState,
}

impl ColumnChooserApp {
    /// Creates the app with generated rows and settings from persistent storage.
    fn new(cc: &eframe::CreationContext, row_count: usize) -> Self {
        let grid = GridState::new(io::bond_columns(), io::generate_bonds(row_count, io::DEFAULT_SEED));
        tracing::info!(rows = row_count, "sample bonds generated");
        Self {
            state: SettingsCoordinator::restore(cc.storage, AppState::new(grid)),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        let state = &mut self.state;
        match interaction {
            PanelInteraction::OpenChooser => ApplicationCoordinator::open_chooser(state),
            PanelInteraction::SelectView(name) => ApplicationCoordinator::select_view(state, &name),
            PanelInteraction::SaveView(name) => {
                if let Err(e) = ApplicationCoordinator::save_view(state, &name) {
                    ApplicationCoordinator::report_error(state, e);
                }
            }
            PanelInteraction::DeleteView(name) => {
                if let Err(e) = ApplicationCoordinator::delete_view(state, &name) {
                    ApplicationCoordinator::report_error(state, e);
                }
            }
            PanelInteraction::RowSearchChanged(text) => ApplicationCoordinator::set_row_search(state, text),
            PanelInteraction::ChooserApply => ApplicationCoordinator::apply_chooser(state),
            PanelInteraction::ChooserReset => ApplicationCoordinator::reset_chooser(state),
            PanelInteraction::ChooserClose => ApplicationCoordinator::close_chooser(state),
        }
    }
}

impl eframe::App for ColumnChooserApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::persist(storage, &self.state);
    }

    /// Renders all panels via PanelManager, then handles the interaction.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
