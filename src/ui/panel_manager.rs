//! Panel orchestration and layout management.
//!
//! Coordinates the header, grid, status bar and the floating column chooser,
//! and turns their interactions into one result for the application.

use eframe::egui;

use crate::app::AppState;
use crate::ui::{chooser_window, grid_panel, header, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested the column chooser
    OpenChooser,
    /// A saved view was picked
    SelectView(String),
    /// User asked to save the current grid as a view
    SaveView(String),
    /// User asked to delete a view
    DeleteView(String),
    /// Row search text changed
    RowSearchChanged(String),
    /// Chooser "Apply"
    ChooserApply,
    /// Chooser "Reset"
    ChooserReset,
    /// Chooser "Cancel" or close button
    ChooserClose,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenChooser => PanelInteraction::OpenChooser,
                    header::HeaderInteraction::SelectView(name) => PanelInteraction::SelectView(name),
                    header::HeaderInteraction::SaveView(name) => PanelInteraction::SaveView(name),
                    header::HeaderInteraction::DeleteView(name) => PanelInteraction::DeleteView(name),
                    header::HeaderInteraction::RowSearchChanged(text) => PanelInteraction::RowSearchChanged(text),
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let grid_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(grid_frame).show(ctx, |ui| {
            grid_panel::render_grid_panel(ui, state);
        });

        // The chooser floats above everything else.
        if let Some(session) = state.chooser.as_mut() {
            if let Some(chooser_interaction) = chooser_window::render_chooser_window(ctx, session) {
                interaction = Some(match chooser_interaction {
                    chooser_window::ChooserInteraction::Apply => PanelInteraction::ChooserApply,
                    chooser_window::ChooserInteraction::Reset => PanelInteraction::ChooserReset,
                    chooser_window::ChooserInteraction::Close => PanelInteraction::ChooserClose,
                });
            }
        }

        interaction
    }
}
