//! Header panel UI rendering
//!
//! Handles the top bar with the view selector, view saving, row search and
//! the button that opens the column chooser.

use eframe::egui;
use egui::Color32;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Columns…"
    OpenChooser,
    /// User picked a saved view
    SelectView(String),
    /// User clicked "Save view" with the given name
    SaveView(String),
    /// User clicked "Delete" on the current view
    DeleteView(String),
    /// Row search text changed
    RowSearchChanged(String),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let columns_button = ui.add_enabled(!state.is_chooser_open(), egui::Button::new("☰ Columns…"));
        if columns_button.clicked() {
            interaction = Some(HeaderInteraction::OpenChooser);
        }

        ui.separator();

        ui.label("View:");
        let current = state.views.current_name().unwrap_or("(none)").to_string();
        let selected_text = if state.views.is_modified() {
            format!("{} *", current)
        } else {
            current
        };
        egui::ComboBox::from_id_salt("view_selector")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for name in state.views.names() {
                    let is_current = state.views.current_name() == Some(name);
                    if ui.selectable_label(is_current, name).clicked() {
                        interaction = Some(HeaderInteraction::SelectView(name.to_string()));
                    }
                }
            });

        ui.add(
            egui::TextEdit::singleline(&mut state.view_name_input)
                .hint_text("View name")
                .desired_width(120.0),
        );
        if ui.button("💾 Save view").clicked() {
            interaction = Some(HeaderInteraction::SaveView(state.view_name_input.clone()));
        }
        if let Some(name) = state.views.current_name() {
            if ui.button("🗑 Delete").clicked() {
                interaction = Some(HeaderInteraction::DeleteView(name.to_string()));
            }
        }

        ui.separator();

        // Row search
        ui.label("🔍");
        let mut search = state.grid.search().to_string();
        let search_response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search rows")
                .desired_width(160.0),
        );
        if search_response.changed() {
            interaction = Some(HeaderInteraction::RowSearchChanged(search));
        }

        // Cell width to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Slider::new(state.layout.column_width_mut(), 60.0..=300.0).text("Cell width"));
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
