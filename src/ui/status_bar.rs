//! Status bar UI rendering
//!
//! Shows row and column counts, the current view, and what the chooser's
//! floating surface is doing.

use colchooser::{ColumnGrid, InteractionMode};
use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let shown = state.grid.filtered_rows().len();
        let total = state.grid.rows().len();
        let rows = if shown == total {
            format!("Rows: {}", total)
        } else {
            format!("Rows: {} / {}", shown, total)
        };
        ui.label(RichText::new(rows).strong());

        ui.label(RichText::new("|").strong());
        let visible = state.grid.display_columns().len();
        let all = state.grid.column_state().len();
        ui.label(RichText::new(format!("Columns: {} / {}", visible, all)).strong());

        if let Some(name) = state.views.current_name() {
            ui.label(RichText::new("|").strong());
            let mut text = RichText::new(format!("View: {}", name)).strong();
            if state.views.is_modified() {
                text = text.color(egui::Color32::YELLOW);
            }
            ui.label(text);
        }

        if let Some(session) = &state.chooser {
            let activity = match session.surface.mode() {
                InteractionMode::Idle => None,
                InteractionMode::Hovering(zone) => Some(format!("resize {}", zone.cursor_name())),
                InteractionMode::Moving => Some("moving".to_string()),
                InteractionMode::Resizing(zone) => Some(format!("resizing {}", zone.cursor_name())),
            };
            if let Some(activity) = activity {
                let rect = session.surface.rect();
                ui.label(RichText::new("|").strong());
                ui.label(format!(
                    "Chooser: {} ({:.0}×{:.0} at {:.0},{:.0})",
                    activity, rect.width, rect.height, rect.x, rect.y
                ));
            }
        }
    });
}
