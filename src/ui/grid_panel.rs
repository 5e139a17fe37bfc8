//! Bond grid rendering
//!
//! Draws the visible columns in pinned order with a fixed cell width and
//! virtual scrolling over the rows that match the row search.

use colchooser::Pin;
use eframe::egui;

use crate::app::AppState;

/// Height of a header or data row
pub const ROW_HEIGHT: f32 = 22.0;

/// Renders the grid into the central panel.
pub fn render_grid_panel(ui: &mut egui::Ui, state: &AppState) {
    let columns = state.grid.display_columns();
    if columns.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No visible columns. Open the column chooser to add some.");
        });
        return;
    }

    let cell_width = state.layout.column_width();
    let row_width = cell_width * columns.len() as f32;
    let rows = state.grid.filtered_rows();
    let font_id = egui::FontId::proportional(14.0);

    egui::ScrollArea::horizontal()
        .id_salt("grid_horizontal_scroll")
        .show(ui, |ui| {
            // Header
            let (header_rect, _) = ui.allocate_exact_size(egui::vec2(row_width, ROW_HEIGHT), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(header_rect, 0.0, ui.visuals().faint_bg_color);
            for (i, column) in columns.iter().enumerate() {
                let cell = cell_rect(header_rect, i, cell_width);
                if column.pinned != Pin::None {
                    painter.rect_filled(cell, 0.0, ui.visuals().selection.bg_fill.gamma_multiply(0.4));
                }
                let title = match column.pinned {
                    Pin::Left => format!("📌 {}", column.id),
                    Pin::Right => format!("{} 📌", column.id),
                    Pin::None => column.id.clone(),
                };
                paint_cell_text(painter, cell, title, font_id.clone(), ui.visuals().strong_text_color());
            }
            ui.separator();

            // Rows
            egui::ScrollArea::vertical()
                .id_salt("grid_rows_scroll")
                .auto_shrink([false, false])
                .show_rows(ui, ROW_HEIGHT, rows.len(), |ui, range| {
                    for index in range {
                        let row = rows[index];
                        let (row_rect, _) =
                            ui.allocate_exact_size(egui::vec2(row_width, ROW_HEIGHT), egui::Sense::hover());
                        let painter = ui.painter();
                        if index % 2 == 1 {
                            painter.rect_filled(row_rect, 0.0, ui.visuals().faint_bg_color);
                        }
                        for (i, column) in columns.iter().enumerate() {
                            let text = row.get(&column.id).cloned().unwrap_or_default();
                            paint_cell_text(
                                painter,
                                cell_rect(row_rect, i, cell_width),
                                text,
                                font_id.clone(),
                                ui.visuals().text_color(),
                            );
                        }
                    }
                });
        });
}

fn cell_rect(row_rect: egui::Rect, index: usize, cell_width: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x + index as f32 * cell_width, row_rect.min.y),
        egui::vec2(cell_width, row_rect.height()),
    )
}

fn paint_cell_text(painter: &egui::Painter, cell: egui::Rect, text: String, font_id: egui::FontId, color: egui::Color32) {
    let clipped = painter.with_clip_rect(cell.shrink2(egui::vec2(2.0, 0.0)));
    clipped.text(cell.left_center() + egui::vec2(4.0, 0.0), egui::Align2::LEFT_CENTER, text, font_id, color);
}
