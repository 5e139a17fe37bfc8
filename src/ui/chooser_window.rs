//! Floating column chooser window.
//!
//! The window is an egui `Area` placed at the floating surface's rectangle.
//! Widget actions are collected while drawing and applied afterwards, then
//! column drags and surface pointer input are processed for the frame.

use colchooser::{ListOrigin, Pin, Rectangle};
use eframe::egui;

use crate::state::ChooserSession;
use crate::ui::input::pointer_input;

/// Result of user interaction with the chooser window
pub enum ChooserInteraction {
    /// User clicked "Apply"
    Apply,
    /// User clicked "Reset"
    Reset,
    /// User clicked "Cancel" or the close button
    Close,
}

/// Edits collected while drawing.
enum ChooserAction {
    SetSearch(String),
    Toggle(String, bool),
    Deselect(String),
    SetPin(String, Pin),
    BeginDrag(ListOrigin, String),
}

const ROW_HEIGHT: f32 = 22.0;
const FRAME_MARGIN: i8 = 10;
/// Space taken by the title row, column captions and buttons.
const CHROME_HEIGHT: f32 = 110.0;

fn to_egui_rect(rect: Rectangle) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.width, rect.height))
}

/// Renders the chooser and runs its input for this frame.
pub fn render_chooser_window(ctx: &egui::Context, session: &mut ChooserSession) -> Option<ChooserInteraction> {
    let area_id = egui::Id::new("column_chooser");
    let screen_rect = to_egui_rect(session.surface.rect());
    let margin = f32::from(FRAME_MARGIN);
    let inner_size = screen_rect.size() - egui::vec2(2.0 * margin, 2.0 * margin);
    let list_height = (inner_size.y - CHROME_HEIGHT).max(ROW_HEIGHT * 3.0);

    let mut interaction = None;
    let mut actions = Vec::new();
    let mut selected_rows: Vec<(String, egui::Rect)> = Vec::new();
    let mut child_hot = false;

    egui::Area::new(area_id)
        .order(egui::Order::Foreground)
        .fixed_pos(screen_rect.min)
        .movable(false)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .inner_margin(egui::Margin::same(FRAME_MARGIN))
                .show(ui, |ui| {
                    ui.set_min_size(inner_size);
                    ui.set_max_size(inner_size);

                    ui.horizontal(|ui| {
                        ui.heading("Columns");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let close = ui.button("✕");
                            child_hot |= close.hovered();
                            if close.clicked() {
                                interaction = Some(ChooserInteraction::Close);
                            }
                        });
                    });
                    ui.separator();

                    ui.columns(2, |columns| {
                        render_available(&mut columns[0], session, list_height, &mut actions, &mut child_hot);
                        render_selected(
                            &mut columns[1],
                            session,
                            list_height,
                            &mut actions,
                            &mut selected_rows,
                            &mut child_hot,
                        );
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        let reset = ui.button("Reset");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let apply = ui.button("Apply");
                            let cancel = ui.button("Cancel");
                            child_hot |= apply.hovered() || cancel.hovered();
                            if apply.clicked() {
                                interaction = Some(ChooserInteraction::Apply);
                            } else if cancel.clicked() {
                                interaction = Some(ChooserInteraction::Close);
                            }
                        });
                        child_hot |= reset.hovered();
                        if reset.clicked() {
                            interaction = Some(ChooserInteraction::Reset);
                        }
                    });
                });
        });

    apply_actions(session, actions);

    // Popups (e.g. the view selector) live on their own layers above the window.
    let pointer = ctx.input(|i| i.pointer.latest_pos());
    if let Some(pos) = pointer {
        let own_layer = egui::LayerId::new(egui::Order::Foreground, area_id);
        if ctx.layer_id_at(pos).is_some_and(|layer| layer != own_layer) && screen_rect.contains(pos) {
            child_hot = true;
        }
    }

    track_column_drag(ctx, session, &selected_rows, pointer);

    let dragging = session.is_dragging_column();
    pointer_input::feed_surface(ctx, &mut session.surface, child_hot || dragging);
    if let Some(icon) = pointer_input::cursor_icon(session.surface.cursor()) {
        ctx.set_cursor_icon(icon);
    }

    interaction
}

fn render_available(
    ui: &mut egui::Ui,
    session: &ChooserSession,
    list_height: f32,
    actions: &mut Vec<ChooserAction>,
    child_hot: &mut bool,
) {
    let chooser = &session.chooser;
    ui.label(egui::RichText::new("Available").strong());

    let mut search = chooser.search_text().to_string();
    let search_response = ui.add(egui::TextEdit::singleline(&mut search).hint_text("Search columns"));
    *child_hot |= search_response.hovered();
    if search_response.changed() {
        actions.push(ChooserAction::SetSearch(search));
    }

    let output = egui::ScrollArea::vertical()
        .id_salt("available_columns")
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in chooser.visible_available() {
                ui.horizontal(|ui| {
                    ui.set_min_height(ROW_HEIGHT);
                    let mut visible = !entry.hidden;
                    if ui.checkbox(&mut visible, "").changed() {
                        actions.push(ChooserAction::Toggle(entry.id.clone(), visible));
                    }

                    let draggable = chooser.is_draggable(ListOrigin::Available, &entry.id);
                    let sense = if draggable { egui::Sense::drag() } else { egui::Sense::hover() };
                    let label = ui.add(egui::Label::new(entry.id.as_str()).sense(sense).selectable(false));
                    if draggable {
                        if label.hovered() && !session.is_dragging_column() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                        }
                        if label.drag_started() {
                            actions.push(ChooserAction::BeginDrag(ListOrigin::Available, entry.id.clone()));
                        }
                    }
                });
            }
        });
    *child_hot |= ui.rect_contains_pointer(output.inner_rect);
}

fn render_selected(
    ui: &mut egui::Ui,
    session: &ChooserSession,
    list_height: f32,
    actions: &mut Vec<ChooserAction>,
    rows: &mut Vec<(String, egui::Rect)>,
    child_hot: &mut bool,
) {
    let chooser = &session.chooser;
    let dragged = chooser.drag().map(|ctx| ctx.payload().column_id.as_str());
    let drop_target = session.drop_target();

    ui.label(egui::RichText::new("Selected").strong());
    // Keeps the list aligned with the available column's search box.
    ui.add_space(ui.spacing().interact_size.y);

    let output = egui::ScrollArea::vertical()
        .id_salt("selected_columns")
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in chooser.selected_for_display() {
                let row = ui.horizontal(|ui| {
                    ui.set_min_height(ROW_HEIGHT);
                    let mut text = egui::RichText::new(entry.id.as_str());
                    if dragged == Some(entry.id.as_str()) {
                        text = text.weak();
                    }
                    let label = ui.add(egui::Label::new(text).sense(egui::Sense::drag()).selectable(false));
                    if label.hovered() && !session.is_dragging_column() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                    }
                    if label.drag_started() {
                        actions.push(ChooserAction::BeginDrag(ListOrigin::Selected, entry.id.clone()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove from grid").clicked() {
                            actions.push(ChooserAction::Deselect(entry.id.clone()));
                        }
                        let pins: &[(Pin, &str, &str)] = match entry.pinned {
                            Pin::None => &[(Pin::Right, "⇥", "Pin right"), (Pin::Left, "⇤", "Pin left")],
                            Pin::Left | Pin::Right => &[(Pin::None, "Unpin", "Unpin")],
                        };
                        for (pin, label, hint) in pins {
                            if ui.small_button(*label).on_hover_text(*hint).clicked() {
                                actions.push(ChooserAction::SetPin(entry.id.clone(), *pin));
                            }
                        }
                        if entry.pinned != Pin::None {
                            ui.label(egui::RichText::new(format!("📌 {}", entry.pinned)).weak());
                        }
                    });
                });

                let rect = row.response.rect;
                if drop_target == Some(entry.id.as_str()) {
                    let stroke = egui::Stroke::new(1.5, ui.visuals().selection.stroke.color);
                    ui.painter().rect_stroke(rect, 2.0, stroke, egui::StrokeKind::Outside);
                }
                rows.push((entry.id.clone(), rect));
            }
        });
    *child_hot |= ui.rect_contains_pointer(output.inner_rect);
}

fn apply_actions(session: &mut ChooserSession, actions: Vec<ChooserAction>) {
    for action in actions {
        match action {
            ChooserAction::SetSearch(text) => session.chooser.set_search_text(text),
            ChooserAction::Toggle(id, visible) => session.chooser.toggle_visibility(&id, visible),
            ChooserAction::Deselect(id) => session.chooser.deselect(&id),
            ChooserAction::SetPin(id, pin) => session.chooser.set_pin(&id, pin),
            ChooserAction::BeginDrag(origin, id) => {
                if !session.begin_column_drag(origin, &id) {
                    tracing::debug!(%origin, column = %id, "drag refused");
                }
            }
        }
    }
}

/// Hover, drop and cancel for a column drag in progress.
fn track_column_drag(
    ctx: &egui::Context,
    session: &mut ChooserSession,
    rows: &[(String, egui::Rect)],
    pointer: Option<egui::Pos2>,
) {
    if !session.is_dragging_column() {
        return;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        session.cancel_column_drag();
        return;
    }

    let target = pointer.and_then(|p| rows.iter().find(|(_, rect)| rect.contains(p)).map(|(id, _)| id.as_str()));
    session.hover_column(target);

    if ctx.input(|i| i.pointer.any_released()) {
        session.release_column();
        return;
    }

    if let (Some(pos), Some(drag)) = (pointer, session.chooser.drag()) {
        paint_drag_ghost(ctx, pos, &drag.payload().column_id);
    }
    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    ctx.request_repaint();
}

fn paint_drag_ghost(ctx: &egui::Context, pos: egui::Pos2, column_id: &str) {
    let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("column_drag_ghost")));
    let visuals = ctx.style().visuals.clone();
    let galley = painter.layout_no_wrap(
        column_id.to_string(),
        egui::FontId::proportional(14.0),
        visuals.strong_text_color(),
    );
    let rect = egui::Rect::from_min_size(pos + egui::vec2(12.0, 8.0), galley.size() + egui::vec2(12.0, 6.0));
    painter.rect_filled(rect, 4.0, visuals.selection.bg_fill);
    painter.galley(rect.min + egui::vec2(6.0, 3.0), galley, visuals.strong_text_color());
}
