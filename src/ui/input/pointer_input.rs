//! Pointer input for the floating column chooser.
//!
//! egui reports pointer state once per frame. This module turns that state
//! into the `Move`/`Down`/`Up` sequence a DOM-style surface expects:
//! - Move first, so hover is known at the press position
//! - Down, unless the press landed on an interactive child widget
//! - Up on any release

use colchooser::{
    CursorAffordance, Delta, FloatingSurface, Point, PointerButtons, PointerEvent, PointerSample, Rectangle,
    ResizeZone,
};
use eframe::egui;

/// Pointer state captured from one egui frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    /// Latest pointer position in screen points
    pub pos: Option<Point>,
    /// Movement since the previous frame
    pub delta: Delta,
    /// Buttons held at the end of the frame
    pub buttons: PointerButtons,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Any button went up this frame
    pub released: bool,
}

impl PointerSnapshot {
    /// Reads the current frame's pointer state.
    pub fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| {
            let pointer = &i.pointer;
            let mut buttons = PointerButtons::NONE;
            if pointer.button_down(egui::PointerButton::Primary) {
                buttons = buttons | PointerButtons::PRIMARY;
            }
            if pointer.button_down(egui::PointerButton::Secondary) {
                buttons = buttons | PointerButtons::SECONDARY;
            }
            if pointer.button_down(egui::PointerButton::Middle) {
                buttons = buttons | PointerButtons::MIDDLE;
            }
            let delta = pointer.delta();
            Self {
                pos: pointer.latest_pos().map(|p| Point::new(p.x, p.y)),
                delta: Delta::new(delta.x, delta.y),
                buttons,
                primary_pressed: pointer.primary_pressed(),
                released: pointer.any_released(),
            }
        })
    }
}

/// Events for one frame, given the surface's current rectangle.
///
/// `child_hot` is true when the pointer is over a widget inside the surface
/// that handles its own presses (lists, buttons, text boxes).
pub fn translate(snapshot: &PointerSnapshot, rect: Rectangle, child_hot: bool) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    if let Some(pos) = snapshot.pos {
        let inside = rect.contains(pos);
        let sample = PointerSample {
            buttons: snapshot.buttons,
            movement: snapshot.delta,
            local: rect.to_local(pos),
            inside,
        };

        if snapshot.primary_pressed {
            // Hover as it was just before the press.
            let before_press = PointerButtons(snapshot.buttons.0 & !PointerButtons::PRIMARY.0);
            events.push(PointerEvent::Move(PointerSample {
                buttons: before_press,
                ..sample
            }));
            if !child_hot {
                events.push(PointerEvent::Down(sample));
            }
        } else if !snapshot.delta.is_zero() {
            events.push(PointerEvent::Move(sample));
        }
    }

    if snapshot.released {
        events.push(PointerEvent::Up);
    }
    events
}

/// Feeds this frame's pointer input to the surface.
pub fn feed_surface(ctx: &egui::Context, surface: &mut FloatingSurface, child_hot: bool) {
    let snapshot = PointerSnapshot::capture(ctx);
    for event in translate(&snapshot, surface.rect(), child_hot) {
        surface.handle(event);
    }
    if surface.mode().is_transient() {
        ctx.request_repaint();
    }
}

/// egui cursor for a surface affordance; `None` leaves the cursor alone.
pub fn cursor_icon(affordance: CursorAffordance) -> Option<egui::CursorIcon> {
    match affordance {
        CursorAffordance::Default => None,
        CursorAffordance::Move => Some(egui::CursorIcon::Grabbing),
        CursorAffordance::Resize(zone) => Some(match zone {
            ResizeZone::North => egui::CursorIcon::ResizeNorth,
            ResizeZone::South => egui::CursorIcon::ResizeSouth,
            ResizeZone::East => egui::CursorIcon::ResizeEast,
            ResizeZone::West => egui::CursorIcon::ResizeWest,
            ResizeZone::NorthEast => egui::CursorIcon::ResizeNorthEast,
            ResizeZone::NorthWest => egui::CursorIcon::ResizeNorthWest,
            ResizeZone::SouthEast => egui::CursorIcon::ResizeSouthEast,
            ResizeZone::SouthWest => egui::CursorIcon::ResizeSouthWest,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colchooser::{InteractionMode, PanelConfig};

    const RECT: Rectangle = Rectangle::new(100.0, 100.0, 500.0, 450.0);

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            pos: Some(Point::new(x, y)),
            delta: Delta::new(1.0, 0.0),
            ..Default::default()
        }
    }

    fn press(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            buttons: PointerButtons::PRIMARY,
            primary_pressed: true,
            ..at(x, y)
        }
    }

    fn surface() -> FloatingSurface {
        FloatingSurface::mount(PanelConfig::column_chooser(), RECT)
    }

    fn run(surface: &mut FloatingSurface, snapshot: PointerSnapshot, child_hot: bool) {
        for event in translate(&snapshot, surface.rect(), child_hot) {
            surface.handle(event);
        }
    }

    #[test]
    fn test_press_on_edge_starts_resize() {
        let mut surface = surface();
        run(&mut surface, press(102.0, 300.0), false);
        assert_eq!(surface.mode(), InteractionMode::Resizing(ResizeZone::West));
    }

    #[test]
    fn test_press_in_body_starts_move() {
        let mut surface = surface();
        run(&mut surface, press(300.0, 300.0), false);
        assert_eq!(surface.mode(), InteractionMode::Moving);

        let drag = PointerSnapshot {
            delta: Delta::new(10.0, -5.0),
            buttons: PointerButtons::PRIMARY,
            ..at(310.0, 295.0)
        };
        run(&mut surface, drag, false);
        assert_eq!(surface.rect(), Rectangle::new(110.0, 95.0, 500.0, 450.0));

        run(&mut surface, PointerSnapshot { released: true, ..Default::default() }, false);
        assert_eq!(surface.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_press_on_child_widget_is_ignored() {
        let mut surface = surface();
        run(&mut surface, press(300.0, 300.0), true);
        assert_eq!(surface.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_still_pointer_emits_nothing() {
        let snapshot = PointerSnapshot {
            delta: Delta::ZERO,
            ..at(300.0, 300.0)
        };
        assert!(translate(&snapshot, RECT, false).is_empty());
    }

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(cursor_icon(CursorAffordance::Default), None);
        assert_eq!(
            cursor_icon(CursorAffordance::Resize(ResizeZone::SouthEast)),
            Some(egui::CursorIcon::ResizeSouthEast)
        );
    }
}
