//! Pointer-driven move/resize state machine for a floating surface.
//!
//! The machine is purely reactive: it holds no timers and every transition
//! happens synchronously inside [`FloatingSurface::handle`] for one event.
//! A surface is created when the panel mounts and dropped when it unmounts,
//! which is the whole subscription lifetime.

use crate::config::PanelConfig;
use crate::geometry::{Delta, Point, Rectangle, ResizeZone};

/// Bitmask of pressed pointer buttons, DOM `buttons` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons(pub u8);

impl PointerButtons {
    pub const NONE: PointerButtons = PointerButtons(0);
    pub const PRIMARY: PointerButtons = PointerButtons(1);
    pub const SECONDARY: PointerButtons = PointerButtons(2);
    pub const MIDDLE: PointerButtons = PointerButtons(4);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when the primary button is the only one held.
    pub fn is_primary_only(self) -> bool {
        self == Self::PRIMARY
    }
}

impl std::ops::BitOr for PointerButtons {
    type Output = PointerButtons;

    fn bitor(self, rhs: Self) -> Self::Output {
        PointerButtons(self.0 | rhs.0)
    }
}

/// What the platform reports with every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Buttons held after this event.
    pub buttons: PointerButtons,
    /// Movement since the previous event.
    pub movement: Delta,
    /// Pointer position relative to the surface's top-left corner.
    pub local: Point,
    /// Whether the event target is the surface or one of its descendants.
    pub inside: bool,
}

/// Platform-neutral pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up,
}

/// Current interaction with the surface. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Hovering(ResizeZone),
    Moving,
    Resizing(ResizeZone),
}

impl InteractionMode {
    /// True while a move or resize is in flight.
    pub fn is_transient(self) -> bool {
        matches!(self, InteractionMode::Moving | InteractionMode::Resizing(_))
    }
}

/// Cursor the front end should show over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Default,
    Move,
    Resize(ResizeZone),
}

/// A movable, resizable rectangle driven by raw pointer events.
#[derive(Debug, Clone)]
pub struct FloatingSurface {
    config: PanelConfig,
    rect: Rectangle,
    mode: InteractionMode,
}

impl FloatingSurface {
    /// Mounts a surface at its natural layout, grown to the configured minimums.
    pub fn mount(config: PanelConfig, natural: Rectangle) -> Self {
        let rect = config.settle(natural);
        tracing::debug!(?rect, "floating surface mounted");
        Self {
            config,
            rect,
            mode: InteractionMode::Idle,
        }
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Rectangle if no move/resize is in flight.
    pub fn settled_rect(&self) -> Option<Rectangle> {
        (!self.mode.is_transient()).then_some(self.rect)
    }

    pub fn cursor(&self) -> CursorAffordance {
        match self.mode {
            InteractionMode::Idle => CursorAffordance::Default,
            InteractionMode::Moving => CursorAffordance::Move,
            InteractionMode::Hovering(zone) | InteractionMode::Resizing(zone) => CursorAffordance::Resize(zone),
        }
    }

    /// Feeds one event and returns the rectangle afterwards.
    pub fn handle(&mut self, event: PointerEvent) -> Rectangle {
        let before = self.mode;
        match event {
            PointerEvent::Down(sample) => self.on_down(sample),
            PointerEvent::Move(sample) => self.on_move(sample),
            PointerEvent::Up => self.on_up(),
        }
        if before != self.mode {
            tracing::debug!(from = ?before, to = ?self.mode, "interaction mode changed");
        }
        self.rect
    }

    fn on_down(&mut self, sample: PointerSample) {
        if !sample.buttons.is_primary_only() {
            return;
        }
        match self.mode {
            InteractionMode::Hovering(zone) => self.mode = InteractionMode::Resizing(zone),
            // Hover may not have been computed for this position yet.
            InteractionMode::Idle if sample.inside => self.mode = InteractionMode::Moving,
            _ => {}
        }
    }

    fn on_move(&mut self, sample: PointerSample) {
        match self.mode {
            InteractionMode::Moving => {
                self.rect = self.rect.translated(sample.movement);
            }
            InteractionMode::Resizing(zone) => {
                self.rect = self.rect.resized(
                    zone,
                    sample.movement,
                    self.config.min_width(),
                    self.config.min_height(),
                );
            }
            InteractionMode::Idle | InteractionMode::Hovering(_) => {
                let zone = if sample.inside && sample.buttons.is_none() {
                    self.rect.hit_test(sample.local, self.config.hit_threshold())
                } else {
                    None
                };
                self.mode = zone.map_or(InteractionMode::Idle, InteractionMode::Hovering);
            }
        }
    }

    fn on_up(&mut self) {
        if self.mode.is_transient() {
            self.mode = InteractionMode::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> FloatingSurface {
        let config = PanelConfig::new(100.0, 100.0).unwrap();
        FloatingSurface::mount(config, Rectangle::new(50.0, 50.0, 200.0, 150.0))
    }

    fn hover(local: Point) -> PointerEvent {
        PointerEvent::Move(PointerSample {
            buttons: PointerButtons::NONE,
            movement: Delta::ZERO,
            local,
            inside: true,
        })
    }

    fn press(local: Point, inside: bool) -> PointerEvent {
        PointerEvent::Down(PointerSample {
            buttons: PointerButtons::PRIMARY,
            movement: Delta::ZERO,
            local,
            inside,
        })
    }

    fn drag(dx: f32, dy: f32) -> PointerEvent {
        PointerEvent::Move(PointerSample {
            buttons: PointerButtons::PRIMARY,
            movement: Delta::new(dx, dy),
            local: Point::default(),
            inside: true,
        })
    }

    #[test]
    fn test_hover_enters_and_leaves_zone() {
        let mut s = surface();
        s.handle(hover(Point::new(100.0, 2.0)));
        assert_eq!(s.mode(), InteractionMode::Hovering(ResizeZone::North));
        assert_eq!(s.cursor(), CursorAffordance::Resize(ResizeZone::North));

        s.handle(hover(Point::new(100.0, 70.0)));
        assert_eq!(s.mode(), InteractionMode::Idle);
        assert_eq!(s.cursor(), CursorAffordance::Default);
    }

    #[test]
    fn test_hover_ignored_with_button_held() {
        let mut s = surface();
        s.handle(PointerEvent::Move(PointerSample {
            buttons: PointerButtons::SECONDARY,
            movement: Delta::ZERO,
            local: Point::new(1.0, 1.0),
            inside: true,
        }));
        assert_eq!(s.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_hover_resets_when_pointer_leaves_surface() {
        let mut s = surface();
        s.handle(hover(Point::new(1.0, 1.0)));
        assert_eq!(s.mode(), InteractionMode::Hovering(ResizeZone::NorthWest));
        s.handle(PointerEvent::Move(PointerSample {
            inside: false,
            ..Default::default()
        }));
        assert_eq!(s.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_press_inside_moves_surface() {
        let mut s = surface();
        s.handle(press(Point::new(100.0, 70.0), true));
        assert_eq!(s.mode(), InteractionMode::Moving);
        assert_eq!(s.settled_rect(), None);

        let rect = s.handle(drag(15.0, -10.0));
        assert_eq!(rect, Rectangle::new(65.0, 40.0, 200.0, 150.0));

        s.handle(PointerEvent::Up);
        assert_eq!(s.mode(), InteractionMode::Idle);
        assert_eq!(s.settled_rect(), Some(rect));
    }

    #[test]
    fn test_press_outside_does_nothing() {
        let mut s = surface();
        s.handle(press(Point::new(-20.0, -20.0), false));
        assert_eq!(s.mode(), InteractionMode::Idle);
        s.handle(drag(10.0, 10.0));
        assert_eq!(s.rect(), Rectangle::new(50.0, 50.0, 200.0, 150.0));
    }

    #[test]
    fn test_press_while_hovering_resizes() {
        let mut s = surface();
        s.handle(hover(Point::new(198.0, 148.0)));
        s.handle(press(Point::new(198.0, 148.0), true));
        assert_eq!(s.mode(), InteractionMode::Resizing(ResizeZone::SouthEast));

        let rect = s.handle(drag(20.0, -60.0));
        // Height would fall to 90 (< 100): held.
        assert_eq!(rect, Rectangle::new(50.0, 50.0, 220.0, 150.0));
    }

    #[test]
    fn test_non_primary_press_is_ignored() {
        let mut s = surface();
        s.handle(PointerEvent::Down(PointerSample {
            buttons: PointerButtons::PRIMARY | PointerButtons::SECONDARY,
            movement: Delta::ZERO,
            local: Point::new(100.0, 70.0),
            inside: true,
        }));
        assert_eq!(s.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_second_press_does_not_restart_interaction() {
        let mut s = surface();
        s.handle(hover(Point::new(0.0, 70.0)));
        s.handle(press(Point::new(0.0, 70.0), true));
        s.handle(press(Point::new(100.0, 70.0), true));
        assert_eq!(s.mode(), InteractionMode::Resizing(ResizeZone::West));
    }

    #[test]
    fn test_mount_settles_to_minimum() {
        let config = PanelConfig::new(300.0, 300.0).unwrap();
        let s = FloatingSurface::mount(config, Rectangle::new(0.0, 0.0, 10.0, 400.0));
        assert_eq!(s.rect(), Rectangle::new(0.0, 0.0, 300.0, 400.0));
    }
}
