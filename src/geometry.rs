//! Rectangle arithmetic for the floating panel.
//!
//! Coordinates are pixel offsets relative to the viewport. The resize rules
//! live here so the interaction state machine only decides *when* to move or
//! resize, never *how much*.

use serde::{Deserialize, Serialize};

/// A point in surface-local or viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pointer movement since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Position and size of the floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Edge or corner of a rectangle that the pointer can grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeZone {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeZone {
    pub const ALL: [ResizeZone; 8] = [
        ResizeZone::North,
        ResizeZone::South,
        ResizeZone::East,
        ResizeZone::West,
        ResizeZone::NorthEast,
        ResizeZone::NorthWest,
        ResizeZone::SouthEast,
        ResizeZone::SouthWest,
    ];

    /// True if dragging this zone moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeZone::North | ResizeZone::NorthEast | ResizeZone::NorthWest)
    }

    /// True if dragging this zone moves the bottom edge.
    pub fn moves_bottom(self) -> bool {
        matches!(self, ResizeZone::South | ResizeZone::SouthEast | ResizeZone::SouthWest)
    }

    /// True if dragging this zone moves the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeZone::West | ResizeZone::NorthWest | ResizeZone::SouthWest)
    }

    /// True if dragging this zone moves the right edge.
    pub fn moves_right(self) -> bool {
        matches!(self, ResizeZone::East | ResizeZone::NorthEast | ResizeZone::SouthEast)
    }

    /// CSS-style cursor name (`"ne-resize"` etc.), handy for logging and web front ends.
    pub fn cursor_name(self) -> &'static str {
        match self {
            ResizeZone::North => "n-resize",
            ResizeZone::South => "s-resize",
            ResizeZone::East => "e-resize",
            ResizeZone::West => "w-resize",
            ResizeZone::NorthEast => "ne-resize",
            ResizeZone::NorthWest => "nw-resize",
            ResizeZone::SouthEast => "se-resize",
            ResizeZone::SouthWest => "sw-resize",
        }
    }
}

/// Applies `change` to `extent` unless that would shrink it below `min`.
///
/// Growing is never blocked, so an extent that starts under its minimum can
/// still recover.
fn clamped_extent(extent: f32, change: f32, min: f32) -> Option<f32> {
    let next = extent + change;
    (next >= min || change >= 0.0).then_some(next)
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Converts a viewport point into surface-local coordinates.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }

    /// True if the viewport point lies within the rectangle (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Rectangle shifted by `delta`, size unchanged. Moving is never clamped.
    pub fn translated(&self, delta: Delta) -> Rectangle {
        Rectangle { x: self.x + delta.dx, y: self.y + delta.dy, ..*self }
    }

    /// Rectangle grown (never shrunk) to at least the given minimum size.
    pub fn at_least(&self, min_width: f32, min_height: f32) -> Rectangle {
        Rectangle {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..*self
        }
    }

    /// Resize zone under a surface-local point, if any.
    ///
    /// A point is in an edge zone when it is closer than `threshold` to that
    /// edge. Corners are the intersection of two edge zones and win over
    /// single edges.
    pub fn hit_test(&self, local: Point, threshold: f32) -> Option<ResizeZone> {
        let top = local.y < threshold;
        let left = local.x < threshold;
        let bottom = self.height - local.y < threshold;
        let right = self.width - local.x < threshold;

        match (top, bottom, left, right) {
            (true, _, true, _) => Some(ResizeZone::NorthWest),
            (true, _, _, true) => Some(ResizeZone::NorthEast),
            (_, true, true, _) => Some(ResizeZone::SouthWest),
            (_, true, _, true) => Some(ResizeZone::SouthEast),
            (true, _, _, _) => Some(ResizeZone::North),
            (_, true, _, _) => Some(ResizeZone::South),
            (_, _, true, _) => Some(ResizeZone::West),
            (_, _, _, true) => Some(ResizeZone::East),
            _ => None,
        }
    }

    /// Rectangle after dragging `zone` by `delta`.
    ///
    /// Each implicated dimension changes only if the result stays at or above
    /// its minimum; otherwise that dimension and its paired coordinate are
    /// held for this step. The rectangle never grows the opposite way to stay
    /// above the minimum.
    pub fn resized(&self, zone: ResizeZone, delta: Delta, min_width: f32, min_height: f32) -> Rectangle {
        let mut next = *self;

        if zone.moves_top() {
            if let Some(height) = clamped_extent(self.height, -delta.dy, min_height) {
                next.height = height;
                next.y = self.y + delta.dy;
            }
        } else if zone.moves_bottom() {
            if let Some(height) = clamped_extent(self.height, delta.dy, min_height) {
                next.height = height;
            }
        }

        if zone.moves_left() {
            if let Some(width) = clamped_extent(self.width, -delta.dx, min_width) {
                next.width = width;
                next.x = self.x + delta.dx;
            }
        } else if zone.moves_right() {
            if let Some(width) = clamped_extent(self.width, delta.dx, min_width) {
                next.width = width;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Rectangle {
        Rectangle::new(100.0, 50.0, 300.0, 200.0)
    }

    #[test]
    fn test_hit_test_edges_and_corners() {
        let r = panel();
        assert_eq!(r.hit_test(Point::new(2.0, 2.0), 6.0), Some(ResizeZone::NorthWest));
        assert_eq!(r.hit_test(Point::new(298.0, 1.0), 6.0), Some(ResizeZone::NorthEast));
        assert_eq!(r.hit_test(Point::new(1.0, 199.0), 6.0), Some(ResizeZone::SouthWest));
        assert_eq!(r.hit_test(Point::new(299.0, 199.0), 6.0), Some(ResizeZone::SouthEast));
        assert_eq!(r.hit_test(Point::new(150.0, 3.0), 6.0), Some(ResizeZone::North));
        assert_eq!(r.hit_test(Point::new(150.0, 197.0), 6.0), Some(ResizeZone::South));
        assert_eq!(r.hit_test(Point::new(0.0, 100.0), 6.0), Some(ResizeZone::West));
        assert_eq!(r.hit_test(Point::new(295.0, 100.0), 6.0), Some(ResizeZone::East));
        assert_eq!(r.hit_test(Point::new(150.0, 100.0), 6.0), None);
    }

    #[test]
    fn test_hit_test_threshold_is_exclusive() {
        let r = panel();
        assert_eq!(r.hit_test(Point::new(6.0, 100.0), 6.0), None);
        assert_eq!(r.hit_test(Point::new(294.0, 100.0), 6.0), None);
        assert_eq!(r.hit_test(Point::new(5.9, 100.0), 6.0), Some(ResizeZone::West));
    }

    #[test]
    fn test_north_resize_clamps_when_shrinking_below_min() {
        let r = Rectangle::new(0.0, 40.0, 300.0, 102.0);

        let shrunk = r.resized(ResizeZone::North, Delta::new(0.0, 5.0), 50.0, 100.0);
        assert_eq!(shrunk.height, 102.0);
        assert_eq!(shrunk.y, 40.0);

        let grown = r.resized(ResizeZone::North, Delta::new(0.0, -5.0), 50.0, 100.0);
        assert_eq!(grown.height, 107.0);
        assert_eq!(grown.y, 35.0);
    }

    #[test]
    fn test_corner_clamps_each_axis_independently() {
        let r = Rectangle::new(10.0, 10.0, 101.0, 300.0);
        let next = r.resized(ResizeZone::SouthWest, Delta::new(4.0, -20.0), 100.0, 100.0);
        // Width would drop to 97: held along with x.
        assert_eq!(next.width, 101.0);
        assert_eq!(next.x, 10.0);
        // Height shrinks freely and y never moves for a south edge.
        assert_eq!(next.height, 280.0);
        assert_eq!(next.y, 10.0);
    }

    #[test]
    fn test_east_and_south_do_not_move_origin() {
        let r = panel();
        let next = r.resized(ResizeZone::SouthEast, Delta::new(10.0, 20.0), 50.0, 50.0);
        assert_eq!(next.origin(), r.origin());
        assert_eq!(next.width, 310.0);
        assert_eq!(next.height, 220.0);
    }

    #[test]
    fn test_undersized_rect_can_still_grow() {
        let r = Rectangle::new(0.0, 0.0, 80.0, 80.0);
        let next = r.resized(ResizeZone::East, Delta::new(5.0, 0.0), 100.0, 100.0);
        assert_eq!(next.width, 85.0);
        let next = r.resized(ResizeZone::East, Delta::new(-5.0, 0.0), 100.0, 100.0);
        assert_eq!(next.width, 80.0);
    }

    #[test]
    fn test_translate_is_unclamped() {
        let r = panel().translated(Delta::new(-500.0, -500.0));
        assert_eq!(r.origin(), Point::new(-400.0, -450.0));
        assert_eq!(r.width, 300.0);
    }
}
