//! UI layout state management.
//!
//! This module encapsulates layout values that survive restarts: where the
//! column chooser was last left and how wide grid cells are drawn.

use colchooser::Rectangle;
use serde::{Deserialize, Serialize};

/// Natural rectangle of the chooser when no settled position is stored.
pub const DEFAULT_CHOOSER_RECT: Rectangle = Rectangle::new(120.0, 90.0, 520.0, 460.0);

/// State related to UI layout and sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Last settled chooser rectangle
    chooser_rect: Option<Rectangle>,
    /// Width of a grid cell
    column_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            chooser_rect: None,
            column_width: 120.0,
        }
    }

    // ===== Layout Queries =====

    /// Rectangle the chooser should mount at.
    pub fn chooser_rect(&self) -> Rectangle {
        self.chooser_rect.unwrap_or(DEFAULT_CHOOSER_RECT)
    }

    /// Returns the grid cell width.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    // ===== Layout Mutations =====

    /// Remembers where the chooser was when it closed.
    pub fn remember_chooser_rect(&mut self, rect: Rectangle) {
        self.chooser_rect = Some(rect);
    }

    /// Returns a mutable reference to the cell width (for UI handlers).
    pub(crate) fn column_width_mut(&mut self) -> &mut f32 {
        &mut self.column_width
    }
}
