//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the column chooser demo:
//! - Header panel (views, row search, chooser button)
//! - Grid panel (pinned column order, virtual row scrolling)
//! - Chooser window (floating, movable, resizable column chooser)
//! - Status bar (counts, current view, surface activity)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (egui pointer state to surface events)

pub mod header;
pub mod grid_panel;
pub mod chooser_window;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
