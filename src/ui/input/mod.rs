//! Input handling subsystem for UI interactions.
//!
//! This module translates egui's per-frame pointer state into the
//! platform-neutral events the floating chooser surface understands.

pub mod pointer_input;
