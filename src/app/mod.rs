//! Application-level modules for the column chooser demo.
//!
//! This module contains the application coordinator, settings persistence
//! and the centralized state they operate on.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
