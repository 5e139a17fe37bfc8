//! Settings persistence coordination.
//!
//! Layout, saved views and the grid's column state are stored in eframe's
//! persistent storage as JSON strings, one key each.

use colchooser::{ColumnEntry, ColumnGrid, ColumnStateUpdate, ViewCatalog};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::state::LayoutState;

/// Storage key for [`LayoutState`].
pub const LAYOUT_KEY: &str = "layout";
/// Storage key for the [`ViewCatalog`].
pub const VIEWS_KEY: &str = "views";
/// Storage key for the grid's last column state.
pub const GRID_COLUMNS_KEY: &str = "grid_columns";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Restores layout, views and column state into a freshly built state.
    ///
    /// Missing or unreadable keys leave the corresponding defaults in place.
    pub fn restore(storage: Option<&dyn eframe::Storage>, state: AppState) -> AppState {
        let layout: LayoutState = Self::load_setting(storage, LAYOUT_KEY);
        let views: ViewCatalog = Self::load_setting(storage, VIEWS_KEY);
        let mut state = AppState::with_settings(state.grid, layout, views);

        if let Some(columns) = Self::try_load_setting::<Vec<ColumnEntry>>(storage, GRID_COLUMNS_KEY) {
            state.grid.apply_column_state(ColumnStateUpdate::ordered(columns));
        }
        tracing::debug!(views = state.views.views().len(), "settings restored");
        state
    }

    /// Persists everything [`restore`](Self::restore) reads back.
    pub fn persist(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_setting(storage, LAYOUT_KEY, &state.layout);
        Self::save_setting(storage, VIEWS_KEY, &state.views);
        Self::save_setting(storage, GRID_COLUMNS_KEY, &state.grid.column_state());
        storage.flush();
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => tracing::warn!(key, "failed to serialize setting: {}", e),
        }
    }

    /// Loads a setting from persistent storage with a default fallback.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::load_setting_or(storage, key, T::default())
    }

    /// Loads a setting from persistent storage with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "ignoring unreadable setting: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{bond_columns, generate_bonds};
    use crate::state::GridState;
    use colchooser::{Pin, Rectangle};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn fresh_state() -> AppState {
        AppState::new(GridState::new(bond_columns(), generate_bonds(3, 7)))
    }

    #[test]
    fn test_restore_without_storage_keeps_defaults() {
        let state = SettingsCoordinator::restore(None, fresh_state());
        assert_eq!(state.layout, LayoutState::new());
        assert!(state.views.views().is_empty());
        assert_eq!(state.grid.column_state(), bond_columns());
    }

    #[test]
    fn test_persist_then_restore() {
        let mut storage = MockStorage::default();
        let mut state = fresh_state();
        state.layout.remember_chooser_rect(Rectangle::new(1.0, 2.0, 500.0, 450.0));
        state.views.save("Trading", state.grid.column_state(), serde_json::json!({"search": "eur"}));
        let mut columns = state.grid.column_state();
        columns.rotate_left(1);
        columns[0].pinned = Pin::Right;
        state.grid.apply_column_state(ColumnStateUpdate::ordered(columns.clone()));

        SettingsCoordinator::persist(&mut storage, &state);
        let restored = SettingsCoordinator::restore(Some(&storage), fresh_state());

        assert_eq!(restored.layout, state.layout);
        assert_eq!(restored.views.current_name(), Some("Trading"));
        assert_eq!(restored.grid.column_state(), columns);
    }

    #[test]
    fn test_restored_repeated_columns_open_a_consistent_chooser() {
        let mut storage = MockStorage::default();
        let mut columns = bond_columns();
        columns.insert(1, columns[0].clone());
        SettingsCoordinator::save_setting(&mut storage, GRID_COLUMNS_KEY, &columns);

        let restored = SettingsCoordinator::restore(Some(&storage), fresh_state());
        assert_eq!(restored.grid.column_state(), bond_columns());

        let mut chooser = colchooser::ColumnChooser::open(&restored.grid);
        assert!(chooser.columns().check_invariants().is_ok());
        chooser.deselect(&columns[2].id);
        assert!(chooser.columns().check_invariants().is_ok());
    }

    #[test]
    fn test_corrupt_entry_falls_back() {
        let mut storage = MockStorage::default();
        storage.data.insert(LAYOUT_KEY.into(), "{not json".into());
        let layout = SettingsCoordinator::load_setting_or(Some(&storage), LAYOUT_KEY, LayoutState::new());
        assert_eq!(layout, LayoutState::new());
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::default();
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "test", &123i32);
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(123));
    }
}
