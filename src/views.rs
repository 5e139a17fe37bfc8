//! Named views: saved grid column state plus opaque custom state.
//!
//! The chooser never reads a view directly. Selecting a view yields the
//! column state to apply and the custom (search/matcher) state to restore;
//! every other grid change is reported through [`ViewObserver`] and nothing
//! is returned to the caller.

use serde::{Deserialize, Serialize};

use crate::columns::ColumnEntry;
use crate::grid::ColumnStateUpdate;

/// A saved grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    pub columns: Vec<ColumnEntry>,
    /// Front-end state saved alongside the columns, e.g. row search text.
    #[serde(default)]
    pub custom_state: serde_json::Value,
}

impl View {
    /// Column state to hand to the grid when the view is selected.
    pub fn column_update(&self) -> ColumnStateUpdate {
        ColumnStateUpdate::ordered(self.columns.clone())
    }
}

/// Fire-and-forget notification of grid changes.
pub trait ViewObserver {
    fn view_changed(&mut self, columns: &[ColumnEntry], custom_state: &serde_json::Value);
}

/// Persistable list of views plus the one currently in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewCatalog {
    views: Vec<View>,
    current: Option<String>,
    #[serde(skip)]
    modified: bool,
}

impl ViewCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|v| v.name.as_str())
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// True if the grid changed since the current view was selected or saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn get(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Makes `name` current and returns it for the caller to apply.
    pub fn select(&mut self, name: &str) -> Option<&View> {
        let index = self.views.iter().position(|v| v.name == name)?;
        self.current = Some(name.to_string());
        self.modified = false;
        tracing::info!(view = name, "view selected");
        self.views.get(index)
    }

    /// Saves under `name`, replacing a view with the same name, and makes it current.
    pub fn save(&mut self, name: &str, columns: Vec<ColumnEntry>, custom_state: serde_json::Value) {
        let view = View {
            name: name.to_string(),
            columns,
            custom_state,
        };
        match self.views.iter_mut().find(|v| v.name == name) {
            Some(existing) => *existing = view,
            None => self.views.push(view),
        }
        self.current = Some(name.to_string());
        self.modified = false;
        tracing::info!(view = name, "view saved");
    }

    /// Removes `name`; returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.views.len();
        self.views.retain(|v| v.name != name);
        if self.current.as_deref() == Some(name) {
            self.current = None;
            self.modified = false;
        }
        before != self.views.len()
    }
}

impl ViewObserver for ViewCatalog {
    fn view_changed(&mut self, columns: &[ColumnEntry], custom_state: &serde_json::Value) {
        let modified = self
            .current
            .as_deref()
            .and_then(|name| self.get(name))
            .map(|view| view.columns != columns || &view.custom_state != custom_state);
        if let Some(modified) = modified {
            self.modified = modified;
        }
    }
}
