//! Demo grid state: column configuration, rows and row search.
//!
//! This is the grid-widget collaborator of the chooser. It only changes
//! through [`ColumnGrid::apply_column_state`] and the row search box.

use colchooser::{merge_column_state, ColumnEntry, ColumnGrid, ColumnStateUpdate, Pin};

use crate::io::Row;

/// Rows plus the authoritative column state.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    columns: Vec<ColumnEntry>,
    rows: Vec<Row>,
    search: String,
}

impl GridState {
    pub fn new(columns: Vec<ColumnEntry>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            search: String::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Visible columns in render order: left-pinned, unpinned, right-pinned.
    pub fn display_columns(&self) -> Vec<&ColumnEntry> {
        let visible = || self.columns.iter().filter(|c| !c.hidden);
        visible()
            .filter(|c| c.pinned == Pin::Left)
            .chain(visible().filter(|c| c.pinned == Pin::None))
            .chain(visible().filter(|c| c.pinned == Pin::Right))
            .collect()
    }

    /// Rows with a visible cell containing the search text, case-insensitively.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        let columns = self.display_columns();
        self.rows
            .iter()
            .filter(|row| {
                columns.iter().any(|c| {
                    row.get(&c.id)
                        .is_some_and(|cell| cell.to_lowercase().contains(&needle))
                })
            })
            .collect()
    }
}

impl ColumnGrid for GridState {
    fn column_state(&self) -> Vec<ColumnEntry> {
        self.columns.clone()
    }

    fn apply_column_state(&mut self, update: ColumnStateUpdate) {
        self.columns = merge_column_state(&self.columns, &update);
        tracing::debug!(apply_order = update.apply_order, "grid column state applied");
    }
}
