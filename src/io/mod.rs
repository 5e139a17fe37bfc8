//! Data sources for the demo grid.

pub mod sample_data;

pub use sample_data::{bond_columns, generate_bonds, Row, DEFAULT_ROW_COUNT, DEFAULT_SEED};
