//! Error types for the column chooser core.
//!
//! None of the interactive operations fail: unknown ids are no-ops and
//! foreign drag payloads decode to `None`. The only errors are rejected
//! configuration and the invariant report produced by
//! [`ColumnSet::check_invariants`](crate::ColumnSet::check_invariants).

use thiserror::Error;

/// Rejected panel configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum width must be a positive finite number, got {0}")]
    MinWidth(f32),
    #[error("minimum height must be a positive finite number, got {0}")]
    MinHeight(f32),
    #[error("hit threshold must be a positive finite number, got {0}")]
    HitThreshold(f32),
}

/// A broken relationship between the `available` and `selected` sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("column `{0}` appears more than once in the selected list")]
    DuplicateSelected(String),
    #[error("column `{0}` appears more than once in the available list")]
    DuplicateAvailable(String),
    #[error("selected column `{0}` is not in the available list")]
    OrphanSelected(String),
    #[error("selected column `{0}` is hidden in the available list")]
    HiddenSelected(String),
    #[error("visible column `{0}` is missing from the selected list")]
    VisibleNotSelected(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
