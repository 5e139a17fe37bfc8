//! Drag payload encoding over a single string-typed transfer channel.
//!
//! Native drag transfers only carry `(type, value)` string pairs, and during
//! drag-over only the *set of types* is readable. The origin list and column
//! id are therefore encoded into the type itself (`"<origin>/<id>"`), with the
//! id repeated as the value so the drop handler can read it back.
//!
//! Two reads exist:
//! - [`probe`] works from the type set alone (drag-over),
//! - [`read_drop`] reads the value keyed by the matched type (drop).

use std::fmt;

pub const AVAILABLE_PREFIX: &str = "available";
pub const SELECTED_PREFIX: &str = "selected";

/// List a drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOrigin {
    Available,
    Selected,
}

impl ListOrigin {
    pub fn prefix(self) -> &'static str {
        match self {
            ListOrigin::Available => AVAILABLE_PREFIX,
            ListOrigin::Selected => SELECTED_PREFIX,
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            AVAILABLE_PREFIX => Some(ListOrigin::Available),
            SELECTED_PREFIX => Some(ListOrigin::Selected),
            _ => None,
        }
    }
}

impl fmt::Display for ListOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Decoded drag subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPayload {
    pub origin: ListOrigin,
    pub column_id: String,
}

impl DragPayload {
    pub fn new(origin: ListOrigin, column_id: impl Into<String>) -> Self {
        Self {
            origin,
            column_id: column_id.into(),
        }
    }
}

/// The string channel a platform drag operation offers.
pub trait DataTransfer {
    /// Registered type strings, readable at any time during the drag.
    fn types(&self) -> Vec<String>;

    /// Value stored under `drag_type`; platforms may only answer at drop.
    fn get_data(&self, drag_type: &str) -> Option<String>;

    fn set_data(&mut self, drag_type: &str, value: &str);
}

/// In-memory transfer for front ends without a native one, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTransfer {
    entries: Vec<(String, String)>,
}

impl MemoryTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfer pre-filled with the encoding of `origin`/`column_id`.
    pub fn for_column(origin: ListOrigin, column_id: &str) -> Self {
        let mut transfer = Self::new();
        write(&mut transfer, origin, column_id);
        transfer
    }
}

impl DataTransfer for MemoryTransfer {
    fn types(&self) -> Vec<String> {
        self.entries.iter().map(|(t, _)| t.clone()).collect()
    }

    fn get_data(&self, drag_type: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(t, _)| t == drag_type)
            .map(|(_, v)| v.clone())
    }

    fn set_data(&mut self, drag_type: &str, value: &str) {
        match self.entries.iter_mut().find(|(t, _)| t == drag_type) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((drag_type.to_string(), value.to_string())),
        }
    }
}

/// Type string for a drag of `column_id` out of `origin`.
pub fn encode(origin: ListOrigin, column_id: &str) -> String {
    format!("{}/{}", origin.prefix(), column_id)
}

/// Registers the payload on a transfer at drag start.
pub fn write(transfer: &mut dyn DataTransfer, origin: ListOrigin, column_id: &str) {
    transfer.set_data(&encode(origin, column_id), column_id);
}

/// Decodes a single type string.
pub fn decode(drag_type: &str) -> Option<DragPayload> {
    let (prefix, column_id) = drag_type.split_once('/')?;
    let origin = ListOrigin::from_prefix(prefix)?;
    Some(DragPayload::new(origin, column_id))
}

/// Decodes the first recognized entry of a type set.
///
/// Usable during drag-over, before values are readable. Some platforms
/// lower-case type strings, so the id returned here may differ in case from
/// the stored id.
pub fn probe<I, S>(types: I) -> Option<DragPayload>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    types.into_iter().find_map(|t| decode(t.as_ref()))
}

/// Reads the payload at drop time, restricted to `origin`.
///
/// The id comes from the transfer value, not the type string, so it keeps
/// its original case.
pub fn read_drop(transfer: &dyn DataTransfer, origin: ListOrigin) -> Option<DragPayload> {
    transfer
        .types()
        .into_iter()
        .filter(|t| decode(t).is_some_and(|p| p.origin == origin))
        .find_map(|t| transfer.get_data(&t))
        .map(|column_id| DragPayload::new(origin, column_id))
}
