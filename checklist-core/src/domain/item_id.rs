//! Item Identifiers
//!
//! Ids are opaque strings. Fresh ids are decimal millisecond timestamps, so
//! lists written by earlier versions keep working, but the generator never
//! hands out the same value twice even when several items are created within
//! one clock tick.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a checklist item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id when it is a plain decimal number
    fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

/// Monotonic, clock-based id source
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start after the largest numeric id already in use
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(ItemId::as_number)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> ItemId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Next id for a given clock reading; never repeats or goes backwards
    pub fn next_at(&mut self, now_millis: u64) -> ItemId {
        self.last = now_millis.max(self.last.saturating_add(1));
        ItemId(self.last.to_string())
    }
}
