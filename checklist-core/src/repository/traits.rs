//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for checklist storage.
//! Implementations can use a JSON file, memory, etc.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ChecklistItem, DomainResult};

/// Whole-state record written on every save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// Snapshot storage for the checklist.
///
/// Every save overwrites the previous snapshot completely.
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Load the stored items, empty when nothing has been stored yet
    async fn load(&self) -> DomainResult<Vec<ChecklistItem>>;

    /// Replace the stored items
    async fn save(&self, items: &[ChecklistItem]) -> DomainResult<()>;
}
