//! Simple Checklist Core
//!
//! Layered architecture:
//! - domain: Checklist items, categories, ids and errors
//! - store: The ordered two-category list and its mutations
//! - repository: Snapshot storage abstractions and implementations
//! - panel: Store owner that keeps storage in step with every change

pub mod domain;
pub mod repository;
mod panel;
mod store;

pub use domain::{Category, ChecklistItem, DomainError, DomainResult, ItemId, GENERAL_PREFIX};
pub use panel::ChecklistPanel;
pub use repository::{ChecklistRepository, JsonFileRepository, MemoryRepository, PersistedState};
pub use store::{ChecklistStore, Sections};
