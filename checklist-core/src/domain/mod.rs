//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization and chrono for id clocks).

mod entity;
mod item;
mod item_id;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{parse_entry, Category, ChecklistItem, GENERAL_PREFIX};
pub use item_id::{IdGenerator, ItemId};
