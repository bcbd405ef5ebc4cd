//! Repository Layer
//!
//! Storage abstraction and implementations.

mod traits;
mod json_repo;
mod memory_repo;


pub use traits::{ChecklistRepository, PersistedState};
pub use json_repo::JsonFileRepository;
pub use memory_repo::MemoryRepository;
