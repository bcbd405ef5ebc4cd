//! In-Memory Repository
//!
//! Keeps the last snapshot in memory. Used for ephemeral sessions and tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::ChecklistRepository;
use crate::domain::{ChecklistItem, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    items: Arc<Mutex<Vec<ChecklistItem>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already stored list
    pub fn with_items(items: Vec<ChecklistItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            saves: Arc::default(),
        }
    }

    /// Current stored snapshot
    pub async fn snapshot(&self) -> Vec<ChecklistItem> {
        self.items.lock().await.clone()
    }

    /// How many times `save` has been called
    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }
}

#[async_trait]
impl ChecklistRepository for MemoryRepository {
    async fn load(&self) -> DomainResult<Vec<ChecklistItem>> {
        Ok(self.items.lock().await.clone())
    }

    async fn save(&self, items: &[ChecklistItem]) -> DomainResult<()> {
        *self.items.lock().await = items.to_vec();
        *self.saves.lock().await += 1;
        Ok(())
    }
}
