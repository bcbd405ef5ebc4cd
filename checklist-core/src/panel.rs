//! Checklist Panel
//!
//! Owns a store for one open/teardown lifetime and keeps storage in step with
//! it. Mutations stay synchronous; each effective change queues a snapshot
//! for a background writer that saves them in order, skipping straight to the
//! newest one when it falls behind.

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::domain::{Category, ChecklistItem, DomainError, DomainResult, ItemId};
use crate::repository::{ChecklistRepository, PersistedState};
use crate::store::ChecklistStore;

pub struct ChecklistPanel {
    store: ChecklistStore,
    saver: UnboundedSender<Vec<ChecklistItem>>,
    worker: JoinHandle<Option<DomainError>>,
}

impl ChecklistPanel {
    /// Load the stored list and start the background writer.
    ///
    /// A load failure is logged and the panel starts out empty.
    /// Must be called from within a tokio runtime.
    pub async fn open(repo: Arc<dyn ChecklistRepository>) -> Self {
        let items = match repo.load().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to load checklist data: {}", e);
                Vec::new()
            }
        };
        log::info!("Checklist opened with {} items", items.len());

        let (saver, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(persist_worker(repo, rx));

        let mut panel = Self {
            store: ChecklistStore::from_items(items),
            saver,
            worker,
        };
        // write back ids repaired while loading
        panel.persist_if_dirty();
        panel
    }

    pub fn store(&self) -> &ChecklistStore {
        &self.store
    }

    pub fn add(&mut self, raw_text: &str) -> Option<ChecklistItem> {
        let added = self.store.add(raw_text);
        self.persist_if_dirty();
        added
    }

    pub fn toggle(&mut self, id: &ItemId) -> bool {
        let changed = self.store.toggle(id);
        self.persist_if_dirty();
        changed
    }

    pub fn edit(&mut self, id: &ItemId, new_text: &str) -> bool {
        let changed = self.store.edit(id, new_text);
        self.persist_if_dirty();
        changed
    }

    pub fn delete(&mut self, id: &ItemId) -> bool {
        let changed = self.store.delete(id);
        self.persist_if_dirty();
        changed
    }

    pub fn move_to_target(&mut self, dragged: &ItemId, target: &ItemId, insert_after: bool) -> bool {
        let changed = self.store.move_to_target(dragged, target, insert_after);
        self.persist_if_dirty();
        changed
    }

    pub fn move_to_category_end(&mut self, dragged: &ItemId, category: Category) -> bool {
        let changed = self.store.move_to_category_end(dragged, category);
        self.persist_if_dirty();
        changed
    }

    /// Snapshot handed to the host when it saves its layout
    pub fn view_state(&self) -> PersistedState {
        PersistedState {
            items: self.store.items().to_vec(),
        }
    }

    /// Adopt items from a saved layout.
    ///
    /// Only applies when the state has items and the panel has none, so data
    /// loaded from storage is never overwritten.
    pub fn restore_view_state(&mut self, state: PersistedState) -> bool {
        if state.items.is_empty() || !self.store.is_empty() {
            return false;
        }
        self.store.replace_items(state.items);
        self.persist_if_dirty();
        true
    }

    /// Final save (when there is anything to save) and wait for pending writes.
    ///
    /// Returns the last save error, if any save failed during the panel's life.
    pub async fn teardown(self) -> DomainResult<()> {
        let Self { store, saver, worker } = self;
        if !store.is_empty() {
            queue_snapshot(&saver, &store);
        }
        drop(saver);

        match worker.await {
            Ok(None) => Ok(()),
            Ok(Some(e)) => Err(e),
            Err(e) => Err(DomainError::Internal(format!("persistence worker failed: {}", e))),
        }
    }

    fn persist_if_dirty(&mut self) {
        if self.store.take_dirty() {
            queue_snapshot(&self.saver, &self.store);
        }
    }
}

fn queue_snapshot(saver: &UnboundedSender<Vec<ChecklistItem>>, store: &ChecklistStore) {
    if saver.send(store.items().to_vec()).is_err() {
        log::warn!("Persistence worker is gone, change kept in memory only");
    }
}

async fn persist_worker(
    repo: Arc<dyn ChecklistRepository>,
    mut rx: UnboundedReceiver<Vec<ChecklistItem>>,
) -> Option<DomainError> {
    let mut last_error = None;
    while let Some(mut snapshot) = rx.recv().await {
        while let Ok(newer) = rx.try_recv() {
            snapshot = newer;
        }
        if let Err(e) = repo.save(&snapshot).await {
            log::error!("Failed to save checklist data: {}", e);
            last_error = Some(e);
        }
    }
    last_error
}
