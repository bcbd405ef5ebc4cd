//! JSON File Repository
//!
//! Stores the checklist as a single `{ "items": [...] }` document.

use async_trait::async_trait;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{ChecklistRepository, PersistedState};
use crate::domain::{ChecklistItem, DomainError, DomainResult};

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    items: &'a [ChecklistItem],
}

/// Repository backed by one JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ChecklistRepository for JsonFileRepository {
    async fn load(&self) -> DomainResult<Vec<ChecklistItem>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        // `null` is what an untouched data file holds
        match serde_json::from_str::<Option<PersistedState>>(&raw) {
            Ok(state) => Ok(state.map(|s| s.items).unwrap_or_default()),
            Err(e) => {
                // Keep the unreadable file around; the next save replaces it
                let backup = self.sibling(".corrupt");
                if let Err(copy_err) = tokio::fs::copy(&self.path, &backup).await {
                    log::warn!("Could not back up {}: {}", self.path.display(), copy_err);
                }
                Err(DomainError::Corrupt(format!("{}: {}", self.path.display(), e)))
            }
        }
    }

    async fn save(&self, items: &[ChecklistItem]) -> DomainResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(&PersistedStateRef { items })
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        // Write next to the target and rename so a crash never leaves half a file
        let tmp = self.sibling(".tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        log::debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}
