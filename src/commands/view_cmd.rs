//! Commands for the Whole View
//!
//! Export and import of the panel state.

use std::path::Path;

use checklist_core::{ChecklistPanel, PersistedState};

/// Current state as pretty JSON
pub fn export_view(panel: &ChecklistPanel) -> Result<String, String> {
    serde_json::to_string_pretty(&panel.view_state()).map_err(|e| e.to_string())
}

/// Restore a previously exported state. Returns false when the panel
/// already has items (or the file has none) and nothing was restored.
pub async fn import_view(panel: &mut ChecklistPanel, file: &Path) -> Result<bool, String> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let state: PersistedState = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {}", file.display(), e))?;

    let count = state.items.len();
    let restored = panel.restore_view_state(state);
    if restored {
        log::info!("Imported {} items from {}", count, file.display());
    } else {
        log::info!("Import from {} skipped", file.display());
    }
    Ok(restored)
}
