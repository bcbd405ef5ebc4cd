//! Commands for Item Changes
//!
//! Turn user intents into panel calls. Unknown ids and empty text are not
//! errors; the handlers just report that nothing changed.

use checklist_core::{Category, ChecklistItem, ChecklistPanel, ItemId, GENERAL_PREFIX};
use checklist_dragdrop::{DropAction, DropTarget, DropZone};

/// Add an item from the words given on the command line
pub fn add_item(panel: &mut ChecklistPanel, words: &[String], general: bool) -> Option<ChecklistItem> {
    let text = words.join(" ");
    let raw = if general && !text.starts_with(GENERAL_PREFIX) {
        format!("{}{}", GENERAL_PREFIX, text)
    } else {
        text
    };
    let added = panel.add(&raw);
    match &added {
        Some(item) => log::info!("Added item {} to {}", item.id, item.category),
        None => log::debug!("Ignored empty item"),
    }
    added
}

pub fn toggle_item(panel: &mut ChecklistPanel, id: &str) -> bool {
    panel.toggle(&ItemId::from(id))
}

pub fn edit_item(panel: &mut ChecklistPanel, id: &str, words: &[String]) -> bool {
    panel.edit(&ItemId::from(id), &words.join(" "))
}

pub fn delete_item(panel: &mut ChecklistPanel, id: &str) -> bool {
    let deleted = panel.delete(&ItemId::from(id));
    if deleted {
        log::info!("Deleted item {}", id);
    }
    deleted
}

/// Where a moved item should land
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Before(String),
    After(String),
    EndOf(Category),
}

/// Move an item the same way a drop on the panel would
pub fn move_item(panel: &mut ChecklistPanel, id: &str, destination: Destination) -> bool {
    let target = match destination {
        Destination::Before(target) => DropTarget::Item {
            id: ItemId::from(target),
            zone: DropZone::Above,
        },
        Destination::After(target) => DropTarget::Item {
            id: ItemId::from(target),
            zone: DropZone::Below,
        },
        Destination::EndOf(category) => DropTarget::List(category),
    };
    let action = DropAction {
        dragged: ItemId::from(id),
        target,
    };
    let moved = action.dispatch(panel);
    if moved {
        log::info!("Moved item {} ({:?})", id, action.target);
    }
    moved
}
