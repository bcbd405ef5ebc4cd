//! Checklist DragDrop Utilities
//!
//! Host-independent drag-and-drop for the checklist, fed with plain pointer
//! events. Uses movement threshold to distinguish click from drag, and
//! resolves a finished drag into one of the two checklist move operations.

use checklist_core::{Category, ChecklistPanel, ChecklistStore, ItemId};

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Which half of the hovered row the pointer is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZone {
    Above,
    Below,
}

impl DropZone {
    /// Below when the pointer is past the row's vertical midpoint
    pub fn from_pointer(pointer_y: f64, row_top: f64, row_height: f64) -> Self {
        if pointer_y > row_top + row_height / 2.0 {
            DropZone::Below
        } else {
            DropZone::Above
        }
    }
}

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on another item's row
    Item { id: ItemId, zone: DropZone },
    /// Drop on a list outside of any row
    List(Category),
}

/// Computed drop action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropAction {
    pub dragged: ItemId,
    pub target: DropTarget,
}

impl DropAction {
    /// Apply the drop; returns whether the checklist changed
    pub fn dispatch<H: DropHandler + ?Sized>(&self, handler: &mut H) -> bool {
        match &self.target {
            DropTarget::Item { id, zone } => {
                handler.move_to_target(&self.dragged, id, *zone == DropZone::Below)
            }
            DropTarget::List(category) => handler.move_to_category_end(&self.dragged, *category),
        }
    }
}

/// Anything that can carry out a resolved drop
pub trait DropHandler {
    fn move_to_target(&mut self, dragged: &ItemId, target: &ItemId, insert_after: bool) -> bool;
    fn move_to_category_end(&mut self, dragged: &ItemId, category: Category) -> bool;
}

impl DropHandler for ChecklistStore {
    fn move_to_target(&mut self, dragged: &ItemId, target: &ItemId, insert_after: bool) -> bool {
        ChecklistStore::move_to_target(self, dragged, target, insert_after)
    }

    fn move_to_category_end(&mut self, dragged: &ItemId, category: Category) -> bool {
        ChecklistStore::move_to_category_end(self, dragged, category)
    }
}

impl DropHandler for ChecklistPanel {
    fn move_to_target(&mut self, dragged: &ItemId, target: &ItemId, insert_after: bool) -> bool {
        ChecklistPanel::move_to_target(self, dragged, target, insert_after)
    }

    fn move_to_category_end(&mut self, dragged: &ItemId, category: Category) -> bool {
        ChecklistPanel::move_to_category_end(self, dragged, category)
    }
}

/// DnD state for one panel
#[derive(Debug, Default)]
pub struct DragSession {
    dragging_id: Option<ItemId>,
    drop_target: Option<DropTarget>,
    /// Pending item id (pressed but not yet dragging) with start position
    pending: Option<(ItemId, i32, i32)>,
    drag_just_ended: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging_id(&self) -> Option<&ItemId> {
        self.dragging_id.as_ref()
    }

    pub fn drop_target(&self) -> Option<&DropTarget> {
        self.drop_target.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_id.is_some()
    }

    /// Pointer pressed on an item's drag handle. Only the primary button counts.
    pub fn press(&mut self, item_id: ItemId, button: i16, x: i32, y: i32) {
        if button == 0 {
            self.pending = Some((item_id, x, y));
        }
    }

    /// Pointer moved anywhere; starts dragging once past the threshold.
    ///
    /// Returns true on the move that started the drag.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        if self.dragging_id.is_some() {
            return false;
        }
        let Some((id, start_x, start_y)) = &self.pending else {
            return false;
        };
        let dx = (x - start_x).abs();
        let dy = (y - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            log::debug!("Drag started for item {}", id);
            self.dragging_id = Some(id.clone());
            return true;
        }
        false
    }

    /// Pointer over an item's row
    pub fn hover_item(&mut self, item_id: ItemId, pointer_y: f64, row_top: f64, row_height: f64) {
        match &self.dragging_id {
            // Don't allow dropping on self
            Some(dragging) if *dragging != item_id => {
                let zone = DropZone::from_pointer(pointer_y, row_top, row_height);
                self.drop_target = Some(DropTarget::Item { id: item_id, zone });
            }
            _ => {}
        }
    }

    /// Pointer over a list but not over any of its rows
    pub fn hover_list(&mut self, category: Category) {
        if self.dragging_id.is_some() {
            self.drop_target = Some(DropTarget::List(category));
        }
    }

    /// Pointer left the current target
    pub fn leave(&mut self) {
        if self.dragging_id.is_some() {
            self.drop_target = None;
        }
    }

    /// Pointer released. Yields the drop to apply when a drag was in progress
    /// over a target; a plain click yields nothing.
    pub fn release(&mut self) -> Option<DropAction> {
        self.pending = None;
        let dragged = self.dragging_id.take();
        let target = self.drop_target.take();
        self.drag_just_ended = dragged.is_some();

        match (dragged, target) {
            (Some(dragged), Some(target)) => Some(DropAction { dragged, target }),
            _ => None,
        }
    }

    /// Abort without dropping (e.g. Escape pressed)
    pub fn cancel(&mut self) {
        self.pending = None;
        self.drop_target = None;
        self.drag_just_ended = self.dragging_id.take().is_some();
    }

    /// True once right after a drag ended, so the host can swallow the click
    /// that the release would otherwise produce.
    pub fn take_click_suppressed(&mut self) -> bool {
        std::mem::take(&mut self.drag_just_ended)
    }
}
