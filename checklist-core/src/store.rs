//! Checklist Store
//!
//! One ordered sequence of items is the source of truth for both lists; the
//! category is only a filter over it. Every mutation returns whether it
//! changed anything, and misses (unknown id, empty text) are silent no-ops.

use std::collections::HashSet;

use crate::domain::{parse_entry, Category, ChecklistItem, Entity, IdGenerator, ItemId};

/// The two lists as the panel draws them
#[derive(Debug, Default, PartialEq)]
pub struct Sections<'a> {
    /// Sorted by position
    pub next_steps: Vec<&'a ChecklistItem>,
    /// In sequence order
    pub general: Vec<&'a ChecklistItem>,
}

#[derive(Debug, Default)]
pub struct ChecklistStore {
    items: Vec<ChecklistItem>,
    ids: IdGenerator,
    dirty: bool,
}

impl ChecklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted items.
    ///
    /// Duplicate ids (possible in lists written with timestamp ids) get a
    /// fresh id each; the store is left dirty when that happens so the
    /// repaired list is written back.
    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        let mut store = Self {
            ids: IdGenerator::seeded(items.iter().map(|i| i.id())),
            items,
            dirty: false,
        };
        store.repair_duplicate_ids();
        store.recompute_positions();
        store
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Partition the sequence into the two displayed lists
    pub fn sections(&self) -> Sections<'_> {
        let mut sections = Sections::default();
        for item in &self.items {
            match item.category {
                Category::NextSteps => sections.next_steps.push(item),
                Category::General => sections.general.push(item),
            }
        }
        sections.next_steps.sort_by_key(|i| i.position);
        sections
    }

    /// Append a new item. Text starting with `--` goes to General.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn add(&mut self, raw_text: &str) -> Option<ChecklistItem> {
        let (category, text) = parse_entry(raw_text);
        if text.is_empty() {
            return None;
        }

        let item = ChecklistItem::new(self.ids.next_id(), text, category);
        self.items.push(item);
        self.recompute_positions();
        self.dirty = true;
        self.items.last().cloned()
    }

    /// Flip the completed flag
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|i| i.id() == id) {
            Some(item) => {
                item.completed = !item.completed;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Replace the text; empty (after trimming) text is rejected
    pub fn edit(&mut self, id: &ItemId, new_text: &str) -> bool {
        let text = new_text.trim();
        if text.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|i| i.id() == id) {
            Some(item) if item.text != text => {
                item.text = text.to_string();
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub fn delete(&mut self, id: &ItemId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.items.remove(index);
        self.recompute_positions();
        self.dirty = true;
        true
    }

    /// Drop `dragged` onto the row of `target`.
    ///
    /// The dragged item takes the target's category, then lands directly
    /// before the target, or directly after it when `insert_after` is set.
    pub fn move_to_target(&mut self, dragged: &ItemId, target: &ItemId, insert_after: bool) -> bool {
        let (Some(from), Some(target_index)) = (self.index_of(dragged), self.index_of(target)) else {
            return false;
        };

        let target_category = self.items[target_index].category;
        let recategorized = self.items[from].category != target_category;
        if recategorized {
            self.items[from].set_category(target_category);
        }

        let mut moved = false;
        if from != target_index {
            let item = self.items.remove(from);
            // target is still present, only the dragged item was removed
            let target_index = self.index_of(target).unwrap_or(self.items.len());
            let to = if insert_after { target_index + 1 } else { target_index };
            moved = to != from;
            self.items.insert(to, item);
        }

        if !(recategorized || moved) {
            return false;
        }
        self.recompute_positions();
        self.dirty = true;
        true
    }

    /// Drop `dragged` onto a list rather than a row: it becomes the last
    /// item of `category` (or the last item overall if that list is empty).
    pub fn move_to_category_end(&mut self, dragged: &ItemId, category: Category) -> bool {
        let Some(from) = self.index_of(dragged) else {
            return false;
        };

        let mut item = self.items.remove(from);
        let recategorized = item.category != category;
        if recategorized {
            item.set_category(category);
        }

        let to = self
            .items
            .iter()
            .rposition(|i| i.category == category)
            .map(|last| last + 1)
            .unwrap_or(self.items.len());
        self.items.insert(to, item);

        if !(recategorized || to != from) {
            return false;
        }
        self.recompute_positions();
        self.dirty = true;
        true
    }

    /// Replace the whole sequence, e.g. when restoring a saved view
    pub fn replace_items(&mut self, items: Vec<ChecklistItem>) {
        *self = Self::from_items(items);
        self.dirty = true;
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    /// Number next-steps items 1..n in sequence order; general items carry none
    fn recompute_positions(&mut self) {
        let mut next = 1;
        for item in &mut self.items {
            match item.category {
                Category::NextSteps => {
                    item.position = Some(next);
                    next += 1;
                }
                Category::General => item.position = None,
            }
        }
    }

    fn repair_duplicate_ids(&mut self) {
        let mut seen = HashSet::new();
        for i in 0..self.items.len() {
            if !seen.insert(self.items[i].id.clone()) {
                let fresh = self.ids.next_id();
                log::warn!("Duplicate item id {}, reassigned to {}", self.items[i].id, fresh);
                self.items[i].id = fresh.clone();
                seen.insert(fresh);
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, text: &str, category: Category) -> ChecklistItem {
        ChecklistItem::new(ItemId::from(id), text, category)
    }

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    fn order(store: &ChecklistStore) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    fn assert_positions_consistent(store: &ChecklistStore) {
        let mut expected = 1;
        for item in store.items() {
            match item.category {
                Category::NextSteps => {
                    assert_eq!(item.position, Some(expected), "item {}", item.id);
                    expected += 1;
                }
                Category::General => assert_eq!(item.position, None, "item {}", item.id),
            }
        }
    }

    /// [A(next), B(next), C(general)]
    fn abc() -> ChecklistStore {
        ChecklistStore::from_items(vec![
            item("1", "A", Category::NextSteps),
            item("2", "B", Category::NextSteps),
            item("3", "C", Category::General),
        ])
    }

    #[test]
    fn test_add_next_step() {
        let mut store = ChecklistStore::new();
        let added = store.add("  write tests  ").unwrap();
        assert_eq!(added.text, "write tests");
        assert_eq!(added.category, Category::NextSteps);
        assert_eq!(added.position, Some(1));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_add_general_keeps_next_step_positions() {
        let mut store = ChecklistStore::from_items(vec![
            item("1", "a", Category::NextSteps),
            item("2", "b", Category::NextSteps),
        ]);
        let added = store.add("-- note").unwrap();

        assert_eq!(added.text, "note");
        assert_eq!(added.category, Category::General);
        assert_eq!(added.position, None);
        assert_eq!(store.items().last().unwrap().id, added.id);
        assert_eq!(store.get(&id("1")).unwrap().position, Some(1));
        assert_eq!(store.get(&id("2")).unwrap().position, Some(2));
    }

    #[test]
    fn test_add_appends_after_all_categories() {
        let mut store = abc();
        let added = store.add("D").unwrap();
        assert_eq!(store.items().last().unwrap().id, added.id);
        assert_eq!(added.position, Some(3));
        assert_positions_consistent(&store);
    }

    #[test]
    fn test_add_rejects_empty_text() {
        let mut store = ChecklistStore::new();
        assert!(store.add("   ").is_none());
        assert!(store.add("--   ").is_none());
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut store = ChecklistStore::new();
        for n in 0..50 {
            store.add(&format!("item {}", n));
        }
        let unique: HashSet<_> = store.items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = abc();
        assert!(store.toggle(&id("2")));
        assert!(store.get(&id("2")).unwrap().completed);
        assert!(store.toggle(&id("2")));
        assert!(!store.get(&id("2")).unwrap().completed);
        assert_eq!(order(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = abc();
        assert!(!store.toggle(&id("99")));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_edit_trims_and_keeps_category() {
        let mut store = abc();
        assert!(store.edit(&id("3"), "  renamed "));
        let edited = store.get(&id("3")).unwrap();
        assert_eq!(edited.text, "renamed");
        assert_eq!(edited.category, Category::General);
    }

    #[test]
    fn test_edit_rejects_empty_and_unknown() {
        let mut store = abc();
        assert!(!store.edit(&id("1"), "   "));
        assert_eq!(store.get(&id("1")).unwrap().text, "A");

        let mut empty = ChecklistStore::new();
        assert!(!empty.edit(&id("1"), "x"));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_delete_renumbers() {
        let mut store = abc();
        assert!(store.delete(&id("1")));
        assert_eq!(store.get(&id("2")).unwrap().position, Some(1));
        assert_positions_consistent(&store);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut store = abc();
        assert!(store.delete(&id("2")));
        let len = store.len();
        assert!(!store.delete(&id("2")));
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_move_to_target_across_categories() {
        let mut store = abc();
        assert!(store.move_to_target(&id("1"), &id("3"), true));

        assert_eq!(order(&store), vec!["2", "3", "1"]);
        let a = store.get(&id("1")).unwrap();
        assert_eq!(a.category, Category::General);
        assert_eq!(a.position, None);
        assert_eq!(store.get(&id("2")).unwrap().position, Some(1));
    }

    #[test]
    fn test_move_before_next_neighbour_is_noop() {
        let mut store = abc();
        store.take_dirty();
        assert!(!store.move_to_target(&id("1"), &id("2"), false));
        assert_eq!(order(&store), vec!["1", "2", "3"]);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_move_after_previous_neighbour_is_noop() {
        let mut store = abc();
        assert!(!store.move_to_target(&id("2"), &id("1"), true));
        assert_eq!(order(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_move_within_next_steps_renumbers() {
        let mut store = abc();
        assert!(store.move_to_target(&id("2"), &id("1"), false));
        assert_eq!(order(&store), vec!["2", "1", "3"]);
        assert_eq!(store.get(&id("2")).unwrap().position, Some(1));
        assert_eq!(store.get(&id("1")).unwrap().position, Some(2));
    }

    #[test]
    fn test_move_onto_self_keeps_order() {
        let mut store = abc();
        assert!(!store.move_to_target(&id("1"), &id("1"), true));
        assert_eq!(order(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_move_with_unknown_ids_is_noop() {
        let mut store = abc();
        assert!(!store.move_to_target(&id("1"), &id("99"), true));
        assert!(!store.move_to_target(&id("99"), &id("1"), true));
        assert_eq!(order(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_move_general_before_next_step_gets_position() {
        let mut store = abc();
        assert!(store.move_to_target(&id("3"), &id("1"), false));
        assert_eq!(order(&store), vec!["3", "1", "2"]);
        assert_eq!(store.get(&id("3")).unwrap().position, Some(1));
        assert_eq!(store.get(&id("2")).unwrap().position, Some(3));
    }

    #[test]
    fn test_move_to_category_end() {
        let mut store = ChecklistStore::from_items(vec![
            item("1", "A", Category::NextSteps),
            item("2", "G1", Category::General),
            item("3", "B", Category::NextSteps),
            item("4", "G2", Category::General),
        ]);
        assert!(store.move_to_category_end(&id("4"), Category::NextSteps));
        assert_eq!(order(&store), vec!["1", "2", "3", "4"]);
        assert_eq!(store.get(&id("4")).unwrap().position, Some(3));

        // G1 is now the only general item, so A lands right after it
        assert!(store.move_to_category_end(&id("1"), Category::General));
        assert_eq!(order(&store), vec!["2", "1", "3", "4"]);
        assert_eq!(store.get(&id("1")).unwrap().position, None);
        assert_eq!(store.get(&id("3")).unwrap().position, Some(1));
        assert_positions_consistent(&store);
    }

    #[test]
    fn test_move_to_empty_category_goes_last() {
        let mut store = ChecklistStore::from_items(vec![
            item("1", "A", Category::NextSteps),
            item("2", "B", Category::NextSteps),
        ]);
        assert!(store.move_to_category_end(&id("1"), Category::General));
        assert_eq!(order(&store), vec!["2", "1"]);
        assert_eq!(store.get(&id("1")).unwrap().category, Category::General);
    }

    #[test]
    fn test_move_last_item_to_own_category_end_is_noop() {
        let mut store = abc();
        assert!(!store.move_to_category_end(&id("3"), Category::General));
        assert!(!store.move_to_category_end(&id("99"), Category::General));
        assert_eq!(order(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_positions_stay_consistent_over_mixed_operations() {
        let mut store = ChecklistStore::new();
        let a = store.add("a").unwrap().id;
        let b = store.add("-- b").unwrap().id;
        let c = store.add("c").unwrap().id;
        let d = store.add("d").unwrap().id;
        assert_positions_consistent(&store);

        store.move_to_target(&d, &a, false);
        assert_positions_consistent(&store);
        store.move_to_target(&c, &b, true);
        assert_positions_consistent(&store);
        store.move_to_category_end(&b, Category::NextSteps);
        assert_positions_consistent(&store);
        store.delete(&a);
        assert_positions_consistent(&store);

        let positions: Vec<_> = store.sections().next_steps.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_sections_partition() {
        let store = abc();
        let sections = store.sections();
        let next: Vec<_> = sections.next_steps.iter().map(|i| i.text.as_str()).collect();
        let general: Vec<_> = sections.general.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(next, vec!["A", "B"]);
        assert_eq!(general, vec!["C"]);
    }

    #[test]
    fn test_from_items_repairs_positions_and_duplicates() {
        let mut stale = item("5", "stale", Category::General);
        stale.position = Some(9);
        let store = ChecklistStore::from_items(vec![
            item("5", "first", Category::NextSteps),
            stale,
        ]);
        assert!(store.is_dirty());
        assert_eq!(store.items()[0].id.as_str(), "5");
        assert_ne!(store.items()[1].id.as_str(), "5");
        assert_eq!(store.items()[1].position, None);
        assert_positions_consistent(&store);
    }
}
