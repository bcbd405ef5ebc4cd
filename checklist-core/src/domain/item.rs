//! Checklist Item Entity
//!
//! A single checklist entry. The category decides which of the two lists
//! the item shows up in; `position` is only meaningful for next-steps items.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entity::{DomainError, Entity};
use super::item_id::ItemId;

/// Prefix that files a new item under General instead of Next Steps
pub const GENERAL_PREFIX: &str = "--";

/// Category determines which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Numbered list at the top of the panel
    #[default]
    NextSteps,
    /// Unnumbered list below
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NextSteps => "next-steps",
            Category::General => "general",
        }
    }

    /// Human-readable section title
    pub fn title(&self) -> &'static str {
        match self {
            Category::NextSteps => "Next Steps",
            Category::General => "General",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next-steps" | "next_steps" | "nextsteps" | "next" => Ok(Category::NextSteps),
            "general" => Ok(Category::General),
            other => Err(DomainError::InvalidInput(format!("unknown category '{}'", other))),
        }
    }
}

/// A checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier, never changes after creation
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    /// 1-based rank among next-steps items; `None` for general items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl ChecklistItem {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            category,
            position: None,
        }
    }

    /// Move the item into `category`, dropping its rank when it becomes general
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        if category == Category::General {
            self.position = None;
        }
    }

    pub fn is_next_step(&self) -> bool {
        self.category == Category::NextSteps
    }
}

impl Entity for ChecklistItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Split raw input into its category and cleaned text.
///
/// `"-- buy milk "` becomes `(General, "buy milk")`, anything else is a next
/// step with surrounding whitespace removed.
pub fn parse_entry(raw: &str) -> (Category, &str) {
    match raw.strip_prefix(GENERAL_PREFIX) {
        Some(rest) => (Category::General, rest.trim()),
        None => (Category::NextSteps, raw.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ChecklistItem::new(ItemId::from("1"), "Test item", Category::NextSteps);
        assert_eq!(item.id().as_str(), "1");
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
        assert!(item.is_next_step());
        assert_eq!(item.position, None);
    }

    #[test]
    fn test_set_category_clears_position_for_general() {
        let mut item = ChecklistItem::new(ItemId::from("1"), "a", Category::NextSteps);
        item.position = Some(3);
        item.set_category(Category::General);
        assert_eq!(item.category, Category::General);
        assert_eq!(item.position, None);
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("-- note"), (Category::General, "note"));
        assert_eq!(parse_entry("--note  "), (Category::General, "note"));
        assert_eq!(parse_entry("  task  "), (Category::NextSteps, "task"));
        assert_eq!(parse_entry("- task"), (Category::NextSteps, "- task"));
        assert_eq!(parse_entry("--"), (Category::General, ""));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("general".parse::<Category>().unwrap(), Category::General);
        assert_eq!("Next-Steps".parse::<Category>().unwrap(), Category::NextSteps);
        assert!("urgent".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialized_layout() {
        let mut item = ChecklistItem::new(ItemId::from("42"), "a", Category::NextSteps);
        item.position = Some(1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "text": "a",
                "completed": false,
                "category": "next-steps",
                "position": 1
            })
        );

        let general = ChecklistItem::new(ItemId::from("43"), "b", Category::General);
        let json = serde_json::to_value(&general).unwrap();
        assert!(json.get("position").is_none());
        assert_eq!(json["category"], "general");
    }
}
