//! Text Rendering
//!
//! Draws the two lists the way the side panel shows them: next steps
//! numbered by position, general items in list order.

use std::fmt::Write;

use checklist_core::{Category, ChecklistItem, ChecklistStore};

pub fn render(store: &ChecklistStore) -> String {
    let sections = store.sections();
    let mut out = String::new();
    render_section(&mut out, Category::NextSteps, &sections.next_steps);
    out.push('\n');
    render_section(&mut out, Category::General, &sections.general);
    out
}

fn render_section(out: &mut String, category: Category, items: &[&ChecklistItem]) {
    let _ = writeln!(out, "{}", category.title());
    if items.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for item in items {
        let check = if item.completed { "x" } else { " " };
        let marker = match item.position {
            Some(position) => format!("{}.", position),
            None => "-".to_string(),
        };
        let _ = writeln!(out, "  {} [{}] {}  (#{})", marker, check, item.text, item.id);
    }
}
