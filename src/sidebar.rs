//! The workout list next to the form.

use crate::types::WorkoutId;

/// Holds rendered workout entries in display order.
pub trait Sidebar {
    /// Insert `html` directly after the form, ahead of older entries.
    fn insert_after_form(&mut self, html: String);
    fn clear(&mut self);
}

/// Sidebar that keeps the rendered fragments, top of the list first.
#[derive(Debug, Default, Clone)]
pub struct HtmlSidebar {
    entries: Vec<String>,
}

impl HtmlSidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn to_html(&self) -> String {
        self.entries.join("\n")
    }
}

impl Sidebar for HtmlSidebar {
    fn insert_after_form(&mut self, html: String) {
        self.entries.insert(0, html);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One element on the path from a click target up to the list container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub classes: Vec<String>,
    pub data_id: Option<String>,
}

impl Node {
    pub fn new(classes: &str) -> Self {
        Self {
            classes: classes.split_whitespace().map(str::to_string).collect(),
            data_id: None,
        }
    }

    #[must_use]
    pub fn with_data_id(mut self, id: impl ToString) -> Self {
        self.data_id = Some(id.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Where a click in the sidebar landed: the target first, then its ancestors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    path: Vec<Node>,
}

impl ClickTarget {
    pub const fn new(path: Vec<Node>) -> Self {
        Self { path }
    }

    /// Nearest node (the target itself included) carrying `class`.
    pub fn closest(&self, class: &str) -> Option<&Node> {
        self.path.iter().find(|n| n.has_class(class))
    }

    /// Id of the enclosing workout entry, if the click was inside one.
    pub fn workout_id(&self) -> Option<WorkoutId> {
        self.closest("workout")?.data_id.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_sits_right_after_the_form() {
        let mut sidebar = HtmlSidebar::new();
        sidebar.insert_after_form("<li>1</li>".into());
        sidebar.insert_after_form("<li>2</li>".into());
        assert_eq!(sidebar.entries(), ["<li>2</li>", "<li>1</li>"]);
    }

    #[test]
    fn closest_walks_up_to_the_entry() {
        let in_value = ClickTarget::new(vec![
            Node::new("workout__value"),
            Node::new("workout__details"),
            Node::new("workout workout--cycling").with_data_id(4),
            Node::new("workouts"),
        ]);
        assert_eq!(in_value.workout_id(), Some(4));
        assert_eq!(
            ClickTarget::new(vec![Node::new("workouts")]).workout_id(),
            None
        );

        // the entry itself is a valid target
        let on_entry = ClickTarget::new(vec![Node::new("workout").with_data_id(9)]);
        assert_eq!(on_entry.workout_id(), Some(9));
    }

    #[test]
    fn class_match_is_exact() {
        let target = ClickTarget::new(vec![Node::new("workout__title"), Node::new("workouts")]);
        assert!(target.closest("workout").is_none());
    }
}
