//! Node types for the view tree.
//!
//! Widgets describe what they look like as a tree of [`Node`]s. The tree is
//! plain data: it can be inspected in tests, printed by
//! [`render_lines`](crate::render::render_lines), or translated into any
//! other rendering backend.

mod layout;

pub use layout::{Border, Layout, Size};

use crate::style::Style;

/// A node in the view tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Checkbox
    Checkbox {
        /// Element ID
        id: String,
        /// Whether the box is ticked
        checked: bool,
        /// Accessible label (not drawn)
        label: String,
        style: Style,
    },

    /// Clickable button
    Button {
        /// Element ID
        id: String,
        /// Button label
        label: String,
        style: Style,
    },

    /// Single-line text input
    Input {
        /// Element ID
        id: String,
        /// Value shown in the box
        value: String,
        /// Shown when `value` is empty
        placeholder: String,
        /// Draw the value as bullets
        masked: bool,
        disabled: bool,
        invalid: bool,
        style: Style,
        layout: Layout,
    },

    /// Busy indicator
    Spinner { style: Style },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::new(),
        }
    }

    /// Create a column node with style and layout
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::new(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Create a checkbox node
    pub fn checkbox(id: impl Into<String>, checked: bool, label: impl Into<String>) -> Self {
        Self::Checkbox {
            id: id.into(),
            checked,
            label: label.into(),
            style: Style::new(),
        }
    }

    /// Create a button node
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Button {
            id: id.into(),
            label: label.into(),
            style: Style::new(),
        }
    }

    /// Create a spinner node
    pub fn spinner() -> Self {
        Self::Spinner {
            style: Style::new(),
        }
    }

    /// Replace the style of this node. No-op on [`Node::Empty`].
    pub fn with_style(mut self, new_style: Style) -> Self {
        match &mut self {
            Node::Empty => {}
            Node::Text { style, .. }
            | Node::Column { style, .. }
            | Node::Row { style, .. }
            | Node::Checkbox { style, .. }
            | Node::Button { style, .. }
            | Node::Input { style, .. }
            | Node::Spinner { style } => *style = new_style,
        }
        self
    }

    /// Replace the layout of a container or input. No-op on other nodes.
    pub fn with_layout(mut self, new_layout: Layout) -> Self {
        match &mut self {
            Node::Column { layout, .. } | Node::Row { layout, .. } | Node::Input { layout, .. } => {
                *layout = new_layout
            }
            _ => {}
        }
        self
    }

    /// Element ID, for nodes that carry one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Checkbox { id, .. } | Node::Button { id, .. } | Node::Input { id, .. } => {
                Some(id)
            }
            _ => None,
        }
    }

    /// Style of this node.
    pub fn style(&self) -> Style {
        match self {
            Node::Empty => Style::new(),
            Node::Text { style, .. }
            | Node::Column { style, .. }
            | Node::Row { style, .. }
            | Node::Checkbox { style, .. }
            | Node::Button { style, .. }
            | Node::Input { style, .. }
            | Node::Spinner { style } => *style,
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Column { children, .. } | Node::Row { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first pre-order visit of this node and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Find the first node with the given ID.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Count nodes (including this one) matching a predicate.
    pub fn count(&self, predicate: impl Fn(&Node) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if predicate(node) {
                n += 1;
            }
        });
        n
    }

    /// All visible text in the subtree, concatenated in order.
    ///
    /// Text content, button labels and input values are included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| match node {
            Node::Text { content, .. } => out.push_str(content),
            Node::Button { label, .. } => out.push_str(label),
            Node::Input { value, .. } => out.push_str(value),
            _ => {}
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::column(vec![
            Node::text("Title"),
            Node::row(vec![
                Node::checkbox("pick", true, "Pick"),
                Node::button("go", "Go"),
            ]),
        ])
    }

    #[test]
    fn test_find_by_id() {
        let root = sample();
        assert!(matches!(
            root.find("pick"),
            Some(Node::Checkbox { checked: true, .. })
        ));
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_text_content_includes_labels() {
        assert_eq!(sample().text_content(), "TitleGo");
    }

    #[test]
    fn test_count() {
        let root = sample();
        assert_eq!(root.count(|n| matches!(n, Node::Row { .. })), 1);
        assert_eq!(root.count(|_| true), 5);
    }

    #[test]
    fn test_with_layout_ignores_leaves() {
        let text = Node::text("x").with_layout(Layout::new().gap(3));
        assert_eq!(text, Node::text("x"));
    }
}
