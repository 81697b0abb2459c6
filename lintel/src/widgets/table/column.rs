//! Column definitions for the data table.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::node::Node;
use crate::record::{TableRow, text_of};

/// Custom cell formatter: `(value, row, index in the sorted view) -> content`.
pub type CellFormatter<T> = Arc<dyn Fn(&Value, &T, usize) -> Node + Send + Sync>;

/// How a column turns a field value into cell content.
pub enum CellRenderer<T> {
    /// Textual form of the value (null and missing render empty).
    Text,
    /// Caller-supplied formatter.
    Custom(CellFormatter<T>),
}

impl<T> Clone for CellRenderer<T> {
    fn clone(&self) -> Self {
        match self {
            CellRenderer::Text => CellRenderer::Text,
            CellRenderer::Custom(f) => CellRenderer::Custom(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for CellRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRenderer::Text => f.write_str("Text"),
            CellRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A table column definition.
///
/// # Examples
///
/// ```
/// use lintel::{Column, Node, Record};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("id", "ID").sortable(),
///     Column::new("email", "Email").field("email_address"),
///     Column::new("status", "Status")
///         .sortable()
///         .render(|value, _row, _index| Node::text(format!("<{}>", value))),
/// ];
/// ```
#[derive(Debug)]
pub struct Column<T> {
    /// Stable identifier for this column.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Field read from each row (defaults to `key`).
    pub field: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Cell rendering.
    pub renderer: CellRenderer<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            field: self.field.clone(),
            sortable: self.sortable,
            renderer: self.renderer.clone(),
        }
    }
}

impl<T: TableRow> Column<T> {
    /// Create a new column reading the field named like its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            renderer: CellRenderer::Text,
        }
    }

    /// Read a different field than the column key.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and respond to
    /// header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Use a custom formatter for this column's cells.
    pub fn render<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value, &T, usize) -> Node + Send + Sync + 'static,
    {
        self.renderer = CellRenderer::Custom(Arc::new(formatter));
        self
    }

    /// Render the cell for `row`, which sits at `index` in the sorted view.
    pub fn render_cell(&self, row: &T, index: usize) -> Node {
        let value = row.field(&self.field).unwrap_or(Value::Null);
        match &self.renderer {
            CellRenderer::Text => Node::text(text_of(&value)),
            CellRenderer::Custom(formatter) => formatter(&value, row, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_default_cell_is_text() {
        let column: Column<Record> = Column::new("name", "Name");
        let row = Record::new(1).set("name", "Ann");
        assert_eq!(column.render_cell(&row, 0), Node::text("Ann"));
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let column: Column<Record> = Column::new("role", "Role");
        assert_eq!(column.render_cell(&Record::new(1), 0), Node::text(""));
    }

    #[test]
    fn test_custom_renderer_gets_index() {
        let column: Column<Record> =
            Column::new("name", "Name").render(|value, row: &Record, index| {
                Node::text(format!("{}:{}:{}", index, row.id(), text_of(value)))
            });
        let row = Record::new(9).set("name", "Ann");
        assert_eq!(column.render_cell(&row, 2), Node::text("2:9:Ann"));
    }
}
