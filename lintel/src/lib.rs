//! Lintel - data widgets for terminal forms.
//!
//! Two widgets live here:
//!
//! - [`DataTable`]: a sortable table with checkbox row selection.
//! - [`TextField`]: a decorated single-line text input with label, helper
//!   text, error message, clear button and password reveal toggle.
//!
//! Widgets are cheap-to-clone handles over shared state. They render to a
//! framework-neutral [`Node`] tree, which [`render::render_lines`] turns into
//! styled text lines for a terminal.
//!
//! # Example
//!
//! ```
//! use lintel::prelude::*;
//!
//! let table = DataTable::new(vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("role", "Role"),
//! ])
//! .with_rows(vec![
//!     Record::new(1).set("name", "Bob").set("role", "Admin"),
//!     Record::new(2).set("name", "Ann").set("role", "User"),
//! ])
//! .selectable(true);
//!
//! table.click_header("name");
//! let names: Vec<String> = table
//!     .sorted_rows()
//!     .iter()
//!     .map(|row| row.field_text("name"))
//!     .collect();
//! assert_eq!(names, vec!["Ann", "Bob"]);
//! ```

pub mod node;
pub mod prelude;
pub mod record;
pub mod render;
pub mod style;
pub mod text;
pub mod widgets;

pub use node::{Border, Layout, Node, Size};
pub use record::{Record, RecordError, RecordId, TableRow};
pub use style::{Color, Style};
pub use widgets::{
    CellRenderer, ChangeEvent, Column, DataTable, EventResult, FieldSize, InputType, Selection,
    SortDirection, SortDirective, TableView, TextField, Variant, WidgetEvents,
};
