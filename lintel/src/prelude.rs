//! Common imports for building screens with lintel widgets.

pub use crate::node::{Border, Layout, Node, Size};
pub use crate::record::{Record, RecordId, TableRow, text_of};
pub use crate::render::{Line, Span, render_lines};
pub use crate::style::{Color, Style};
pub use crate::widgets::{
    ChangeEvent, Column, DataTable, EventResult, FieldSize, InputType, SortDirection,
    SortDirective, TextField, Variant, WidgetEvents,
};
