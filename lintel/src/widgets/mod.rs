//! Widgets and their interaction plumbing.

pub mod events;
pub mod selection;
pub mod table;
pub mod text_field;

pub use events::{EventResult, WidgetEvents};
pub use selection::Selection;
pub use table::{
    CellFormatter, CellRenderer, Column, DataTable, RowSelectHandler, SortDirection,
    SortDirective, TableView,
};
pub use text_field::{ChangeEvent, ChangeHandler, FieldSize, InputType, TextField, Variant};
