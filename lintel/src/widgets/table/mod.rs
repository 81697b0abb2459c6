//! Table widget - sortable columns with checkbox row selection.
//!
//! Header clicks on sortable columns cycle through ascending, descending and
//! unsorted. Values are compared by their textual form. Selection is keyed by
//! row id and reported as full rows in the current display order.

mod column;
mod events;
mod render;
mod sort;
mod state;

pub use column::{CellFormatter, CellRenderer, Column};
pub use render::{EMPTY_SUBTITLE, EMPTY_TITLE, LOADING_TEXT, header_id, row_checkbox_id, select_all_id};
pub use sort::{SortDirection, SortDirective, sorted_order};
pub use state::{DataTable, RowSelectHandler, TableView};
