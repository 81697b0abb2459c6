//! Event handling for the DataTable widget.

use crate::record::TableRow;
use crate::widgets::events::{EventResult, WidgetEvents};

use super::render::select_all_id;
use super::state::DataTable;

impl<T: TableRow> DataTable<T> {
    /// Find the row whose rendered checkbox carries `suffix`, the row id's
    /// element key.
    fn row_for_checkbox(&self, suffix: &str) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.visible().find(|row| row.id().element_key() == suffix).cloned())
    }
}

impl<T: TableRow> WidgetEvents for DataTable<T> {
    fn on_activate(&self, element_id: &str) -> EventResult {
        if element_id == select_all_id(self.id()) {
            return self.toggle_select_all();
        }

        let Some(rest) = element_id
            .strip_prefix(self.id())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return EventResult::Ignored;
        };

        if let Some(column_key) = rest.strip_prefix("header-") {
            return self.click_header(column_key);
        }

        if let Some(suffix) = rest.strip_prefix("row-") {
            return match self.row_for_checkbox(suffix) {
                Some(row) => self.toggle_row(row.id()),
                None => EventResult::Ignored,
            };
        }

        EventResult::Ignored
    }
}
