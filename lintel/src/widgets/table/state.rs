//! Data table widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::node::Node;
use crate::record::{RecordId, TableRow};
use crate::widgets::events::EventResult;
use crate::widgets::selection::Selection;

use super::column::Column;
use super::sort::{SortDirective, sorted_order};

/// Handler receiving the full selected rows, in sorted-view order.
pub type RowSelectHandler<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

fn next_table_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("__table_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Which of the mutually exclusive table states is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableView {
    /// Loading placeholder; header and rows are hidden.
    Loading,
    /// Empty placeholder.
    Empty,
    /// Header and rows.
    Table,
}

/// Internal state for the DataTable widget.
pub(super) struct TableInner<T: TableRow> {
    /// Column definitions.
    pub columns: Vec<Column<T>>,
    /// The rows in input order.
    pub rows: Vec<T>,
    /// Indices into `rows` in display order.
    pub order: Vec<usize>,
    /// Current sort directive.
    pub sort: Option<SortDirective>,
    /// Selected row ids.
    pub selection: Selection<RecordId>,
    /// Whether rows carry selection checkboxes.
    pub selectable: bool,
    /// Whether the loading placeholder is shown.
    pub loading: bool,
    /// Selection change handler.
    pub on_row_select: Option<RowSelectHandler<T>>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            order: Vec::new(),
            sort: None,
            selection: Selection::new(),
            selectable: false,
            loading: false,
            on_row_select: None,
        }
    }

    /// Recompute the display order after rows or sort changed.
    fn resort(&mut self) {
        self.order = sorted_order(&self.rows, self.sort.as_ref());
    }

    /// Rows in display order.
    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(|&i| &self.rows[i])
    }

    /// Selected rows in display order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.visible()
            .filter(|row| self.selection.is_selected(&row.id()))
            .cloned()
            .collect()
    }

    /// Whether every visible row is selected (and there is at least one).
    pub fn all_selected(&self) -> bool {
        !self.order.is_empty() && self.selection.len() == self.order.len()
    }

    pub fn view(&self) -> TableView {
        if self.loading {
            TableView::Loading
        } else if self.rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Table
        }
    }
}

/// A sortable data table with checkbox row selection.
///
/// `DataTable<T>` displays rows with:
/// - Column headers; clicking a sortable header cycles
///   ascending -> descending -> unsorted
/// - Optional checkbox selection with a select-all toggle
/// - Loading and empty placeholders
///
/// Rows and columns belong to the caller and are replaced wholesale through
/// [`set_rows`](Self::set_rows) and [`set_columns`](Self::set_columns). The
/// sort directive and selection belong to the table and survive row
/// replacement; selected ids that are no longer present are not pruned.
///
/// Cloning the table yields another handle to the same state.
pub struct DataTable<T: TableRow> {
    /// Element ID prefix.
    id: String,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            id: next_table_id(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the initial rows.
    pub fn with_rows(self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Use an explicit element ID prefix instead of a generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Enable or disable checkbox selection.
    pub fn selectable(self, selectable: bool) -> Self {
        self.set_selectable(selectable);
        self
    }

    /// Start in (or out of) the loading state.
    pub fn loading(self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Set the selection change handler.
    pub fn on_row_select<F>(self, handler: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_row_select = Some(Arc::new(handler));
        }
        self
    }

    /// Get the element ID prefix.
    pub fn id(&self) -> &str {
        &self.id
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Set the column definitions.
    pub fn set_columns(&self, columns: Vec<Column<T>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace all rows.
    ///
    /// The sort directive is re-applied; the selection is left untouched.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.resort();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in input order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get all rows in display order.
    pub fn sorted_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.visible().cloned().collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Flags
    // -------------------------------------------------------------------------

    pub fn is_selectable(&self) -> bool {
        self.inner.read().map(|g| g.selectable).unwrap_or(false)
    }

    pub fn set_selectable(&self, selectable: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selectable = selectable;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Toggle the loading placeholder. Sort and selection are kept.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Which placeholder or table body is currently shown.
    pub fn view(&self) -> TableView {
        self.inner
            .read()
            .map(|g| g.view())
            .unwrap_or(TableView::Empty)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort directive.
    pub fn sort(&self) -> Option<SortDirective> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Handle a click on the header of the column with the given key.
    ///
    /// Non-sortable and unknown columns are ignored.
    pub fn click_header(&self, column_key: &str) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };

        let Some(field) = guard
            .columns
            .iter()
            .find(|c| c.key == column_key && c.sortable)
            .map(|c| c.field.clone())
        else {
            log::debug!("{}: ignoring header click on '{}'", self.id, column_key);
            return EventResult::Ignored;
        };

        guard.sort = SortDirective::cycle(guard.sort.as_ref(), &field);
        guard.resort();
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("{}: sort is now {:?}", self.id, guard.sort);
        EventResult::Consumed
    }

    /// Remove the sort directive, restoring input order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = None;
            guard.resort();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected IDs, ordered by id.
    ///
    /// May include ids of rows that were replaced since they were selected.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self
            .inner
            .read()
            .map(|g| g.selection.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Get the selected rows in display order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Whether the select-all checkbox is ticked.
    pub fn all_selected(&self) -> bool {
        self.inner.read().map(|g| g.all_selected()).unwrap_or(false)
    }

    /// Flip selection of one row, then report the selected rows.
    pub fn toggle_row(&self, id: impl Into<RecordId>) -> EventResult {
        let id = id.into();
        self.update_selection(|inner| {
            let now_selected = inner.selection.toggle(id.clone());
            log::debug!("row {} selected: {}", id, now_selected);
        })
    }

    /// Select every visible row, or clear the selection if every visible row
    /// is already selected; then report the selected rows.
    pub fn toggle_select_all(&self) -> EventResult {
        self.update_selection(|inner| {
            if inner.all_selected() {
                inner.selection.clear();
            } else {
                let ids: Vec<RecordId> = inner.visible().map(|row| row.id()).collect();
                inner.selection.replace(ids);
            }
        })
    }

    /// Apply a selection change and notify the handler once the lock is
    /// released.
    fn update_selection(&self, change: impl FnOnce(&mut TableInner<T>)) -> EventResult {
        let (selected, handler) = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if !guard.selectable {
                log::debug!("{}: selection change ignored, table not selectable", self.id);
                return EventResult::Ignored;
            }
            change(&mut *guard);
            self.dirty.store(true, Ordering::SeqCst);
            (guard.selected_rows(), guard.on_row_select.clone())
        };

        log::debug!("{}: {} row(s) selected", self.id, selected.len());
        if let Some(handler) = handler {
            handler(&selected);
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the view tree for the current state.
    pub fn render(&self) -> Node {
        self.inner
            .read()
            .map(|g| super::render::render(&self.id, &*g))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Default for DataTable<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: TableRow> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("rows", &self.len())
            .field("sort", &self.sort())
            .finish()
    }
}
