//! Data table rendering.

use crate::node::{Border, Layout, Node, Size};
use crate::record::{RecordId, TableRow};
use crate::render::rendered_width;
use crate::style::{Color, Style};
use crate::text::display_width;

use super::column::Column;
use super::sort::SortDirection;
use super::state::{TableInner, TableView};

/// Width of the checkbox column.
const CHECKBOX_WIDTH: u16 = 3;
/// Extra header width of a sortable column: the button brackets, a space and
/// the "▲▼" indicators.
const SORTABLE_EXTRA: usize = 5;

pub const LOADING_TEXT: &str = "Loading data...";
pub const EMPTY_TITLE: &str = "No data available";
pub const EMPTY_SUBTITLE: &str = "There are no records to display";

/// Element ID of the select-all checkbox.
pub fn select_all_id(table_id: &str) -> String {
    format!("{table_id}-select-all")
}

/// Element ID of a row's checkbox.
pub fn row_checkbox_id(table_id: &str, row_id: &RecordId) -> String {
    format!("{table_id}-row-{}", row_id.element_key())
}

/// Element ID of a sortable column's header button.
pub fn header_id(table_id: &str, column_key: &str) -> String {
    format!("{table_id}-header-{column_key}")
}

fn frame() -> Layout {
    Layout::new().border(Border::Rounded).padding_h(1)
}

/// Render a table for its current state.
pub(super) fn render<T: TableRow>(id: &str, inner: &TableInner<T>) -> Node {
    match inner.view() {
        TableView::Loading => render_loading(),
        TableView::Empty => render_empty(),
        TableView::Table => render_table(id, inner),
    }
}

fn render_loading() -> Node {
    Node::column_styled(
        vec![
            Node::spinner().with_style(Style::new().fg(Color::Primary)),
            Node::text_styled(LOADING_TEXT, Style::new().fg(Color::Muted)),
        ],
        Style::new(),
        frame().padding(1),
    )
}

fn render_empty() -> Node {
    Node::column_styled(
        vec![
            Node::text_styled(EMPTY_TITLE, Style::new().fg(Color::Muted).bold()),
            Node::text_styled(EMPTY_SUBTITLE, Style::new().fg(Color::Muted).dim()),
        ],
        Style::new(),
        frame().padding(1),
    )
}

fn render_table<T: TableRow>(id: &str, inner: &TableInner<T>) -> Node {
    // Cells are rendered up front so column widths can account for custom
    // formatter output.
    let body: Vec<(&T, Vec<Node>)> = inner
        .visible()
        .enumerate()
        .map(|(index, row)| {
            let cells = inner
                .columns
                .iter()
                .map(|column| column.render_cell(row, index))
                .collect();
            (row, cells)
        })
        .collect();

    let widths = column_widths(&inner.columns, body.iter().map(|(_, cells)| cells.as_slice()));

    let mut children = Vec::with_capacity(body.len() + 1);
    children.push(render_header(id, inner, &widths));
    for (row, cells) in body {
        let selected = inner.selection.is_selected(&row.id());
        children.push(render_row(id, inner.selectable, row, cells, selected, &widths));
    }

    Node::column_styled(children, Style::new(), frame())
}

/// Width of each column: the widest of its header and cells.
fn column_widths<'a, T: TableRow>(
    columns: &[Column<T>],
    rows: impl Iterator<Item = &'a [Node]>,
) -> Vec<u16> {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|column| {
            let indicator = if column.sortable { SORTABLE_EXTRA } else { 0 };
            display_width(&column.title) + indicator
        })
        .collect();

    for cells in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(rendered_width(cell));
        }
    }

    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
        .collect()
}

fn cell(content: Node, width: u16) -> Node {
    Node::row_styled(vec![content], Style::new(), Layout::new().width(Size::Fixed(width)))
}

fn render_header<T: TableRow>(id: &str, inner: &TableInner<T>, widths: &[u16]) -> Node {
    let mut cells = Vec::with_capacity(inner.columns.len() + 1);

    if inner.selectable {
        let checkbox = Node::checkbox(select_all_id(id), inner.all_selected(), "Select all rows");
        cells.push(cell(checkbox, CHECKBOX_WIDTH));
    }

    let title_style = Style::new().fg(Color::Muted).bold();
    for (column, &width) in inner.columns.iter().zip(widths) {
        if !column.sortable {
            cells.push(cell(Node::text_styled(&column.title, title_style), width));
            continue;
        }

        let direction = inner
            .sort
            .as_ref()
            .and_then(|s| s.direction_for(&column.field));
        let arrow = |active: bool, glyph: &str| {
            let color = if active { Color::Primary } else { Color::Muted };
            Node::text_styled(glyph, Style::new().fg(color))
        };

        let header = Node::row_styled(
            vec![
                Node::button(header_id(id, &column.key), &column.title).with_style(title_style),
                Node::text(" "),
                arrow(direction == Some(SortDirection::Ascending), "▲"),
                arrow(direction == Some(SortDirection::Descending), "▼"),
            ],
            Style::new(),
            Layout::new().width(Size::Fixed(width)),
        );
        cells.push(header);
    }

    Node::row_styled(cells, Style::new().underline(), Layout::new().gap(2))
}

fn render_row<T: TableRow>(
    id: &str,
    selectable: bool,
    row: &T,
    cells: Vec<Node>,
    selected: bool,
    widths: &[u16],
) -> Node {
    let mut children = Vec::with_capacity(cells.len() + 1);

    if selectable {
        let row_id = row.id();
        let label = format!("Select row {row_id}");
        let checkbox = Node::checkbox(row_checkbox_id(id, &row_id), selected, label);
        children.push(cell(checkbox, CHECKBOX_WIDTH));
    }

    for (content, &width) in cells.into_iter().zip(widths) {
        children.push(cell(content, width));
    }

    let style = if selected {
        Style::new().bg(Color::Selected)
    } else {
        Style::new()
    };
    Node::row_styled(children, style, Layout::new().gap(2))
}
