//! DataTable widget rendering.
//!
//! The table renders as a column of lines: header, divider, one row per
//! entry of the sorted view, and an optional pagination footer. Loading and
//! empty states replace the whole thing.

use unicode_width::UnicodeWidthStr;

use crate::node::{Layout, Node, Size};
use crate::selection::SelectionMode;
use crate::style::Style;

use super::{Column, DataTable, Pagination, SelectAllState, SortDirection};

/// Fixed detail line under the empty-state text.
const EMPTY_DETAIL: &str = "There are no records to display";

/// Pad `text` with trailing spaces up to `width` display cells.
fn pad_to(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Header text for a column, with the indicator when it drives the sort.
fn header_label<T>(column: &Column<T>, sort: Option<&(String, SortDirection)>) -> String {
    match sort {
        Some((key, direction)) if *key == column.key => {
            format!("{} {}", column.title, direction.indicator())
        }
        _ => column.title.clone(),
    }
}

/// Display width for each column: the hint when set, otherwise the widest
/// of the header label and the cell values.
fn column_widths<T: Clone + Send + Sync>(
    columns: &[Column<T>],
    rows: &[T],
    sort: Option<&(String, SortDirection)>,
) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            if let Some(width) = column.width {
                return width as usize;
            }
            let mut width = header_label(column, sort).width();
            for row in rows {
                width = width.max(column.value(row).to_string().width());
            }
            width
        })
        .collect()
}

/// Wrap a custom-rendered cell in a fixed-width slot.
fn fixed_width(node: Node, width: usize) -> Node {
    Node::row_styled(
        vec![node],
        Style::new(),
        Layout {
            width: Size::Fixed(width as u16),
            ..Layout::default()
        },
    )
}

fn checkbox_style(selected: bool) -> Style {
    if selected {
        Style::new().fg_named("primary")
    } else {
        Style::new().fg_named("text_muted")
    }
}

fn divider(widths: &[usize], mode: SelectionMode) -> Node {
    let mut total: usize = widths.iter().sum();
    if !widths.is_empty() {
        total += 2 * (widths.len() - 1);
    }
    if mode != SelectionMode::None {
        // Checkbox cell plus its gap
        total += 5;
    }
    Node::text_styled("─".repeat(total), Style::new().fg_named("border"))
}

fn footer(pagination: &Pagination) -> Node {
    let prev_style = if pagination.has_prev() {
        Style::new().fg_named("primary")
    } else {
        Style::new().fg_named("text_muted").dim()
    };
    let next_style = if pagination.has_next() {
        Style::new().fg_named("primary")
    } else {
        Style::new().fg_named("text_muted").dim()
    };
    Node::row_styled(
        vec![
            Node::text_styled(pagination.summary(), Style::new().fg_named("text_muted")),
            Node::text_styled(pagination.page_label(), Style::new().fg_named("text")),
            Node::text_styled("← Previous", prev_style),
            Node::text_styled("Next →", next_style),
        ],
        Style::new(),
        Layout::gap(3),
    )
}

impl<T: Clone + Send + Sync> DataTable<T> {
    /// Build the view tree for this table.
    ///
    /// Exactly one of three shapes: the loading indicator, the empty state,
    /// or the interactive table. `focused` highlights the cursor row.
    pub fn view(&self, focused: bool) -> Node {
        if self.is_loading() {
            return Node::column(vec![Node::text_styled(
                self.loading_text(),
                Style::new().fg_named("text_muted").italic(),
            )]);
        }
        if self.is_empty() {
            return Node::column(vec![
                Node::text_styled(self.empty_text(), Style::new().fg_named("text")),
                Node::text_styled(EMPTY_DETAIL, Style::new().fg_named("text_muted")),
            ]);
        }

        let columns = self.columns();
        let rows = self.sorted_rows();
        let mode = self.selection_mode();
        let sort = self.sort();
        let widths = column_widths(&columns, &rows, sort.as_ref());

        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(self.header_row(&columns, &widths, mode, sort.as_ref()));
        lines.push(divider(&widths, mode));
        for (sorted_index, row) in rows.iter().enumerate() {
            lines.push(self.body_row(&columns, &widths, mode, row, sorted_index, focused));
        }
        if let Some(pagination) = self.pagination() {
            lines.push(footer(&pagination));
        }
        Node::column(lines)
    }

    fn header_row(
        &self,
        columns: &[Column<T>],
        widths: &[usize],
        mode: SelectionMode,
        sort: Option<&(String, SortDirection)>,
    ) -> Node {
        let mut cells = Vec::with_capacity(columns.len() + 1);
        match mode {
            SelectionMode::Multiple => {
                let glyph = match self.select_all_state() {
                    SelectAllState::Unchecked => "[ ]",
                    SelectAllState::Indeterminate => "[-]",
                    SelectAllState::Checked => "[x]",
                };
                let selected = self.select_all_state() != SelectAllState::Unchecked;
                cells.push(Node::text_styled(glyph, checkbox_style(selected)));
            }
            SelectionMode::Single => cells.push(Node::text("   ")),
            SelectionMode::None => {}
        }
        for (column, width) in columns.iter().zip(widths) {
            let label = header_label(column, sort);
            cells.push(Node::text_styled(
                pad_to(&label, *width),
                Style::new().fg_named("text").bold(),
            ));
        }
        Node::row_styled(cells, Style::new(), Layout::gap(2))
    }

    fn body_row(
        &self,
        columns: &[Column<T>],
        widths: &[usize],
        mode: SelectionMode,
        row: &T,
        sorted_index: usize,
        focused: bool,
    ) -> Node {
        let selected = self.is_selected_at(sorted_index);
        let mut cells = Vec::with_capacity(columns.len() + 1);
        match mode {
            SelectionMode::Multiple => {
                let glyph = if selected { "[x]" } else { "[ ]" };
                cells.push(Node::text_styled(glyph, checkbox_style(selected)));
            }
            SelectionMode::Single => {
                let glyph = if selected { "(•)" } else { "( )" };
                cells.push(Node::text_styled(glyph, checkbox_style(selected)));
            }
            SelectionMode::None => {}
        }
        for (column, width) in columns.iter().zip(widths) {
            let value = column.value(row);
            let cell = match &column.renderer {
                Some(renderer) => fixed_width(renderer(&value, row, sorted_index), *width),
                None => Node::text(pad_to(&value.to_string(), *width)),
            };
            cells.push(cell);
        }
        let mut style = Style::new();
        if focused && self.cursor() == Some(sorted_index) {
            style = style.bg_named("surface").bold();
        } else if selected {
            style = style.fg_named("primary");
        }
        Node::row_styled(cells, style, Layout::gap(2))
    }
}
