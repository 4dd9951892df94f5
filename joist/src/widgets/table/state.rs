use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::selection::{Selection, SelectionMode};

use super::column::{CellValue, Column, Pagination, RowKey, SortDirection};

/// Unique identifier for a DataTable widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// State of the select-all checkbox in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    /// Nothing selected.
    Unchecked,
    /// Some rows selected, fewer than all.
    Indeterminate,
    /// Every row selected.
    Checked,
}

/// Callback invoked with the resolved selection after every selection change.
pub type RowSelectHandler<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Callback invoked with an activated row and its position in the sorted view.
pub type RowClickHandler<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

/// Internal state for a DataTable widget
struct TableInner<T> {
    /// Column definitions.
    columns: Vec<Column<T>>,
    /// The rows in caller order; never reordered or mutated.
    rows: Vec<T>,
    /// Selection state (by derived row key).
    selection: Selection,
    /// Selection mode.
    selection_mode: SelectionMode,
    /// Cursor position in the sorted view.
    cursor: Option<usize>,
    /// Active sort: column key and direction.
    sort: Option<(String, SortDirection)>,
    /// Row identity strategy.
    row_key: RowKey<T>,
    /// Loading state takes precedence over everything else.
    loading: bool,
    loading_text: String,
    empty_text: String,
    /// Display-only pagination descriptor.
    pagination: Option<Pagination>,
    on_row_select: Option<RowSelectHandler<T>>,
    on_row_click: Option<RowClickHandler<T>>,
}

impl<T: Clone + Send + Sync> TableInner<T> {
    fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            selection: Selection::new(),
            selection_mode: SelectionMode::None,
            cursor: None,
            sort: None,
            row_key: RowKey::default(),
            loading: false,
            loading_text: "Loading...".to_string(),
            empty_text: "No data available".to_string(),
            pagination: None,
            on_row_select: None,
            on_row_click: None,
        }
    }

    /// Derive the identity key for a row at its position in caller order.
    fn key_of(&self, row: &T, index: usize) -> String {
        match &self.row_key {
            RowKey::Field(name) => {
                let value = self
                    .columns
                    .iter()
                    .find(|c| c.key == *name)
                    .map(|c| c.value(row));
                match value {
                    None | Some(CellValue::Empty) => index.to_string(),
                    Some(value) => value.to_string(),
                }
            }
            RowKey::Derived(f) => f(row, index),
            RowKey::Index => index.to_string(),
        }
    }

    /// Stable index permutation describing the sorted view.
    ///
    /// Recomputed from the current rows, sort state and columns on every
    /// call; the rows themselves never move. Ties keep caller order, and
    /// descending reverses the comparator rather than the result.
    fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if let Some((key, direction)) = &self.sort
            && let Some(column) = self.columns.iter().find(|c| c.key == *key && c.sortable)
        {
            order.sort_by(|&a, &b| {
                let ord = column.value(&self.rows[a]).compare(&column.value(&self.rows[b]));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        order
    }

    /// Key of the row at a position in the sorted view.
    fn key_at_sorted(&self, sorted_index: usize) -> Option<String> {
        let order = self.sorted_order();
        let original = *order.get(sorted_index)?;
        self.rows.get(original).map(|row| self.key_of(row, original))
    }

    /// Keys of the whole sorted view, in sorted order.
    fn sorted_keys(&self) -> Vec<String> {
        self.sorted_order()
            .into_iter()
            .map(|i| self.key_of(&self.rows[i], i))
            .collect()
    }
}

/// A sortable, selectable data table over caller-owned rows.
///
/// `DataTable<T>` presents a `Vec<T>` through typed column accessors with:
/// - Client-side stable sort, derived per render and never mutating the rows
/// - Single or multiple selection tracked by derived row keys
/// - A tri-state select-all checkbox
/// - Loading and empty states
/// - A display-only pagination footer
///
/// # Example
///
/// ```ignore
/// let table = DataTable::with_rows(columns, users)
///     .with_selection_mode(SelectionMode::Multiple)
///     .with_on_row_select(|rows| println!("{} selected", rows.len()));
///
/// table.toggle_sort("name");
/// table.toggle_row(0);
/// ```
pub struct DataTable<T: Clone + Send + Sync> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: Clone + Send + Sync> DataTable<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let mut inner = TableInner::new(columns);
        inner.rows = rows;
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Set the selection mode.
    ///
    /// Switching to `None` drops the selection; switching to `Single` keeps
    /// only the first selected row.
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.selection_mode = mode;
            match mode {
                SelectionMode::None => {
                    g.selection.clear();
                }
                SelectionMode::Single => {
                    if g.selection.len() > 1 {
                        let first: Vec<String> =
                            g.selection.first().map(str::to_string).into_iter().collect();
                        g.selection.replace(first);
                    }
                }
                SelectionMode::Multiple => {}
            }
        }
        self
    }

    /// Pre-select the given rows.
    ///
    /// Keys derive from the key strategy at call time, using each row's
    /// position in `rows` where the strategy needs a position; set the key
    /// strategy before calling this. Single mode keeps only the first row.
    pub fn with_default_selected(self, rows: &[T]) -> Self {
        if let Ok(mut g) = self.inner.write() {
            let mut keys: Vec<String> = Vec::with_capacity(rows.len());
            for (i, row) in rows.iter().enumerate() {
                let key = g.key_of(row, i);
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            if g.selection_mode == SelectionMode::Single && keys.len() > 1 {
                keys.truncate(1);
            }
            g.selection.replace(keys);
        }
        self
    }

    /// Set the row identity strategy.
    pub fn with_row_key(self, row_key: RowKey<T>) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.row_key = row_key;
        }
        self
    }

    /// Set the loading state.
    pub fn with_loading(self, loading: bool) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.loading = loading;
        }
        self
    }

    /// Set the loading indicator text.
    pub fn with_loading_text(self, text: impl Into<String>) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.loading_text = text.into();
        }
        self
    }

    /// Set the empty-state text.
    pub fn with_empty_text(self, text: impl Into<String>) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.empty_text = text.into();
        }
        self
    }

    /// Attach a display-only pagination descriptor.
    pub fn with_pagination(self, pagination: Pagination) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.pagination = Some(pagination);
        }
        self
    }

    /// Set the selection-change handler.
    pub fn with_on_row_select(self, handler: impl Fn(&[T]) + Send + Sync + 'static) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.on_row_select = Some(Arc::new(handler));
        }
        self
    }

    /// Set the row-activation handler.
    pub fn with_on_row_click(self, handler: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.on_row_click = Some(Arc::new(handler));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner.read().map(|g| g.columns.clone()).unwrap_or_default()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Replace the column definitions.
    ///
    /// Clears the sort state when the sorted column no longer exists or is
    /// no longer sortable.
    pub fn set_columns(&self, columns: Vec<Column<T>>) {
        if let Ok(mut g) = self.inner.write() {
            g.columns = columns;
            if let Some((key, _)) = &g.sort
                && !g.columns.iter().any(|c| c.key == *key && c.sortable)
            {
                g.sort = None;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|g| g.rows.is_empty()).unwrap_or(true)
    }

    /// Get all rows in caller order.
    pub fn rows(&self) -> Vec<T> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    /// Get the row at an index in caller order.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner.read().ok().and_then(|g| g.rows.get(index).cloned())
    }

    /// Replace the rows.
    ///
    /// Selection is kept; keys that no longer resolve simply stop matching.
    /// The cursor clamps to the new length.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut g) = self.inner.write() {
            g.rows = rows;
            if g.rows.is_empty() {
                g.cursor = None;
            } else if let Some(cursor) = g.cursor
                && cursor >= g.rows.len()
            {
                g.cursor = Some(g.rows.len() - 1);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove all rows.
    pub fn clear(&self) {
        self.set_rows(Vec::new());
    }

    // -------------------------------------------------------------------------
    // Sorted view
    // -------------------------------------------------------------------------

    /// Index permutation describing the sorted view.
    ///
    /// `sorted_order()[sorted_index]` is the row's position in caller order.
    /// Without an active sort this is the identity permutation.
    pub fn sorted_order(&self) -> Vec<usize> {
        self.inner.read().map(|g| g.sorted_order()).unwrap_or_default()
    }

    /// Get all rows in sorted-view order.
    pub fn sorted_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.sorted_order()
                    .into_iter()
                    .filter_map(|i| g.rows.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the row at a position in the sorted view.
    pub fn sorted_row(&self, sorted_index: usize) -> Option<T> {
        self.inner.read().ok().and_then(|g| {
            let order = g.sorted_order();
            let original = *order.get(sorted_index)?;
            g.rows.get(original).cloned()
        })
    }

    /// Key of the row at a position in the sorted view.
    pub fn key_at(&self, sorted_index: usize) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.key_at_sorted(sorted_index))
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the cursor position in the sorted view.
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Get the row under the cursor.
    pub fn cursor_row(&self) -> Option<T> {
        self.cursor().and_then(|index| self.sorted_row(index))
    }

    /// Set the cursor position, clamped to the row count.
    pub fn set_cursor(&self, index: usize) -> Option<usize> {
        if let Ok(mut g) = self.inner.write() {
            if g.rows.is_empty() {
                return None;
            }
            let clamped = index.min(g.rows.len() - 1);
            if g.cursor != Some(clamped) {
                g.cursor = Some(clamped);
                self.dirty.store(true, Ordering::SeqCst);
            }
            return Some(clamped);
        }
        None
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&self) -> Option<usize> {
        let target = match self.cursor() {
            None => 0,
            Some(i) => i.saturating_sub(1),
        };
        self.set_cursor(target)
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&self) -> Option<usize> {
        let target = match self.cursor() {
            None => 0,
            Some(i) => i + 1,
        };
        self.set_cursor(target)
    }

    /// Move the cursor to the first row.
    pub fn cursor_first(&self) -> Option<usize> {
        self.set_cursor(0)
    }

    /// Move the cursor to the last row.
    pub fn cursor_last(&self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.set_cursor(len - 1)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner.read().map(|g| g.selection_mode).unwrap_or_default()
    }

    /// Set the selection mode.
    ///
    /// Switching to `None` drops the selection; switching to `Single` keeps
    /// only the first selected row. Fires the selection handler when the
    /// selection shrinks.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        let mut changed = false;
        if let Ok(mut g) = self.inner.write() {
            g.selection_mode = mode;
            match mode {
                SelectionMode::None => {
                    changed = g.selection.clear();
                }
                SelectionMode::Single => {
                    if g.selection.len() > 1 {
                        let first: Vec<String> =
                            g.selection.first().map(str::to_string).into_iter().collect();
                        g.selection.replace(first);
                        changed = true;
                    }
                }
                SelectionMode::Multiple => {}
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
        if changed {
            self.emit_selection();
        }
    }

    /// Get the selected keys in selection order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.keys().to_vec())
            .unwrap_or_default()
    }

    /// Resolve the selection to rows, in selection order.
    ///
    /// Keys that no longer match a row are skipped.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.selection
                    .keys()
                    .iter()
                    .filter_map(|key| {
                        g.rows
                            .iter()
                            .enumerate()
                            .find(|(i, row)| g.key_of(row, *i) == *key)
                            .map(|(_, row)| row.clone())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of selected keys.
    pub fn selected_count(&self) -> usize {
        self.inner.read().map(|g| g.selection.len()).unwrap_or(0)
    }

    /// Check if a key is selected.
    pub fn is_selected_key(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.contains(key))
            .unwrap_or(false)
    }

    /// Check if the row at a position in the sorted view is selected.
    pub fn is_selected_at(&self, sorted_index: usize) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.key_at_sorted(sorted_index)
                    .map(|key| g.selection.contains(&key))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// State of the header select-all checkbox.
    ///
    /// `Checked` when the selection length equals the row count and is
    /// non-zero; `Indeterminate` when non-empty but smaller.
    pub fn select_all_state(&self) -> SelectAllState {
        self.inner
            .read()
            .map(|g| {
                let selected = g.selection.len();
                if selected == 0 {
                    SelectAllState::Unchecked
                } else if selected == g.rows.len() && !g.rows.is_empty() {
                    SelectAllState::Checked
                } else {
                    SelectAllState::Indeterminate
                }
            })
            .unwrap_or(SelectAllState::Unchecked)
    }

    /// Flip the checked state of the row at a position in the sorted view.
    ///
    /// Returns true and fires the selection handler if the selection changed.
    pub fn toggle_row(&self, sorted_index: usize) -> bool {
        let mut changed = false;
        if let Ok(mut g) = self.inner.write() {
            if g.selection_mode == SelectionMode::None {
                return false;
            }
            let Some(key) = g.key_at_sorted(sorted_index) else {
                return false;
            };
            let mode = g.selection_mode;
            changed = g.selection.toggle(mode, &key);
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Check or uncheck the row at a position in the sorted view.
    ///
    /// Single mode replaces the whole selection when checking and clears it
    /// when unchecking. Returns true and fires the selection handler if the
    /// selection changed.
    pub fn set_row_checked(&self, sorted_index: usize, checked: bool) -> bool {
        let mut changed = false;
        if let Ok(mut g) = self.inner.write() {
            if g.selection_mode == SelectionMode::None {
                return false;
            }
            let Some(key) = g.key_at_sorted(sorted_index) else {
                return false;
            };
            let mode = g.selection_mode;
            changed = g.selection.set_checked(mode, &key, checked);
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Select every row of the sorted view, in sorted order (Multiple only).
    ///
    /// Returns true and fires the selection handler if the selection changed.
    pub fn select_all(&self) -> bool {
        let mut changed = false;
        if let Ok(mut g) = self.inner.write() {
            if g.selection_mode != SelectionMode::Multiple || g.rows.is_empty() {
                return false;
            }
            let keys = g.sorted_keys();
            if g.selection.keys() != keys.as_slice() {
                g.selection.replace(keys);
                changed = true;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Clear the selection.
    ///
    /// Returns true and fires the selection handler if the selection changed.
    pub fn deselect_all(&self) -> bool {
        let mut changed = false;
        if let Ok(mut g) = self.inner.write() {
            changed = g.selection.clear();
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Drive the header select-all checkbox: deselect when fully checked,
    /// otherwise select all.
    pub fn toggle_select_all(&self) -> bool {
        if self.select_all_state() == SelectAllState::Checked {
            self.deselect_all()
        } else {
            self.select_all()
        }
    }

    // -------------------------------------------------------------------------
    // Row activation
    // -------------------------------------------------------------------------

    /// Invoke the row-activation handler for a position in the sorted view.
    pub fn activate_row(&self, sorted_index: usize) {
        let payload = self.inner.read().ok().and_then(|g| {
            let order = g.sorted_order();
            let original = *order.get(sorted_index)?;
            let row = g.rows.get(original)?.clone();
            Some((row, g.on_row_click.clone()))
        });
        if let Some((row, Some(handler))) = payload {
            handler(&row, sorted_index);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<(String, SortDirection)> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Set the sort state directly.
    ///
    /// Ignored when no sortable column carries the key.
    pub fn set_sort(&self, key: &str, direction: SortDirection) {
        if let Ok(mut g) = self.inner.write()
            && g.columns.iter().any(|c| c.key == key && c.sortable)
        {
            g.sort = Some((key.to_string(), direction));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle sort for a column key.
    ///
    /// The same column flips direction; a different column starts ascending.
    /// Unknown and non-sortable keys change nothing. Returns the new sort
    /// state when it changed.
    pub fn toggle_sort(&self, key: &str) -> Option<(String, SortDirection)> {
        if let Ok(mut g) = self.inner.write()
            && g.columns.iter().any(|c| c.key == key && c.sortable)
        {
            let direction = match &g.sort {
                Some((active, direction)) if active == key => direction.flipped(),
                _ => SortDirection::Ascending,
            };
            g.sort = Some((key.to_string(), direction));
            self.dirty.store(true, Ordering::SeqCst);
            return Some((key.to_string(), direction));
        }
        None
    }

    /// Clear the sort state; the view returns to caller order.
    pub fn clear_sort(&self) {
        if let Ok(mut g) = self.inner.write() {
            g.sort = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Loading and empty state
    // -------------------------------------------------------------------------

    /// Check the loading state.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading state.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut g) = self.inner.write() {
            g.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the loading indicator text.
    pub fn loading_text(&self) -> String {
        self.inner.read().map(|g| g.loading_text.clone()).unwrap_or_default()
    }

    /// Get the empty-state text.
    pub fn empty_text(&self) -> String {
        self.inner.read().map(|g| g.empty_text.clone()).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the pagination descriptor.
    pub fn pagination(&self) -> Option<Pagination> {
        self.inner.read().ok().and_then(|g| g.pagination.clone())
    }

    /// Replace the pagination descriptor.
    pub fn set_pagination(&self, pagination: Option<Pagination>) {
        if let Ok(mut g) = self.inner.write() {
            g.pagination = pagination;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Request the previous page through the pagination handler.
    ///
    /// Respects the disabled guard; the widget changes no state itself.
    pub fn page_prev(&self) -> bool {
        let pagination = self.pagination();
        if let Some(p) = pagination
            && p.has_prev()
        {
            p.notify(p.current() - 1, p.page_size());
            return true;
        }
        false
    }

    /// Request the next page through the pagination handler.
    pub fn page_next(&self) -> bool {
        let pagination = self.pagination();
        if let Some(p) = pagination
            && p.has_next()
        {
            p.notify(p.current() + 1, p.page_size());
            return true;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Invoke the selection handler outside the lock so it can read the
    /// widget. The payload is the selection resolved to rows in selection
    /// order.
    fn emit_selection(&self) {
        let handler = self.inner.read().ok().and_then(|g| g.on_row_select.clone());
        if let Some(handler) = handler {
            let rows = self.selected_rows();
            handler(&rows);
        }
    }
}

impl<T: Clone + Send + Sync> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Clone + Send + Sync> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("rows", &self.len())
            .field("sort", &self.sort())
            .finish_non_exhaustive()
    }
}
