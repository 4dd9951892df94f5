use std::cmp::Ordering;
use std::sync::Arc;

use crate::node::Node;

// =============================================================================
// CellValue
// =============================================================================

/// Typed cell payload produced by column accessors.
///
/// `Empty` stands in for missing fields and renders as an empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// Total order over cell values for sorting.
    ///
    /// Values rank by class first (`Empty`, then bools, then numbers, then
    /// text). Numbers compare numerically across `Int` and `Float`, text
    /// lexicographically, bools false before true.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Check for the missing-field marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

// =============================================================================
// Column
// =============================================================================

/// Reads a typed cell value out of a row.
pub type CellAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell renderer: receives the accessor value, the row and the row's
/// position in the sorted view.
pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T, usize) -> Node + Send + Sync>;

/// A table column definition.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID", |u: &User| u.id.into()).width(6),
///     Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
/// ];
/// ```
pub struct Column<T> {
    /// Unique identifier for this column within its table.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Whether the column participates in sorting.
    pub sortable: bool,
    /// Display width hint in cells.
    pub width: Option<u16>,
    accessor: CellAccessor<T>,
    pub(super) renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column with the given key, header title and accessor.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            accessor: Arc::new(accessor),
            renderer: None,
        }
    }

    /// Allow sorting on this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a display width hint for this column.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Render cells through a custom function instead of the plain value.
    pub fn render_with(
        mut self,
        f: impl Fn(&CellValue, &T, usize) -> Node + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Read this column's value out of a row.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            width: self.width,
            accessor: Arc::clone(&self.accessor),
            renderer: self.renderer.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Sort direction
// =============================================================================

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

// =============================================================================
// Row keys
// =============================================================================

/// Strategy for deriving a row's identity key.
///
/// Selection tracks rows by these keys, so they should be stable for as long
/// as a row is on screen. The position-based fallbacks stop resolving when
/// the caller reorders its data.
pub enum RowKey<T> {
    /// Stringify the cell of the column with this key; falls back to the
    /// row's position when no such column exists or the value is empty.
    Field(String),
    /// Derive the key from the row and its position in the caller's order.
    Derived(Arc<dyn Fn(&T, usize) -> String + Send + Sync>),
    /// Use the row's position in the caller's order.
    Index,
}

impl<T> RowKey<T> {
    /// Key derivation from a closure.
    pub fn derived(f: impl Fn(&T, usize) -> String + Send + Sync + 'static) -> Self {
        RowKey::Derived(Arc::new(f))
    }
}

impl<T> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Field("id".to_string())
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Field(name) => RowKey::Field(name.clone()),
            RowKey::Derived(f) => RowKey::Derived(Arc::clone(f)),
            RowKey::Index => RowKey::Index,
        }
    }
}

impl<T> std::fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKey::Derived(_) => f.write_str("Derived"),
            RowKey::Index => f.write_str("Index"),
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Callback invoked with the requested page and the page size.
pub type PageChangeHandler = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Display-only pagination descriptor.
///
/// The table renders a footer from these numbers and reports page requests
/// through `on_change`; it never slices the rows itself. The owner reacts by
/// supplying a new descriptor (and usually a new page of rows).
pub struct Pagination {
    current: usize,
    page_size: usize,
    total: usize,
    on_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a descriptor. `current` is 1-based and clamps to at least 1;
    /// `page_size` clamps to at least 1.
    pub fn new(current: usize, page_size: usize, total: usize) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
            total,
            on_change: None,
        }
    }

    /// Set the page-change handler.
    pub fn with_on_change(mut self, handler: impl Fn(usize, usize) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Current 1-based page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total row count across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based index of the first row on the current page.
    pub fn start(&self) -> usize {
        (self.current - 1) * self.page_size + 1
    }

    /// 1-based index of the last row on the current page.
    pub fn end(&self) -> usize {
        (self.current * self.page_size).min(self.total)
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current * self.page_size < self.total
    }

    /// Footer summary line.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start(),
            self.end(),
            self.total
        )
    }

    /// Footer page label.
    pub fn page_label(&self) -> String {
        format!("Page {}", self.current)
    }

    pub(super) fn notify(&self, page: usize, size: usize) {
        if let Some(handler) = &self.on_change {
            handler(page, size);
        }
    }
}

impl Clone for Pagination {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            page_size: self.page_size,
            total: self.total,
            on_change: self.on_change.clone(),
        }
    }
}

impl std::fmt::Debug for Pagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("current", &self.current)
            .field("page_size", &self.page_size)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
