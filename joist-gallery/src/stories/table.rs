//! DataTable stories.

use std::sync::{Arc, Mutex};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::KeyCombo;
use joist::node::Node;
use joist::selection::SelectionMode;
use joist::widgets::{DataTable, Pagination, RowKey};

use crate::data::{User, product_columns, sample_products, sample_users, user_columns};

use super::{StoryRegistration, StoryView};

fn story_users() -> Vec<User> {
    sample_users().into_iter().take(5).collect()
}

/// A table story with a selection banner in the status line.
struct TableStory<T: Clone + Send + Sync + 'static> {
    table: DataTable<T>,
    summarize: fn(&T) -> String,
}

impl<T: Clone + Send + Sync + 'static> TableStory<T> {
    fn new(table: DataTable<T>, summarize: fn(&T) -> String) -> Box<dyn StoryView> {
        let table = table.with_on_row_select(move |rows: &[T]| {
            log::debug!("selection changed: {} row(s)", rows.len());
        });
        Box::new(Self { table, summarize })
    }
}

impl<T: Clone + Send + Sync + 'static> StoryView for TableStory<T> {
    fn view(&self, focused: bool) -> Node {
        self.table.view(focused)
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.table.on_key(key)
    }

    fn status(&self) -> Option<String> {
        let rows = self.table.selected_rows();
        if rows.is_empty() {
            return None;
        }
        let names: Vec<String> = rows.iter().map(|r| (self.summarize)(r)).collect();
        Some(format!(
            "Selected {} row(s): {}",
            rows.len(),
            names.join(", ")
        ))
    }
}

/// Row activation demo; the status line shows the last activated row.
struct ClickTableStory {
    table: DataTable<User>,
    last: Arc<Mutex<Option<String>>>,
}

impl ClickTableStory {
    fn new() -> Box<dyn StoryView> {
        let last: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&last);
        let table =
            DataTable::with_rows(user_columns(), story_users()).with_on_row_click(move |user, index| {
                log::info!("row clicked: {} at {index}", user.name);
                if let Ok(mut g) = slot.lock() {
                    *g = Some(format!("Activated {} (row {index})", user.name));
                }
            });
        Box::new(Self { table, last })
    }
}

impl StoryView for ClickTableStory {
    fn view(&self, focused: bool) -> Node {
        self.table.view(focused)
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.table.on_key(key)
    }

    fn status(&self) -> Option<String> {
        self.last
            .lock()
            .ok()
            .and_then(|g| g.clone())
            .or_else(|| Some("Press Enter on a row to activate it".to_string()))
    }
}

/// Display-only pagination demo; page requests land in the status line
/// instead of changing the rows.
struct PagedTableStory {
    table: DataTable<User>,
    requested: Arc<Mutex<Option<(usize, usize)>>>,
}

impl PagedTableStory {
    fn new() -> Box<dyn StoryView> {
        let requested: Arc<Mutex<Option<(usize, usize)>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&requested);
        let users = story_users();
        let total = users.len();
        let page: Vec<User> = users.into_iter().take(2).collect();
        let table = DataTable::with_rows(user_columns(), page).with_pagination(
            Pagination::new(1, 2, total).with_on_change(move |page, size| {
                log::info!("page requested: {page} (size {size})");
                if let Ok(mut g) = slot.lock() {
                    *g = Some((page, size));
                }
            }),
        );
        Box::new(Self { table, requested })
    }
}

impl StoryView for PagedTableStory {
    fn view(&self, focused: bool) -> Node {
        self.table.view(focused)
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.table.on_key(key)
    }

    fn status(&self) -> Option<String> {
        match self.requested.lock().ok().and_then(|g| *g) {
            Some((page, size)) => Some(format!(
                "Requested page {page} (size {size}); the owner decides what to load"
            )),
            None => Some("Left/Right request pages; rows never change here".to_string()),
        }
    }
}

inventory::submit! {
    StoryRegistration::new("DataTable", "Default", "Sortable user table", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), story_users()),
            |u| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "WithSelection", "Multiple selection with select-all", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), story_users())
                .with_selection_mode(SelectionMode::Multiple),
            |u| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "SingleSelection", "Radio-style selection", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), story_users())
                .with_selection_mode(SelectionMode::Single),
            |u| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "Loading", "Loading state replaces the table", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), Vec::new()).with_loading(true),
            |u: &User| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "Empty", "Empty state with custom text", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), Vec::new()).with_empty_text("No users found"),
            |u: &User| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "Products", "Custom cell renderers", || {
        TableStory::new(
            DataTable::with_rows(product_columns(), sample_products())
                .with_selection_mode(SelectionMode::Multiple),
            |p| p.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "WithRowClick", "Row activation callback", ClickTableStory::new)
}

inventory::submit! {
    StoryRegistration::new("DataTable", "WithPagination", "Display-only pagination footer", PagedTableStory::new)
}

inventory::submit! {
    StoryRegistration::new("DataTable", "CustomEmptyText", "Custom empty and loading texts", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), Vec::new())
                .with_empty_text("No users available at the moment")
                .with_loading_text("Fetching users..."),
            |u: &User| u.name.clone(),
        )
    })
}

inventory::submit! {
    StoryRegistration::new("DataTable", "WithCustomRowKey", "Rows keyed by email", || {
        TableStory::new(
            DataTable::with_rows(user_columns(), story_users())
                .with_selection_mode(SelectionMode::Multiple)
                .with_row_key(RowKey::Field("email".to_string())),
            |u| u.name.clone(),
        )
    })
}
