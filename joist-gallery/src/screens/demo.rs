//! Combined demo screen wiring both widgets together.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use joist::events::WidgetEvents;
use joist::keys::{Key, KeyCombo};
use joist::node::{Layout, Node};
use joist::selection::SelectionMode;
use joist::style::Style;
use joist::widgets::{DataTable, InputField, InputKind, Pagination};

use crate::data::{User, sample_users, user_columns};

const PAGE_SIZE: usize = 3;
const LOADING_FOR: Duration = Duration::from_secs(3);

/// What the demo screen wants the host loop to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    /// Return to the catalog.
    Back,
    /// Nothing to do.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoFocus {
    Name,
    Password,
    Table,
}

impl DemoFocus {
    fn next(self) -> Self {
        match self {
            DemoFocus::Name => DemoFocus::Password,
            DemoFocus::Password => DemoFocus::Table,
            DemoFocus::Table => DemoFocus::Name,
        }
    }
}

fn pagination_for(page: usize, total: usize, slot: &Arc<Mutex<Option<usize>>>) -> Pagination {
    let slot = Arc::clone(slot);
    Pagination::new(page, PAGE_SIZE, total).with_on_change(move |page, _| {
        if let Ok(mut g) = slot.lock() {
            *g = Some(page);
        }
    })
}

/// A small form over a paged user table.
///
/// The table itself never pages; requests from its footer land in
/// `page_request` and this screen slices the backing data. Loading is a
/// timed flag cleared by [`DemoScreen::tick`].
pub struct DemoScreen {
    name: InputField,
    password: InputField,
    table: DataTable<User>,
    users: Vec<User>,
    page_request: Arc<Mutex<Option<usize>>>,
    loading_until: Option<Instant>,
    focus: DemoFocus,
}

impl DemoScreen {
    pub fn new() -> Self {
        let users = sample_users();
        let page_request: Arc<Mutex<Option<usize>>> = Arc::new(Mutex::new(None));

        let first_page: Vec<User> = users.iter().take(PAGE_SIZE).cloned().collect();
        let table = DataTable::with_rows(user_columns(), first_page)
            .with_selection_mode(SelectionMode::Multiple)
            .with_pagination(pagination_for(1, users.len(), &page_request));
        table.cursor_first();

        Self {
            name: InputField::with_placeholder("Enter your name").with_label("Name"),
            password: InputField::with_placeholder("Enter password")
                .with_label("Password")
                .with_kind(InputKind::Password),
            table,
            users,
            page_request,
            loading_until: None,
            focus: DemoFocus::Name,
        }
    }

    /// Clear the loading flag once its deadline passes.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.loading_until
            && Instant::now() >= deadline
        {
            self.table.set_loading(false);
            self.loading_until = None;
        }
    }

    /// Poll timeout for the host loop, shortened while loading so the
    /// deadline lands on time.
    pub fn poll_timeout(&self) -> Duration {
        let default = Duration::from_millis(250);
        match self.loading_until {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(default),
            None => default,
        }
    }

    fn start_loading(&mut self) {
        self.table.set_loading(true);
        self.loading_until = Some(Instant::now() + LOADING_FOR);
    }

    /// Slice the backing data for a requested page and rebuild the footer
    /// descriptor to match.
    fn load_page(&mut self, page: usize) {
        let start = (page - 1) * PAGE_SIZE;
        let rows: Vec<User> = self.users.iter().skip(start).take(PAGE_SIZE).cloned().collect();
        self.table.set_rows(rows);
        self.table
            .set_pagination(Some(pagination_for(page, self.users.len(), &self.page_request)));
    }

    pub fn on_key(&mut self, key: &KeyCombo) -> DemoAction {
        if key.key == Key::Escape && key.modifiers.none() {
            return DemoAction::Back;
        }
        if key.key == Key::Tab && key.modifiers.none() {
            self.focus = self.focus.next();
            return DemoAction::Continue;
        }
        if key.key == Key::Char('l') && key.modifiers.ctrl {
            self.start_loading();
            return DemoAction::Continue;
        }

        match self.focus {
            DemoFocus::Name => {
                self.name.on_key(key);
            }
            DemoFocus::Password => {
                self.password.on_key(key);
            }
            DemoFocus::Table => {
                self.table.on_key(key);
                let requested = self.page_request.lock().ok().and_then(|mut g| g.take());
                if let Some(page) = requested {
                    self.load_page(page);
                }
            }
        }

        DemoAction::Continue
    }

    pub fn view(&self) -> Node {
        let selected = self.table.selected_rows();
        let banner = if selected.is_empty() {
            Node::empty()
        } else {
            let names: Vec<String> = selected.iter().map(|u| u.name.clone()).collect();
            Node::text_styled(
                format!("Selected {} row(s): {}", selected.len(), names.join(", ")),
                Style::new().fg_named("primary").bold(),
            )
        };

        let footer = Node::row_styled(
            vec![
                hint("tab", "focus"),
                hint("space", "select"),
                hint("ctrl+a", "select all"),
                hint("ctrl+l", "load"),
                hint("esc", "back"),
            ],
            Style::new(),
            Layout::gap(3),
        );

        Node::column_styled(
            vec![
                Node::text_styled("Widget Demo", Style::new().bold().fg_named("primary")),
                self.name.view(self.focus == DemoFocus::Name),
                self.password.view(self.focus == DemoFocus::Password),
                banner,
                self.table.view(self.focus == DemoFocus::Table),
                footer,
            ],
            Style::new(),
            Layout {
                gap: 1,
                padding: 1,
                ..Layout::default()
            },
        )
    }
}

fn hint(key: &str, action: &str) -> Node {
    Node::row_styled(
        vec![
            Node::text_styled(key, Style::new().fg_named("primary")),
            Node::text_styled(action, Style::new().fg_named("muted")),
        ],
        Style::new(),
        Layout::gap(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_slices_the_backing_data() {
        let mut demo = DemoScreen::new();
        demo.focus = DemoFocus::Table;

        demo.on_key(&KeyCombo::key(Key::Right));

        let rows = demo.table.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Alice Brown");
        let pagination = demo.table.pagination().unwrap();
        assert_eq!(pagination.current(), 2);
    }

    #[test]
    fn paging_back_restores_the_first_page() {
        let mut demo = DemoScreen::new();
        demo.focus = DemoFocus::Table;

        demo.on_key(&KeyCombo::key(Key::Right));
        demo.on_key(&KeyCombo::key(Key::Left));

        let rows = demo.table.rows();
        assert_eq!(rows[0].name, "John Doe");
        assert_eq!(demo.table.pagination().unwrap().current(), 1);
    }

    #[test]
    fn selection_shows_the_banner() {
        let mut demo = DemoScreen::new();
        demo.focus = DemoFocus::Table;

        demo.on_key(&KeyCombo::key(Key::Char(' ')));

        assert!(demo.view().contains_text("Selected 1 row(s): John Doe"));
    }

    #[test]
    fn loading_clears_after_its_deadline() {
        let mut demo = DemoScreen::new();
        demo.on_key(&KeyCombo::key(Key::Char('l')).ctrl());
        assert!(demo.table.is_loading());

        demo.loading_until = Some(Instant::now());
        demo.tick();
        assert!(!demo.table.is_loading());
        assert!(demo.loading_until.is_none());
    }

    #[test]
    fn tab_cycles_focus_back_to_the_name_field() {
        let mut demo = DemoScreen::new();
        for _ in 0..3 {
            demo.on_key(&KeyCombo::key(Key::Tab));
        }
        assert_eq!(demo.focus, DemoFocus::Name);
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut demo = DemoScreen::new();
        demo.on_key(&KeyCombo::key(Key::Char('A')));
        demo.on_key(&KeyCombo::key(Key::Tab));
        demo.on_key(&KeyCombo::key(Key::Char('x')));

        assert_eq!(demo.name.value(), "A");
        assert_eq!(demo.password.value(), "x");
        assert!(demo.view().contains_text("•"));
    }
}
