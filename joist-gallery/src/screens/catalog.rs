//! Story catalog with fuzzy search.

use std::sync::{Arc, Mutex};

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use joist::events::{EventResult, WidgetEvents};
use joist::keys::{Key, KeyCombo};
use joist::node::{Layout, Node};
use joist::style::Style;
use joist::widgets::{Column, DataTable, InputField, RowKey};

use crate::stories::{StoryRegistration, registered_stories};

/// What the catalog wants the host loop to do after a key.
pub enum CatalogAction {
    /// Open the story with this registry key.
    Open(&'static StoryRegistration),
    /// Open the combined demo screen.
    OpenDemo,
    /// Quit the gallery.
    Quit,
    /// Nothing to do.
    Continue,
}

/// A catalog row backing the story table.
#[derive(Clone)]
struct StoryRow {
    key: String,
    component: String,
    name: String,
    description: String,
}

impl StoryRow {
    fn from_registration(reg: &StoryRegistration) -> Self {
        Self {
            key: reg.key(),
            component: reg.component.to_string(),
            name: reg.name.to_string(),
            description: reg.description.to_string(),
        }
    }
}

fn story_columns() -> Vec<Column<StoryRow>> {
    vec![
        Column::new("component", "Component", |r: &StoryRow| {
            r.component.clone().into()
        })
        .sortable()
        .width(12),
        Column::new("name", "Story", |r: &StoryRow| r.name.clone().into())
            .sortable()
            .width(18),
        Column::new("description", "Description", |r: &StoryRow| {
            r.description.clone().into()
        }),
    ]
}

/// Rank stories against a query, best match first.
///
/// An empty query keeps the registry order. Matching runs over
/// "component name" so either part of the key can be typed.
fn fuzzy_rank(query: &str, stories: &[&'static StoryRegistration]) -> Vec<usize> {
    if query.is_empty() {
        return (0..stories.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<(usize, u32)> = stories
        .iter()
        .enumerate()
        .filter_map(|(index, reg)| {
            let haystack = format!("{} {}", reg.component, reg.name);
            let mut buf = Vec::new();
            let score = pattern.score(Utf32Str::new(&haystack, &mut buf), &mut matcher)?;
            Some((index, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.into_iter().map(|(index, _)| index).collect()
}

/// The landing screen: a filter field over the story registry.
pub struct CatalogScreen {
    filter: InputField,
    stories: Vec<&'static StoryRegistration>,
    table: DataTable<StoryRow>,
    opened: Arc<Mutex<Option<String>>>,
    filter_focused: bool,
}

impl CatalogScreen {
    pub fn new() -> Self {
        let stories = registered_stories();
        let rows: Vec<StoryRow> = stories
            .iter()
            .map(|reg| StoryRow::from_registration(reg))
            .collect();

        let opened: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&opened);
        let table = DataTable::with_rows(story_columns(), rows)
            .with_row_key(RowKey::derived(|row: &StoryRow, _| row.key.clone()))
            .with_empty_text("No stories match the filter")
            .with_on_row_click(move |row, _| {
                if let Ok(mut g) = slot.lock() {
                    *g = Some(row.key.clone());
                }
            });
        table.cursor_first();

        Self {
            filter: InputField::with_placeholder("Search stories...").with_clear_button(),
            stories,
            table,
            opened,
            filter_focused: true,
        }
    }

    /// Re-rank the table rows from the current filter text.
    fn refresh(&self) {
        let query = self.filter.value();
        let ranked = fuzzy_rank(&query, &self.stories);
        let rows: Vec<StoryRow> = ranked
            .into_iter()
            .map(|i| StoryRow::from_registration(self.stories[i]))
            .collect();
        self.table.set_rows(rows);
        if !self.table.is_empty() {
            self.table.cursor_first();
        }
    }

    fn registration_for(&self, key: &str) -> Option<&'static StoryRegistration> {
        self.stories.iter().find(|reg| reg.key() == key).copied()
    }

    pub fn on_key(&mut self, key: &KeyCombo) -> CatalogAction {
        if key.key == Key::Escape && key.modifiers.none() {
            return CatalogAction::Quit;
        }
        if key.key == Key::Char('d') && key.modifiers.ctrl {
            return CatalogAction::OpenDemo;
        }
        if key.key == Key::Tab && key.modifiers.none() {
            self.filter_focused = !self.filter_focused;
            return CatalogAction::Continue;
        }

        if self.filter_focused && self.filter.on_key(key) == EventResult::Consumed {
            self.refresh();
            return CatalogAction::Continue;
        }

        // Arrows, Enter and selection keys reach the table from either focus
        if self.table.on_key(key) == EventResult::Consumed {
            if let Some(opened) = self.opened.lock().ok().and_then(|mut g| g.take())
                && let Some(reg) = self.registration_for(&opened)
            {
                return CatalogAction::Open(reg);
            }
            return CatalogAction::Continue;
        }

        if !self.filter_focused && key.key == Key::Char('s') && key.modifiers.none() {
            self.table.toggle_sort("name");
        }

        CatalogAction::Continue
    }

    pub fn view(&self) -> Node {
        let header = Node::row_styled(
            vec![
                Node::text_styled("Joist Gallery", Style::new().bold().fg_named("primary")),
                Node::text_styled(
                    format!("{} stories", self.table.len()),
                    Style::new().fg_named("muted"),
                ),
            ],
            Style::new(),
            Layout::gap(2),
        );

        let footer = Node::row_styled(
            vec![
                hint("tab", "focus"),
                hint("enter", "open"),
                hint("s", "sort"),
                hint("ctrl+d", "demo"),
                hint("esc", "quit"),
            ],
            Style::new(),
            Layout::gap(3),
        );

        Node::column_styled(
            vec![
                header,
                self.filter.view(self.filter_focused),
                self.table.view(!self.filter_focused),
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
