//! InputField widget rendering.
//!
//! The field renders as a column of up to three rows: label, the field
//! itself, and a helper/error line. All colors are semantic names resolved
//! by the host against its theme.

use unicode_width::UnicodeWidthStr;

use crate::node::{Layout, Node};
use crate::style::Style;
use crate::validation::ErrorDisplay;

use super::{InputField, InputKind, InputSize, InputVariant};

/// Horizontal padding and minimum text width for a size preset.
fn size_metrics(size: InputSize) -> (u16, usize) {
    match size {
        InputSize::Sm => (1, 16),
        InputSize::Md => (2, 24),
        InputSize::Lg => (3, 32),
    }
}

/// Base style of the field row for a variant, before state overrides.
fn variant_style(variant: InputVariant) -> Style {
    match variant {
        InputVariant::Filled => Style::new().bg_named("surface").fg_named("text"),
        InputVariant::Outlined => Style::new().fg_named("text").underline(),
        InputVariant::Ghost => Style::new().fg_named("text"),
    }
}

/// Pad `text` with trailing spaces up to `min_width` display cells.
fn pad_to(text: &str, min_width: usize) -> String {
    let width = text.width();
    if width >= min_width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(min_width - width))
    }
}

/// Insert the caret glyph at a character position.
fn with_caret(shown: &str, char_index: usize) -> String {
    let mut out = String::with_capacity(shown.len() + '▏'.len_utf8());
    let mut placed = false;
    for (i, c) in shown.chars().enumerate() {
        if i == char_index {
            out.push('▏');
            placed = true;
        }
        out.push(c);
    }
    if !placed {
        out.push('▏');
    }
    out
}

impl InputField {
    /// Build the view tree for this field.
    ///
    /// Rows with nothing to show are omitted. `focused` adds the caret and
    /// the focus accent; a disabled field never shows either.
    pub fn view(&self, focused: bool) -> Node {
        let mut rows = Vec::new();

        if let Some(label) = self.label() {
            let text = if self.is_required() {
                format!("{label} *")
            } else {
                label
            };
            rows.push(Node::text_styled(text, Style::new().fg_named("text").bold()));
        }

        rows.push(self.field_row(focused));

        if let Some(line) = self.below_line() {
            rows.push(line);
        }

        Node::column(rows)
    }

    /// The single-line field row with its affordances.
    fn field_row(&self, focused: bool) -> Node {
        let (padding, min_width) = size_metrics(self.size());
        let disabled = self.is_disabled();
        let active = focused && !disabled;

        let mut style = variant_style(self.variant());
        if disabled {
            style = style.fg_named("text_muted").dim();
        } else if self.is_error_state() {
            style = style.fg_named("error");
        } else if active {
            style = style.fg_named("primary");
        }

        let shown = self.display_value();
        let mut children = Vec::new();
        if shown.is_empty() {
            let placeholder = self.placeholder();
            let text = if active {
                with_caret(&placeholder, 0)
            } else {
                placeholder
            };
            children.push(Node::text_styled(
                pad_to(&text, min_width),
                Style::new().fg_named("text_muted").italic(),
            ));
        } else {
            let text = if active {
                // The mask substitutes one glyph per character, so the char
                // index lines up between the raw and the displayed text
                let char_index = self.value()[..self.cursor()].chars().count();
                with_caret(&shown, char_index)
            } else {
                shown
            };
            children.push(Node::text(pad_to(&text, min_width)));
        }

        if self.clear_visible() {
            children.push(Node::text_styled("✕", Style::new().fg_named("text_muted")));
        }
        if self.kind() == InputKind::Password {
            let toggle = if self.is_value_visible() {
                "[hide]"
            } else {
                "[show]"
            };
            children.push(Node::text_styled(
                toggle,
                Style::new().fg_named("text_muted"),
            ));
        }
        if self.error_display() == ErrorDisplay::Inline
            && let Some(message) = self.error_message()
        {
            children.push(Node::text_styled(message, Style::new().fg_named("error")));
        }

        Node::row_styled(
            children,
            style,
            Layout {
                gap: 1,
                padding,
                ..Layout::default()
            },
        )
    }

    /// Helper or error line below the field; the error wins when both exist.
    fn below_line(&self) -> Option<Node> {
        if self.error_display() == ErrorDisplay::Below
            && let Some(message) = self.error_message()
        {
            return Some(Node::text_styled(message, Style::new().fg_named("error")));
        }
        self.helper_text()
            .map(|text| Node::text_styled(text, Style::new().fg_named("text_muted")))
    }
}
