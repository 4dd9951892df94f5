//! Line renderer for the widget node tree.
//!
//! Widgets emit [`Node`] trees of rows and columns of text. This module
//! flattens a tree into styled terminal lines (rows become one line, columns
//! stack) and paints them through crossterm. Named colors resolve against
//! the active theme during layout, so painting only sees concrete colors.

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use joist::node::{Align, Node, Size};
use joist::style::Style;
use joist::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One styled run of text on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One terminal line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    /// The line's text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Flatten a node tree into lines, resolving named colors through `theme`.
pub fn layout_lines(root: &Node, theme: &dyn Theme) -> Vec<Line> {
    let mut lines = flatten(root, &Style::new());
    for line in &mut lines {
        for span in &mut line.spans {
            span.style = span.style.resolved(theme);
        }
    }
    lines
}

fn flatten(node: &Node, inherited: &Style) -> Vec<Line> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text { content, style } => {
            let mut line = Line::default();
            line.push(content.clone(), inherited.merge(style));
            vec![line]
        }
        Node::Row { .. } => vec![flatten_row(node, inherited)],
        Node::Column {
            children,
            style,
            layout,
        } => {
            let base = inherited.merge(style);
            let mut lines = Vec::new();
            let mut first = true;
            for child in children {
                let child_lines = flatten(child, &base);
                if child_lines.is_empty() {
                    continue;
                }
                if !first {
                    for _ in 0..layout.gap {
                        lines.push(Line::default());
                    }
                }
                first = false;
                lines.extend(child_lines);
            }
            if layout.padding > 0 {
                let pad = " ".repeat(layout.padding as usize);
                for line in &mut lines {
                    if !line.spans.is_empty() {
                        line.spans.insert(
                            0,
                            Span {
                                text: pad.clone(),
                                style: base.clone(),
                            },
                        );
                    }
                }
            }
            lines
        }
    }
}

/// Flatten a row node onto a single line.
fn flatten_row(node: &Node, inherited: &Style) -> Line {
    let Node::Row {
        children,
        style,
        layout,
    } = node
    else {
        return Line::default();
    };

    let base = inherited.merge(style);
    let mut line = Line::default();
    if layout.padding > 0 {
        line.push(" ".repeat(layout.padding as usize), base.clone());
    }

    let mut first = true;
    for child in children {
        let spans = inline_spans(child, &base);
        if spans.is_empty() {
            continue;
        }
        if !first && layout.gap > 0 {
            line.push(" ".repeat(layout.gap as usize), base.clone());
        }
        first = false;
        line.spans.extend(spans);
    }

    if layout.padding > 0 {
        line.push(" ".repeat(layout.padding as usize), base.clone());
    }

    if let Size::Fixed(width) = layout.width {
        fit_line(&mut line, width as usize, layout.align, &base);
    }
    line
}

/// Spans a node contributes when inlined into a row. A column inside a row
/// contributes its first line only.
fn inline_spans(node: &Node, inherited: &Style) -> Vec<Span> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text { content, style } => {
            if content.is_empty() {
                Vec::new()
            } else {
                vec![Span {
                    text: content.clone(),
                    style: inherited.merge(style),
                }]
            }
        }
        Node::Row { .. } => flatten_row(node, inherited).spans,
        Node::Column { .. } => flatten(node, inherited)
            .into_iter()
            .next()
            .map(|line| line.spans)
            .unwrap_or_default(),
    }
}

/// Pad or truncate a line to `width` cells.
fn fit_line(line: &mut Line, width: usize, align: Align, pad_style: &Style) {
    let current: usize = line.spans.iter().map(|s| s.text.width()).sum();
    if current > width {
        truncate_line(line, width);
        return;
    }
    let missing = width - current;
    if missing == 0 {
        return;
    }
    let (left, right) = match align {
        Align::Left => (0, missing),
        Align::Right => (missing, 0),
        Align::Center => (missing / 2, missing - missing / 2),
    };
    if left > 0 {
        line.spans.insert(
            0,
            Span {
                text: " ".repeat(left),
                style: pad_style.clone(),
            },
        );
    }
    if right > 0 {
        line.push(" ".repeat(right), pad_style.clone());
    }
}

fn truncate_line(line: &mut Line, width: usize) {
    let mut budget = width;
    let mut kept = Vec::new();
    for span in line.spans.drain(..) {
        if budget == 0 {
            break;
        }
        let text = clip(&span.text, budget);
        budget -= text.width();
        if !text.is_empty() {
            kept.push(Span {
                text,
                style: span.style,
            });
        }
    }
    line.spans = kept;
}

/// Take the longest prefix of `text` that fits in `budget` cells.
fn clip(text: &str, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Paint lines to the terminal, clipping to `width` x `height`.
pub fn paint(out: &mut impl Write, lines: &[Line], width: u16, height: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (y, line) in lines.iter().take(height as usize).enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        let mut budget = width as usize;
        for span in &line.spans {
            if budget == 0 {
                break;
            }
            let text = clip(&span.text, budget);
            if text.is_empty() {
                continue;
            }
            budget -= text.width();
            apply_style(out, &span.style)?;
            queue!(out, Print(&text))?;
            queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
    }
    Ok(())
}

fn apply_style(out: &mut impl Write, style: &Style) -> io::Result<()> {
    if let Some(fg) = &style.fg {
        queue!(out, SetForegroundColor(fg.to_crossterm()))?;
    }
    if let Some(bg) = &style.bg {
        queue!(out, SetBackgroundColor(bg.to_crossterm()))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joist::color::Color;
    use joist::node::Layout;
    use joist::theme::DefaultTheme;

    fn lines_of(node: Node) -> Vec<Line> {
        layout_lines(&node, &DefaultTheme::dark())
    }

    #[test]
    fn test_text_node_is_one_line() {
        let lines = lines_of(Node::text("hello"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "hello");
    }

    #[test]
    fn test_row_joins_children_with_gap() {
        let row = Node::row_styled(
            vec![Node::text("a"), Node::text("b"), Node::text("c")],
            Style::new(),
            Layout::gap(2),
        );
        let lines = lines_of(row);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "a  b  c");
    }

    #[test]
    fn test_column_stacks_with_blank_gap_lines() {
        let column = Node::column_styled(
            vec![Node::text("top"), Node::text("bottom")],
            Style::new(),
            Layout::gap(1),
        );
        let lines = lines_of(column);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "top");
        assert_eq!(lines[1].text(), "");
        assert_eq!(lines[2].text(), "bottom");
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let column = Node::column_styled(
            vec![Node::empty(), Node::text("only")],
            Style::new(),
            Layout::gap(1),
        );
        let lines = lines_of(column);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "only");
    }

    #[test]
    fn test_fixed_width_child_pads() {
        let fixed = Node::Row {
            children: vec![Node::text("ab")],
            style: Style::new(),
            layout: Layout {
                width: Size::Fixed(5),
                ..Layout::default()
            },
        };
        let row = Node::row(vec![fixed, Node::text("|")]);
        let lines = lines_of(row);
        assert_eq!(lines[0].text(), "ab   |");
    }

    #[test]
    fn test_fixed_width_child_truncates() {
        let fixed = Node::Row {
            children: vec![Node::text("abcdef")],
            style: Style::new(),
            layout: Layout {
                width: Size::Fixed(4),
                ..Layout::default()
            },
        };
        let lines = lines_of(Node::row(vec![fixed]));
        assert_eq!(lines[0].text(), "abcd");
    }

    #[test]
    fn test_right_alignment_pads_on_the_left() {
        let fixed = Node::Row {
            children: vec![Node::text("42")],
            style: Style::new(),
            layout: Layout {
                width: Size::Fixed(5),
                align: Align::Right,
                ..Layout::default()
            },
        };
        let lines = lines_of(Node::row(vec![fixed]));
        assert_eq!(lines[0].text(), "   42");
    }

    #[test]
    fn test_styles_inherit_and_resolve() {
        let theme = DefaultTheme::dark();
        let row = Node::row_styled(
            vec![Node::text("plain"), Node::text_styled("hot", Style::new().fg_named("error"))],
            Style::new().fg_named("muted"),
            Layout::default(),
        );
        let lines = layout_lines(&row, &theme);

        // Both spans end up with concrete colors resolved from the theme
        assert_eq!(lines[0].spans[0].style.fg, theme.resolve("muted"));
        assert_eq!(lines[0].spans[1].style.fg, theme.resolve("error"));
        assert!(!matches!(
            lines[0].spans[1].style.fg,
            Some(Color::Named(_))
        ));
    }

    #[test]
    fn test_nested_rows_inline() {
        let inner = Node::row(vec![Node::text("x"), Node::text("y")]);
        let outer = Node::row(vec![Node::text("["), inner, Node::text("]")]);
        let lines = lines_of(outer);
        assert_eq!(lines[0].text(), "[xy]");
    }
}
