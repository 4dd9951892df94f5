use crate::style::Style;

/// Content alignment inside a fixed-width slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    /// Fixed size in cells
    Fixed(u16),
    /// Fill the available space
    Fill,
    /// Auto size based on content
    #[default]
    Auto,
}

/// Layout properties for a container node
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Gap between children (cells for rows, blank lines for columns)
    pub gap: u16,
    /// Horizontal padding
    pub padding: u16,
    /// Content alignment within a fixed width
    pub align: Align,
}

impl Layout {
    /// Layout with a gap between children
    pub fn gap(gap: u16) -> Self {
        Self {
            gap,
            ..Self::default()
        }
    }

    /// Layout with horizontal padding
    pub fn padded(padding: u16) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }
}

/// A node in the view tree widgets emit.
///
/// Widgets describe their output as a tree of text spans; the host decides
/// how to put it on screen.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a column node with style and layout
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Collect all text content in the tree, depth first.
    ///
    /// Row children join without separators; columns concatenate. Mostly
    /// useful for assertions and for hosts that only need the raw text.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text { content, .. } => content.clone(),
            Self::Row { children, .. } | Self::Column { children, .. } => {
                children.iter().map(Node::plain_text).collect()
            }
        }
    }

    /// Check whether any text node in the tree contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Self::Empty => false,
            Self::Text { content, .. } => content.contains(needle),
            Self::Row { children, .. } | Self::Column { children, .. } => {
                children.iter().any(|c| c.contains_text(needle))
            }
        }
    }
}
