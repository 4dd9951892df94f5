use crate::color::Color;
use crate::theme::Theme;

/// Text styling for view nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    /// Set foreground color
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set foreground to a named theme color
    pub fn fg_named(self, name: impl Into<String>) -> Self {
        self.fg(Color::Named(name.into()))
    }

    /// Set background to a named theme color
    pub fn bg_named(self, name: impl Into<String>) -> Self {
        self.bg(Color::Named(name.into()))
    }

    /// Set bold
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set dim
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Overlay another style on top of this one. Colors and flags set on
    /// `other` win; unset fields keep this style's values.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.clone().or_else(|| self.fg.clone()),
            bg: other.bg.clone().or_else(|| self.bg.clone()),
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
        }
    }

    /// Resolve any named colors against a theme, leaving concrete colors
    /// untouched.
    pub fn resolved(&self, theme: &dyn Theme) -> Style {
        Style {
            fg: self
                .fg
                .as_ref()
                .map(|c| crate::theme::resolve_color(theme, c)),
            bg: self
                .bg
                .as_ref()
                .map(|c| crate::theme::resolve_color(theme, c)),
            ..self.clone()
        }
    }
}
