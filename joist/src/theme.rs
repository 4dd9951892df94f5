//! Theme support.
//!
//! Widgets never pick concrete colors: they emit `Color::Named` references
//! to semantic buckets (`"text"`, `"surface"`, `"error"`, ...) and the host
//! resolves those against the active theme at paint time.

use crate::color::Color;

/// Trait for theme types that can resolve named colors.
pub trait Theme: Send + Sync + 'static {
    /// Resolve a named color to its actual color value.
    ///
    /// Returns `None` if the color name is not defined in this theme.
    fn resolve(&self, name: &str) -> Option<Color>;

    /// Get all color names defined in this theme.
    fn color_names(&self) -> Vec<&'static str>;

    /// Clone this theme into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Theme>;
}

impl Clone for Box<dyn Theme> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The built-in theme with standard color definitions.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        Self {
            primary: Color::oklch(0.6, 0.15, 250.0),
            secondary: Color::oklch(0.7, 0.1, 200.0),
            background: Color::oklch(0.15, 0.02, 250.0),
            surface: Color::oklch(0.2, 0.02, 250.0),
            text: Color::oklch(0.9, 0.02, 250.0),
            text_muted: Color::oklch(0.6, 0.02, 250.0),
            border: Color::oklch(0.4, 0.02, 250.0),
            error: Color::oklch(0.6, 0.2, 25.0),
            success: Color::oklch(0.6, 0.15, 145.0),
            warning: Color::oklch(0.7, 0.15, 85.0),
            info: Color::oklch(0.7, 0.1, 220.0),
        }
    }

    /// Create a light theme variant.
    pub fn light() -> Self {
        Self {
            primary: Color::oklch(0.5, 0.18, 250.0),
            secondary: Color::oklch(0.55, 0.12, 200.0),
            background: Color::oklch(0.97, 0.01, 250.0),
            surface: Color::oklch(0.92, 0.01, 250.0),
            text: Color::oklch(0.2, 0.02, 250.0),
            text_muted: Color::oklch(0.5, 0.02, 250.0),
            border: Color::oklch(0.7, 0.02, 250.0),
            error: Color::oklch(0.5, 0.2, 25.0),
            success: Color::oklch(0.5, 0.15, 145.0),
            warning: Color::oklch(0.6, 0.15, 85.0),
            info: Color::oklch(0.55, 0.1, 220.0),
        }
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "primary" => Some(self.primary.clone()),
            "secondary" => Some(self.secondary.clone()),
            "background" => Some(self.background.clone()),
            "surface" => Some(self.surface.clone()),
            "text" => Some(self.text.clone()),
            "text_muted" => Some(self.text_muted.clone()),
            "border" => Some(self.border.clone()),
            "error" => Some(self.error.clone()),
            "success" => Some(self.success.clone()),
            "warning" => Some(self.warning.clone()),
            "info" => Some(self.info.clone()),
            // Common aliases
            "fg" => Some(self.text.clone()),
            "bg" => Some(self.background.clone()),
            "muted" => Some(self.text_muted.clone()),
            "danger" => Some(self.error.clone()),
            // Basic color names
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "gray" | "grey" => Some(Color::BrightBlack),
            _ => None,
        }
    }

    fn color_names(&self) -> Vec<&'static str> {
        vec![
            "primary",
            "secondary",
            "background",
            "surface",
            "text",
            "text_muted",
            "border",
            "error",
            "success",
            "warning",
            "info",
            "fg",
            "bg",
            "muted",
            "danger",
            "black",
            "red",
            "green",
            "yellow",
            "blue",
            "magenta",
            "cyan",
            "white",
            "gray",
            "grey",
        ]
    }

    fn clone_box(&self) -> Box<dyn Theme> {
        Box::new(self.clone())
    }
}

/// Resolve a color to a concrete value, looking up named colors in the theme.
///
/// Unknown names log a warning and fall back to the terminal default.
pub fn resolve_color(theme: &dyn Theme, color: &Color) -> Color {
    match color {
        Color::Named(name) => theme.resolve(name).unwrap_or_else(|| {
            log::warn!("Unknown theme color '{}', using terminal default", name);
            Color::Reset
        }),
        concrete => concrete.clone(),
    }
}
