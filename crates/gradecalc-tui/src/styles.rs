//! TUI styles and light/dark color themes.

use ratatui::style::{Color, Modifier, Style};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// The other theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorTheme {
        match self {
            ThemeKind::Dark => ColorTheme::dark(),
            ThemeKind::Light => ColorTheme::light(),
        }
    }
}

/// Color theme for the TUI.
pub struct ColorTheme {
    pub background: Color,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub selection: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorTheme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            selection: Color::Blue,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::White,
            primary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,
            text: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            selection: Color::LightCyan,
        }
    }

    /// Base style for the whole screen.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for success text.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Key hints in the footer.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// The cell under the cursor.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// The cell being edited.
    #[must_use]
    pub fn editing_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
