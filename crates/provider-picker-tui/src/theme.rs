use provider_catalog::ColorScheme;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_error: Color,
    pub status_warning: Color,
    pub status_success: Color,

    // Cursor / selection colors
    pub active_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Pick the theme variant matching the configured color scheme.
    /// The same scheme keys the provider logo asset resolution.
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::FUCHSIA.c500,

            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_success: tailwind::EMERALD.c400,

            active_fg: tailwind::AMBER.c200,
            selected_bg: tailwind::FUCHSIA.c600,
            selected_fg: Color::White,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c50,
            bg_secondary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c600,
            accent_secondary: tailwind::FUCHSIA.c600,

            status_error: tailwind::RED.c600,
            status_warning: tailwind::AMBER.c600,
            status_success: tailwind::EMERALD.c600,

            active_fg: tailwind::AMBER.c700,
            selected_bg: tailwind::FUCHSIA.c500,
            selected_fg: Color::White,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for channel section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g. "Enter" in "Press Enter to...")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor
    pub fn cursor_row(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.bg_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the accepted provider's row
    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
