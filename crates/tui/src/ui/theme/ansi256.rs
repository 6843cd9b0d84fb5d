//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the Aurora palette using indexed colors so the UI remains
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// ANSI 256-color approximation of the Aurora palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(236),
                border: Color::Indexed(238),

                text: Color::Indexed(253),
                text_secondary: Color::Indexed(248),
                text_muted: Color::Indexed(243),

                accent_primary: Color::Indexed(80),
                accent_secondary: Color::Indexed(75),

                info: Color::Indexed(75),
                success: Color::Indexed(84),
                warning: Color::Indexed(214),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(237),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(80),

                scrollbar_track: Color::Indexed(238),
                scrollbar_thumb: Color::Indexed(243),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
