use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Aurora palette: deep blue-green surfaces with cold accent tones.
pub const BG: Color = Color::Rgb(0x10, 0x17, 0x1E); // #10171e
pub const SURFACE: Color = Color::Rgb(0x16, 0x1F, 0x29); // #161f29
pub const SURFACE_MUTED: Color = Color::Rgb(0x1F, 0x2B, 0x38); // #1f2b38
pub const BORDER: Color = Color::Rgb(0x2C, 0x3A, 0x49); // #2c3a49

pub const TEXT: Color = Color::Rgb(0xDC, 0xE3, 0xEA); // #dce3ea
pub const TEXT_SECONDARY: Color = Color::Rgb(0x9A, 0xAB, 0xBC); // #9aabbc
pub const TEXT_MUTED: Color = Color::Rgb(0x5E, 0x6F, 0x80); // #5e6f80

pub const TEAL: Color = Color::Rgb(0x2D, 0xD4, 0xBF); // #2dd4bf
pub const SKY: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38bdf8
pub const GREEN: Color = Color::Rgb(0x4A, 0xDE, 0x80); // #4ade80
pub const AMBER: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #fbbf24
pub const RED: Color = Color::Rgb(0xF8, 0x71, 0x71); // #f87171

pub const SELECTION: Color = Color::Rgb(0x24, 0x3B, 0x4D); // #243b4d

/// Default Aurora theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct AuroraTheme {
    roles: ThemeRoles,
}

impl AuroraTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: SURFACE,
                surface_muted: SURFACE_MUTED,
                border: BORDER,

                text: TEXT,
                text_secondary: TEXT_SECONDARY,
                text_muted: TEXT_MUTED,

                accent_primary: TEAL,
                accent_secondary: SKY,

                info: SKY,
                success: GREEN,
                warning: AMBER,
                error: RED,

                selection_bg: SELECTION,
                selection_fg: TEXT,
                focus: TEAL,

                scrollbar_track: BORDER,
                scrollbar_thumb: TEXT_MUTED,
            },
        }
    }
}

impl Default for AuroraTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for AuroraTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Aurora variant: brighter text and hotter accents on a
/// near-black background.
#[derive(Debug, Clone)]
pub struct AuroraThemeHighContrast {
    roles: ThemeRoles,
}

impl AuroraThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = AuroraTheme::new().roles.clone();
        roles.background = Color::Rgb(0x05, 0x08, 0x0C);
        roles.surface = Color::Rgb(0x0A, 0x10, 0x16);
        roles.text = Color::Rgb(0xF5, 0xF9, 0xFC);
        roles.text_secondary = Color::Rgb(0xC2, 0xD2, 0xE0);
        roles.text_muted = Color::Rgb(0x8B, 0x9D, 0xAE);
        roles.focus = SKY;
        Self { roles }
    }
}

impl Default for AuroraThemeHighContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for AuroraThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
