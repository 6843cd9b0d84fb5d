//! Theme styling module for the TUI UI layer.
//!
//! Defines the Aurora palette and its high-contrast variant, an ANSI
//! 256-color fallback, semantic theme roles, and helper builders for
//! Ratatui widgets and styles. Prefer these helpers over hard-coding
//! colors to keep the UI consistent.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod aurora;
pub mod catalog;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use aurora::{AuroraTheme, AuroraThemeHighContrast};
pub use catalog::ThemeDefinition;
pub use roles::Theme;

/// Environment variable naming the preferred theme id or alias.
pub const THEME_ENV: &str = "SAMIX_THEME";

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables, persisted preferences,
/// and terminal capabilities.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

/// Returns `true` when the terminal supports truecolor output, which also
/// gates the runtime theme cycle.
pub fn supports_truecolor() -> bool {
    matches!(detect_color_capability(), ColorCapability::Truecolor)
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("SAMIX_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parsing() {
        assert_eq!(parse_color_mode("truecolor"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("24BIT"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("256"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("plaid"), None);
    }
}
