use super::{Ansi256Theme, AuroraTheme, AuroraThemeHighContrast, Theme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Indicates whether the definition represents a high-contrast variant.
    pub is_high_contrast: bool,
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes surfaced by the loader and the
/// runtime theme cycle.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "aurora",
        label: "Aurora",
        aliases: &["aurora", "default"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Box::new(AuroraTheme::new()),
    },
    ThemeDefinition {
        id: "aurora-high-contrast",
        label: "Aurora High Contrast",
        aliases: &["aurora-hc", "high-contrast"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Box::new(AuroraThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi",
        label: "ANSI Fallback",
        aliases: &["ansi256", "256"],
        is_high_contrast: false,
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// All selectable definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Resolve a theme by id or alias, case-insensitively.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Default truecolor theme.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Fallback definition for 8-bit terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

/// The next truecolor theme after `id`, wrapping around. Used by the
/// runtime theme cycle; the ANSI fallback is excluded because it is chosen
/// by capability, not preference.
pub fn next_truecolor_after(id: &str) -> &'static ThemeDefinition {
    let cycle: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS.iter().filter(|d| !d.is_ansi_fallback).collect();
    let position = cycle.iter().position(|d| d.id.eq_ignore_ascii_case(id));
    match position {
        Some(i) => cycle[(i + 1) % cycle.len()],
        None => cycle[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_ids_and_aliases() {
        assert_eq!(resolve("aurora").map(|d| d.id), Some("aurora"));
        assert_eq!(resolve("AURORA").map(|d| d.id), Some("aurora"));
        assert_eq!(resolve("high-contrast").map(|d| d.id), Some("aurora-high-contrast"));
        assert_eq!(resolve("256").map(|d| d.id), Some("ansi"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn cycle_skips_the_ansi_fallback() {
        assert_eq!(next_truecolor_after("aurora").id, "aurora-high-contrast");
        assert_eq!(next_truecolor_after("aurora-high-contrast").id, "aurora");
        // unknown ids restart the cycle
        assert_eq!(next_truecolor_after("ansi").id, "aurora");
    }

    #[test]
    fn definitions_have_unique_ids() {
        let mut ids: Vec<_> = THEME_DEFINITIONS.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), THEME_DEFINITIONS.len());
    }
}
