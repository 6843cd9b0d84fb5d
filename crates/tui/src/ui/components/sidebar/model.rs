//! Static navigation model: sections, items, and icon resolution.
//!
//! The table is immutable and loaded once; insertion order defines visual
//! order, and the first item of a section is the default navigation target
//! when its header is activated.

/// Identifier of a top-level navigation section.
///
/// Variant order matches [`NAVIGATION`], so a `SectionId` indexes its
/// section directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Issues,
    Explore,
    Dashboards,
    Insights,
    Prevent,
    Settings,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Issues,
        SectionId::Explore,
        SectionId::Dashboards,
        SectionId::Insights,
        SectionId::Prevent,
        SectionId::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Issues => "issues",
            SectionId::Explore => "explore",
            SectionId::Dashboards => "dashboards",
            SectionId::Insights => "insights",
            SectionId::Prevent => "prevent",
            SectionId::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Issues => "Issues",
            SectionId::Explore => "Explore",
            SectionId::Dashboards => "Dashboards",
            SectionId::Insights => "Insights",
            SectionId::Prevent => "Prevent",
            SectionId::Settings => "Settings",
        }
    }
}

/// Closed set of icon identifiers used by sections and items.
///
/// Rendering resolves these through [`glyph`]; an id missing from the
/// glyph table falls back to a neutral placeholder instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Activity,
    AlertCircle,
    AlertTriangle,
    FileText,
    Search,
    BookOpen,
    LayoutDashboard,
    TrendingUp,
    Lightbulb,
    Shield,
    Settings,
    Bot,
    ClipboardList,
}

/// Glyph rendered when an icon id has no table entry.
pub const PLACEHOLDER_GLYPH: &str = "·";

/// Static icon-to-glyph table. Narrow, widely supported symbols only, the
/// same constraint the rest of the UI places on rail glyphs.
const ICON_GLYPHS: &[(IconId, &str)] = &[
    (IconId::Activity, "~"),
    (IconId::AlertCircle, "!"),
    (IconId::AlertTriangle, "^"),
    (IconId::FileText, "≡"),
    (IconId::Search, "⌕"),
    (IconId::BookOpen, "¶"),
    (IconId::LayoutDashboard, "▦"),
    (IconId::TrendingUp, "↗"),
    (IconId::Lightbulb, "○"),
    (IconId::Shield, "◇"),
    (IconId::Settings, "✱"),
    (IconId::Bot, "@"),
    (IconId::ClipboardList, "≣"),
];

/// Resolve an icon to its glyph, if the table knows it.
pub fn glyph(icon: IconId) -> Option<&'static str> {
    ICON_GLYPHS.iter().find(|(id, _)| *id == icon).map(|(_, g)| *g)
}

/// A single navigable destination belonging to one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    /// Path navigated to when the item is selected; unique across all
    /// sections.
    pub url: &'static str,
    pub icon: IconId,
}

/// A top-level navigation group with its ordered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub icon: IconId,
    pub items: &'static [NavItem],
}

impl Section {
    /// Default navigation target when the section header is activated.
    pub fn first_item(&self) -> &'static NavItem {
        &self.items[0]
    }
}

/// The full navigation table, in visual order.
pub const NAVIGATION: &[Section] = &[
    Section {
        id: SectionId::Issues,
        icon: IconId::AlertCircle,
        items: &[
            NavItem {
                title: "Feed",
                url: "/",
                icon: IconId::Activity,
            },
            NavItem {
                title: "AI Incidents",
                url: "/incidents",
                icon: IconId::AlertTriangle,
            },
            NavItem {
                title: "Policy Violations",
                url: "/violations",
                icon: IconId::FileText,
            },
        ],
    },
    Section {
        id: SectionId::Explore,
        icon: IconId::Search,
        items: &[
            NavItem {
                title: "Agent Traces",
                url: "/traces",
                icon: IconId::Activity,
            },
            NavItem {
                title: "Decision Logs",
                url: "/decisions",
                icon: IconId::BookOpen,
            },
        ],
    },
    Section {
        id: SectionId::Dashboards,
        icon: IconId::LayoutDashboard,
        items: &[
            NavItem {
                title: "Reliability",
                url: "/dashboard/reliability",
                icon: IconId::TrendingUp,
            },
            NavItem {
                title: "Risk",
                url: "/dashboard/risk",
                icon: IconId::AlertTriangle,
            },
        ],
    },
    Section {
        id: SectionId::Insights,
        icon: IconId::Lightbulb,
        items: &[
            NavItem {
                title: "Failure Types",
                url: "/insights/failures",
                icon: IconId::AlertCircle,
            },
            NavItem {
                title: "Drift Signals",
                url: "/insights/drift",
                icon: IconId::TrendingUp,
            },
        ],
    },
    Section {
        id: SectionId::Prevent,
        icon: IconId::Shield,
        items: &[
            NavItem {
                title: "AI Policies",
                url: "/policies",
                icon: IconId::FileText,
            },
            NavItem {
                title: "Guardrails",
                url: "/guardrails",
                icon: IconId::Shield,
            },
        ],
    },
    Section {
        id: SectionId::Settings,
        icon: IconId::Settings,
        items: &[
            NavItem {
                title: "Organization",
                url: "/settings",
                icon: IconId::Settings,
            },
            NavItem {
                title: "Models & Prompts",
                url: "/settings/models",
                icon: IconId::Bot,
            },
            NavItem {
                title: "Agents",
                url: "/settings/agents",
                icon: IconId::Bot,
            },
            NavItem {
                title: "Audit Log",
                url: "/settings/audit",
                icon: IconId::ClipboardList,
            },
        ],
    },
];

/// All sections in visual order.
pub fn sections() -> &'static [Section] {
    NAVIGATION
}

/// The section for a given id. Infallible: variant order mirrors the table.
pub fn section(id: SectionId) -> &'static Section {
    &NAVIGATION[id as usize]
}

/// Returns true when `path` addresses `item` under the matching rules: the
/// root item is end-anchored (matches only the exact root), everything
/// else matches by string equality.
fn matches(item: &NavItem, path: &str) -> bool {
    if item.url == "/" {
        path.is_empty() || path == "/"
    } else {
        path == item.url
    }
}

/// The section owning the item addressed by `path`, if any.
pub fn section_of(path: &str) -> Option<&'static Section> {
    NAVIGATION.iter().find(|section| section.items.iter().any(|item| matches(item, path)))
}

/// The item addressed by `path`, if any.
pub fn item_of(path: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().flat_map(|section| section.items.iter()).find(|item| matches(item, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_index_the_table() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(NAVIGATION[i].id, *id);
            assert_eq!(section(*id).id, *id);
        }
        assert_eq!(SectionId::ALL.len(), NAVIGATION.len());
    }

    #[test]
    fn every_section_has_items_and_urls_are_unique() {
        let mut urls = HashSet::new();
        for section in sections() {
            assert!(!section.items.is_empty(), "section {} has no items", section.id.as_str());
            for item in section.items {
                assert!(urls.insert(item.url), "duplicate url {}", item.url);
            }
        }
    }

    #[test]
    fn item_lookup_is_exact_match() {
        assert_eq!(item_of("/guardrails").map(|i| i.title), Some("Guardrails"));
        assert_eq!(section_of("/guardrails").map(|s| s.id), Some(SectionId::Prevent));
        assert!(item_of("/guardrail").is_none());
        assert!(item_of("/guardrails/x").is_none());
    }

    #[test]
    fn root_item_is_end_anchored() {
        assert_eq!(item_of("/").map(|i| i.title), Some("Feed"));
        assert_eq!(item_of("").map(|i| i.title), Some("Feed"));
        // the root must not match as a prefix of deeper paths
        assert_eq!(item_of("/incidents").map(|i| i.title), Some("AI Incidents"));
        assert!(item_of("/unknown").is_none());
    }

    #[test]
    fn first_items_are_section_defaults() {
        assert_eq!(section(SectionId::Issues).first_item().url, "/");
        assert_eq!(section(SectionId::Settings).first_item().url, "/settings");
        assert_eq!(section(SectionId::Prevent).first_item().url, "/policies");
    }

    #[test]
    fn all_icons_resolve_to_glyphs() {
        for section in sections() {
            assert!(glyph(section.icon).is_some());
            for item in section.items {
                assert!(glyph(item.icon).is_some());
            }
        }
    }
}
