//! Route matching for sidebar highlighting and pin synchronization.

use super::model::{self, SectionId};

/// Section to fall back to when no item matches the current route.
pub const DEFAULT_SECTION: SectionId = SectionId::Issues;

/// The section owning the item whose url equals `path`.
///
/// Matching is exact; the root item additionally matches the empty path
/// and never matches as a prefix of deeper paths. An unmatched path is a
/// valid, expected outcome (detail pages, not-found) and returns `None`.
pub fn matched_section(path: &str) -> Option<SectionId> {
    model::section_of(path).map(|section| section.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_url_maps_to_its_owning_section() {
        for section in model::sections() {
            for item in section.items {
                assert_eq!(matched_section(item.url), Some(section.id), "url {}", item.url);
            }
        }
    }

    #[test]
    fn unmatched_paths_return_none() {
        assert_eq!(matched_section("/incident/INC-0001"), None);
        assert_eq!(matched_section("/trace/trace-000001"), None);
        assert_eq!(matched_section("/nope"), None);
    }

    #[test]
    fn root_matches_only_the_root() {
        assert_eq!(matched_section("/"), Some(SectionId::Issues));
        assert_eq!(matched_section(""), Some(SectionId::Issues));
        assert_eq!(matched_section("/dashboard/risk"), Some(SectionId::Dashboards));
    }
}
