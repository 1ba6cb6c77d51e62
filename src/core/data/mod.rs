//! Static page content. Loaded once, never mutated.

mod features;
mod footer;
mod integrations;
mod process;
mod questions;
mod site;

pub use features::{ADDITIONAL_FEATURES, CORE_FEATURES};
pub use footer::{COMPANY_INFO, CONTACT_INFO, FOOTER_SECTIONS, SOCIAL_LINKS};
pub use integrations::ALL_INTEGRATIONS;
pub use process::IMPLEMENTATION_STEPS;
pub use questions::SAMPLE_QUESTIONS;
pub use site::*;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique<'a>(ids: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn test_ids_unique_within_lists() {
        assert_unique(CORE_FEATURES.iter().map(|f| f.id));
        assert_unique(ADDITIONAL_FEATURES.iter().map(|f| f.id));
        assert_unique(IMPLEMENTATION_STEPS.iter().map(|s| s.id));
        assert_unique(SAMPLE_QUESTIONS.iter().map(|q| q.id));
        assert_unique(ALL_INTEGRATIONS.iter().map(|i| i.id));
        assert_unique(FOOTER_SECTIONS.iter().map(|s| s.id));
        assert_unique(NAVIGATION_ITEMS.iter().map(|n| n.id));
        for section in FOOTER_SECTIONS {
            assert_unique(section.links.iter().map(|l| l.id));
        }
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(CORE_FEATURES.len(), 4);
        assert_eq!(ADDITIONAL_FEATURES.len(), 8);
        assert_eq!(IMPLEMENTATION_STEPS.len(), 4);
        assert_eq!(SAMPLE_QUESTIONS.len(), 8);
        assert_eq!(FOOTER_SECTIONS.len(), 4);
        assert_eq!(HERO_METRICS.len(), 3);
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        for (i, step) in IMPLEMENTATION_STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
        }
    }

    #[test]
    fn test_navigation_hrefs_point_at_their_ids() {
        for item in NAVIGATION_ITEMS {
            assert_eq!(item.href, format!("#{}", item.id));
        }
    }

    #[test]
    fn test_contact_and_company() {
        assert_eq!(CONTACT_INFO.locality(), "Austin, TX 78701");
        assert_eq!(CONTACT_INFO.tel_href(), "tel:+15551234567");
        assert_eq!(COMPANY_INFO.name, "JIRA Bot Solutions");
        assert_eq!(SOCIAL_LINKS.len(), 3);
    }
}
