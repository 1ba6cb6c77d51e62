//! Filtering and summary helpers for the integration showcase.

use derive_more::Display;

use super::content::{Integration, IntegrationCategory, IntegrationStatus};

/// Number of capabilities listed on a card before collapsing into "+N more".
pub const CAPABILITY_PREVIEW_LEN: usize = 3;

/// Category chip selected above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum IntegrationFilter {
    #[default]
    #[display("All Integrations")]
    All,
    #[display("{}", _0.title())]
    Category(IntegrationCategory),
}

impl IntegrationFilter {
    pub fn matches(&self, integration: &Integration) -> bool {
        match self {
            IntegrationFilter::All => true,
            IntegrationFilter::Category(category) => integration.category == *category,
        }
    }

    /// Stable key for list rendering.
    pub fn key(&self) -> String {
        match self {
            IntegrationFilter::All => "all".to_string(),
            IntegrationFilter::Category(category) => category.to_string(),
        }
    }
}

/// Distinct categories in first-seen order.
pub fn categories_in_order(integrations: &[Integration]) -> Vec<IntegrationCategory> {
    let mut categories = Vec::new();
    for integration in integrations {
        if !categories.contains(&integration.category) {
            categories.push(integration.category);
        }
    }
    categories
}

/// `All` followed by one chip per category present in the list.
pub fn filter_options(integrations: &[Integration]) -> Vec<IntegrationFilter> {
    std::iter::once(IntegrationFilter::All)
        .chain(
            categories_in_order(integrations)
                .into_iter()
                .map(IntegrationFilter::Category),
        )
        .collect()
}

pub fn filter<'a>(integrations: &'a [Integration], by: IntegrationFilter) -> Vec<&'a Integration> {
    integrations.iter().filter(|i| by.matches(i)).collect()
}

pub fn featured(integrations: &[Integration]) -> Vec<&Integration> {
    integrations.iter().filter(|i| i.featured).collect()
}

/// Per-status counts for the line above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegrationStats {
    pub available: usize,
    pub beta: usize,
    pub coming_soon: usize,
    pub total: usize,
}

impl IntegrationStats {
    pub fn collect<'a>(integrations: impl IntoIterator<Item = &'a Integration>) -> Self {
        integrations
            .into_iter()
            .fold(Self::default(), |mut stats, integration| {
                match integration.status {
                    IntegrationStatus::Available => stats.available += 1,
                    IntegrationStatus::Beta => stats.beta += 1,
                    IntegrationStatus::ComingSoon => stats.coming_soon += 1,
                }
                stats.total += 1;
                stats
            })
    }
}

/// Capabilities shown on a card and the count of those left out.
pub fn capability_preview(integration: &Integration) -> (&[&'static str], usize) {
    let shown = integration.capabilities.len().min(CAPABILITY_PREVIEW_LEN);
    (
        &integration.capabilities[..shown],
        integration.capabilities.len() - shown,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::IconKind;
    use crate::core::data::ALL_INTEGRATIONS;

    fn integration(
        id: &'static str,
        category: IntegrationCategory,
        status: IntegrationStatus,
    ) -> Integration {
        Integration {
            id,
            name: id,
            description: "",
            category,
            icon: IconKind::Server,
            status,
            featured: false,
            capabilities: &["a", "b", "c", "d", "e"],
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let list = [
            integration("x", IntegrationCategory::Security, IntegrationStatus::Available),
            integration("y", IntegrationCategory::Core, IntegrationStatus::Beta),
            integration("z", IntegrationCategory::Security, IntegrationStatus::ComingSoon),
        ];
        assert_eq!(
            categories_in_order(&list),
            vec![IntegrationCategory::Security, IntegrationCategory::Core]
        );
        assert_eq!(filter_options(&list).len(), 3);
        assert_eq!(filter_options(&list)[0], IntegrationFilter::All);
    }

    #[test]
    fn test_filter_and_stats() {
        let list = [
            integration("x", IntegrationCategory::Security, IntegrationStatus::Available),
            integration("y", IntegrationCategory::Core, IntegrationStatus::Beta),
            integration("z", IntegrationCategory::Security, IntegrationStatus::ComingSoon),
        ];
        let security = filter(&list, IntegrationFilter::Category(IntegrationCategory::Security));
        assert_eq!(security.iter().map(|i| i.id).collect::<Vec<_>>(), ["x", "z"]);

        let stats = IntegrationStats::collect(security);
        assert_eq!(
            stats,
            IntegrationStats {
                available: 1,
                beta: 0,
                coming_soon: 1,
                total: 2
            }
        );

        let none = filter(&list, IntegrationFilter::Category(IntegrationCategory::Analytics));
        assert!(none.is_empty());
        assert_eq!(IntegrationStats::collect(none).total, 0);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(IntegrationFilter::All.to_string(), "All Integrations");
        assert_eq!(
            IntegrationFilter::Category(IntegrationCategory::ChildWelfare).to_string(),
            "Child Welfare Systems"
        );
        assert_eq!(IntegrationFilter::All.key(), "all");
    }

    #[test]
    fn test_capability_preview() {
        let item = integration("x", IntegrationCategory::Core, IntegrationStatus::Available);
        let (shown, hidden) = capability_preview(&item);
        assert_eq!(shown, &["a", "b", "c"]);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_showcase_data() {
        let featured: Vec<_> = featured(ALL_INTEGRATIONS).iter().map(|i| i.id).collect();
        assert_eq!(featured, ["jira", "confluence", "slack", "sso"]);
        assert_eq!(categories_in_order(ALL_INTEGRATIONS).len(), 6);

        let stats = IntegrationStats::collect(ALL_INTEGRATIONS);
        assert_eq!(stats.total, ALL_INTEGRATIONS.len());
        assert_eq!(stats.available + stats.beta + stats.coming_soon, stats.total);
    }
}
