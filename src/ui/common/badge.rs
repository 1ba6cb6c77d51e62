use leptos::prelude::*;

use crate::core::{Complexity, IconKind, IntegrationStatus};
use crate::ui::common::class_list;
use crate::ui::icon::Icon;

/// Badge variant types for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default neutral badge
    Default,
    /// Primary color badge
    Primary,
    /// Success/positive badge (green)
    Success,
    /// Warning badge (yellow)
    Warning,
    /// Info badge (blue)
    Info,
    /// Error/high-effort badge (red)
    Danger,
    /// Translucent badge on dark backgrounds
    Inverted,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-secondary-100 text-secondary-700",
            BadgeVariant::Primary => "bg-primary-100 text-primary-700",
            BadgeVariant::Success => "bg-green-100 text-green-700",
            BadgeVariant::Warning => "bg-yellow-100 text-yellow-700",
            BadgeVariant::Info => "bg-blue-100 text-blue-700",
            BadgeVariant::Danger => "bg-red-100 text-red-700",
            BadgeVariant::Inverted => "bg-white/20 text-white",
        }
    }

    pub fn for_status(status: IntegrationStatus) -> Self {
        match status {
            IntegrationStatus::Available => BadgeVariant::Success,
            IntegrationStatus::ComingSoon => BadgeVariant::Warning,
            IntegrationStatus::Beta => BadgeVariant::Info,
        }
    }

    pub fn for_complexity(complexity: Complexity) -> Self {
        match complexity {
            Complexity::Simple => BadgeVariant::Success,
            Complexity::Medium => BadgeVariant::Warning,
            Complexity::Advanced => BadgeVariant::Danger,
        }
    }
}

/// Badge size options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    Medium,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Small => "text-xs px-2 py-1",
            BadgeSize::Medium => "text-sm px-3 py-1",
        }
    }
}

/// Pill-shaped label
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Size of the badge
    #[prop(default = BadgeSize::Small)]
    size: BadgeSize,
    /// Optional icon to show before text
    #[prop(optional)]
    icon: Option<IconKind>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = class_list([
        "inline-flex items-center gap-1 rounded-full font-medium",
        variant.class(),
        size.class(),
        class,
    ]);

    view! {
        <span class=classes>
            {icon.map(|kind| view! { <Icon kind=kind class="w-3.5 h-3.5"/> })}
            {children()}
        </span>
    }
}

/// Availability badge for an integration
#[component]
pub fn StatusBadge(status: IntegrationStatus) -> impl IntoView {
    view! {
        <Badge variant=BadgeVariant::for_status(status)>{status.to_string()}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants() {
        assert_eq!(
            BadgeVariant::for_status(IntegrationStatus::ComingSoon),
            BadgeVariant::Warning
        );
        assert_eq!(BadgeVariant::for_status(IntegrationStatus::Beta).class(), "bg-blue-100 text-blue-700");
        assert_eq!(
            BadgeVariant::for_complexity(Complexity::Simple),
            BadgeVariant::Success
        );
        assert_eq!(
            BadgeVariant::for_complexity(Complexity::Advanced),
            BadgeVariant::Danger
        );
    }
}
