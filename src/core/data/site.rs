//! Copy for the page chrome: navigation, hero and closing call to action.

use crate::core::content::{
    Accent, CallToAction, IconKind, Metric, NavigationItem, Testimonial, Trend,
};

pub static NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        id: "home",
        label: "Home",
        href: "#home",
    },
    NavigationItem {
        id: "features",
        label: "Features",
        href: "#features",
    },
    NavigationItem {
        id: "how-it-works",
        label: "How It Works",
        href: "#how-it-works",
    },
    NavigationItem {
        id: "integrations",
        label: "Integrations",
        href: "#integrations",
    },
    NavigationItem {
        id: "contact",
        label: "Contact",
        href: "#contact",
    },
];

pub const HERO_HEADLINE: &str = "Streamline Your Child Welfare JIRA Workflows";
pub const HERO_SUBHEADLINE: &str =
    "AI-powered bot that automates pipeline management for implementation teams";

pub static TRUST_BADGES: &[&str] = &["ENTERPRISE READY", "HIPAA COMPLIANT", "24/7 SUPPORT"];

/// Toasts floating around the hero illustration.
pub static HERO_TOASTS: &[(&str, Accent)] = &[
    ("Ticket routed", Accent::Success),
    ("Status updated", Accent::Primary),
    ("Report generated", Accent::Accent),
];

pub static HERO_METRICS: &[Metric] = &[
    Metric {
        value: "85%",
        label: "Time Saved",
        change: Some("+12%"),
        trend: Trend::Up,
        icon: IconKind::Clock,
    },
    Metric {
        value: "50+",
        label: "Teams",
        change: Some("+23"),
        trend: Trend::Up,
        icon: IconKind::Users,
    },
    Metric {
        value: "99.9%",
        label: "Uptime",
        change: Some("stable"),
        trend: Trend::Neutral,
        icon: IconKind::Zap,
    },
];

pub static FINAL_CTA: CallToAction = CallToAction {
    title: "Ready to Transform Your Child Welfare Operations?",
    subtitle: "Join 50+ counties and 15+ state agencies already using our AI-powered JIRA automation",
    primary: "Start Free Trial",
    secondary: "Schedule Demo",
    perks: &[
        "30-day free trial with full access",
        "Setup assistance from our experts",
        "Integration with existing systems",
        "24/7 support during implementation",
    ],
};

pub static TESTIMONIAL: Testimonial = Testimonial {
    quote: "This JIRA bot has revolutionized our case management workflow. We've reduced processing time by 40% and improved compliance tracking significantly.",
    author: "Sarah Johnson",
    role: "Director of Child Services",
    company: "Travis County, TX",
};

pub static CERTIFICATIONS: &[&str] = &[
    "SOC 2 Compliant",
    "HIPAA Compliant",
    "99.9% Uptime SLA",
    "24/7 Support",
];
