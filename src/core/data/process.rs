use crate::core::content::{Accent, Complexity, IconKind, ProcessStep};

/// The four onboarding steps shown in "How It Works".
pub static IMPLEMENTATION_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "quick-setup",
        number: 1,
        title: "Quick Setup",
        description: "One-click JIRA integration that connects seamlessly with your existing workflow infrastructure.",
        details: &[
            "Connect to JIRA instance with OAuth authentication",
            "Automatic project discovery and mapping",
            "Import existing workflows and configurations",
            "Zero-downtime integration process",
        ],
        icon: IconKind::Link,
        accent: Accent::Primary,
        duration: Some("5-10 minutes"),
        complexity: Some(Complexity::Simple),
    },
    ProcessStep {
        id: "ai-configuration",
        number: 2,
        title: "AI Configuration",
        description: "Customize the AI bot for child welfare-specific workflows with intelligent rule engine.",
        details: &[
            "Configure child welfare compliance rules",
            "Set up automated workflow triggers",
            "Define priority and escalation policies",
            "Customize notification preferences",
        ],
        icon: IconKind::Brain,
        accent: Accent::Accent,
        duration: Some("15-30 minutes"),
        complexity: Some(Complexity::Medium),
    },
    ProcessStep {
        id: "team-onboarding",
        number: 3,
        title: "Team Onboarding",
        description: "Comprehensive training program to get your team productive with automated processes.",
        details: &[
            "Interactive training modules for team members",
            "Role-based access control setup",
            "Custom dashboard configuration",
            "Best practices and workflow optimization",
        ],
        icon: IconKind::GraduationCap,
        accent: Accent::Success,
        duration: Some("1-2 hours"),
        complexity: Some(Complexity::Medium),
    },
    ProcessStep {
        id: "monitor-optimize",
        number: 4,
        title: "Monitor & Optimize",
        description: "Continuous performance tracking with AI-powered insights and recommendations.",
        details: &[
            "Real-time performance monitoring dashboard",
            "Automated bottleneck detection and alerts",
            "Weekly optimization recommendations",
            "Continuous learning and improvement cycles",
        ],
        icon: IconKind::TrendingUp,
        accent: Accent::Warning,
        duration: Some("Ongoing"),
        complexity: Some(Complexity::Simple),
    },
];
