use crate::core::content::{Accent, Feature, IconKind};

/// Headline capabilities shown in the main features grid.
pub static CORE_FEATURES: &[Feature] = &[
    Feature {
        id: "automated-pipeline",
        title: "Automated Pipeline Management",
        description: "Intelligent automation that streamlines your JIRA workflows with smart ticket routing, status tracking, and bottleneck detection.",
        icon: IconKind::GitBranch,
        accent: Accent::Primary,
        benefits: &[
            "Smart ticket routing based on priority and team availability",
            "Automated status updates across workflow stages",
            "Real-time bottleneck detection and alerts",
            "Custom workflow rules and triggers",
        ],
        highlight: true,
    },
    Feature {
        id: "child-welfare-compliance",
        title: "Child Welfare Compliance",
        description: "Specialized compliance features ensuring regulatory requirements are met with automated tracking and documentation.",
        icon: IconKind::Shield,
        accent: Accent::Success,
        benefits: &[
            "Automated regulatory requirement tracking",
            "Comprehensive audit trail maintenance",
            "Documentation automation for compliance reports",
            "Policy violation alerts and remediation",
        ],
        highlight: false,
    },
    Feature {
        id: "team-collaboration",
        title: "Team Collaboration",
        description: "Enhanced collaboration tools with real-time notifications, progress visibility, and automated stakeholder updates.",
        icon: IconKind::Users,
        accent: Accent::Accent,
        benefits: &[
            "Real-time notifications for critical updates",
            "Progress visibility across all team levels",
            "Automated stakeholder status reports",
            "Cross-team coordination tools",
        ],
        highlight: false,
    },
    Feature {
        id: "analytics-reporting",
        title: "Analytics & Reporting",
        description: "Comprehensive analytics with performance dashboards, workflow insights, and detailed time tracking capabilities.",
        icon: IconKind::BarChart,
        accent: Accent::Warning,
        benefits: &[
            "Real-time performance dashboards",
            "Workflow efficiency insights and recommendations",
            "Detailed time tracking and resource allocation",
            "Custom report generation and scheduling",
        ],
        highlight: true,
    },
];

/// Smaller tiles shown under "Additional Features & Benefits".
pub static ADDITIONAL_FEATURES: &[Feature] = &[
    Feature {
        id: "smart-automation",
        title: "Smart Automation",
        description: "AI-powered automation that learns from your workflow patterns.",
        icon: IconKind::Zap,
        accent: Accent::Primary,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "risk-detection",
        title: "Risk Detection",
        description: "Proactive identification of potential issues and risks.",
        icon: IconKind::AlertTriangle,
        accent: Accent::Error,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "time-tracking",
        title: "Time Tracking",
        description: "Comprehensive time tracking and resource management.",
        icon: IconKind::Clock,
        accent: Accent::Secondary,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "notifications",
        title: "Smart Notifications",
        description: "Intelligent notification system with priority filtering.",
        icon: IconKind::Bell,
        accent: Accent::Accent,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "documentation",
        title: "Auto Documentation",
        description: "Automated documentation generation and maintenance.",
        icon: IconKind::FileText,
        accent: Accent::Success,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "quality-assurance",
        title: "Quality Assurance",
        description: "Built-in quality checks and validation processes.",
        icon: IconKind::CheckCircle,
        accent: Accent::Primary,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "monitoring",
        title: "System Monitoring",
        description: "Real-time system monitoring and health checks.",
        icon: IconKind::Eye,
        accent: Accent::Secondary,
        benefits: &[],
        highlight: false,
    },
    Feature {
        id: "performance-optimization",
        title: "Performance Optimization",
        description: "Continuous performance monitoring and optimization.",
        icon: IconKind::TrendingUp,
        accent: Accent::Warning,
        benefits: &[],
        highlight: false,
    },
];
