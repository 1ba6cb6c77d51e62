use crate::core::content::{IconKind, Integration, IntegrationCategory, IntegrationStatus};

use IntegrationCategory::*;
use IntegrationStatus::*;

/// Every integration in display order, grouped the way the showcase lists them.
pub static ALL_INTEGRATIONS: &[Integration] = &[
    // Core platforms
    Integration {
        id: "jira",
        name: "JIRA",
        description: "Primary workflow management and issue tracking platform",
        category: Core,
        icon: IconKind::Workflow,
        status: Available,
        featured: true,
        capabilities: &["Issue Management", "Workflow Automation", "Custom Fields", "Reporting"],
    },
    Integration {
        id: "confluence",
        name: "Confluence",
        description: "Documentation and knowledge management integration",
        category: Core,
        icon: IconKind::FileText,
        status: Available,
        featured: true,
        capabilities: &["Documentation", "Knowledge Base", "Templates", "Collaboration"],
    },
    Integration {
        id: "slack",
        name: "Slack",
        description: "Real-time team communication and notifications",
        category: Communication,
        icon: IconKind::MessageSquare,
        status: Available,
        featured: true,
        capabilities: &["Instant Notifications", "Bot Commands", "Channel Updates", "File Sharing"],
    },
    // Child welfare systems
    Integration {
        id: "sacwis",
        name: "SACWIS",
        description: "State Automated Child Welfare Information System",
        category: ChildWelfare,
        icon: IconKind::Database,
        status: Available,
        featured: false,
        capabilities: &["Case Management", "State Reporting", "Compliance Tracking", "Data Exchange"],
    },
    Integration {
        id: "ccwis",
        name: "CCWIS",
        description: "Comprehensive Child Welfare Information System",
        category: ChildWelfare,
        icon: IconKind::Shield,
        status: ComingSoon,
        featured: false,
        capabilities: &["Federal Reporting", "Case Planning", "Safety Assessment", "Provider Management"],
    },
    Integration {
        id: "ncands",
        name: "NCANDS",
        description: "National Child Abuse and Neglect Data System",
        category: ChildWelfare,
        icon: IconKind::AlertTriangle,
        status: ComingSoon,
        featured: false,
        capabilities: &["Federal Reporting", "Statistical Analysis", "Trend Tracking", "Policy Research"],
    },
    Integration {
        id: "afcars",
        name: "AFCARS",
        description: "Adoption and Foster Care Analysis and Reporting System",
        category: ChildWelfare,
        icon: IconKind::Users,
        status: Beta,
        featured: false,
        capabilities: &["Foster Care Data", "Adoption Records", "Federal Compliance", "Outcome Tracking"],
    },
    // Analytics
    Integration {
        id: "tableau",
        name: "Tableau",
        description: "Advanced data visualization and business intelligence",
        category: Analytics,
        icon: IconKind::BarChart,
        status: Available,
        featured: false,
        capabilities: &["Interactive Dashboards", "Data Visualization", "Trend Analysis", "Custom Reports"],
    },
    Integration {
        id: "powerbi",
        name: "Power BI",
        description: "Microsoft business analytics and reporting platform",
        category: Analytics,
        icon: IconKind::BarChart,
        status: Available,
        featured: false,
        capabilities: &["Real-time Analytics", "Custom Dashboards", "Data Modeling", "Report Sharing"],
    },
    Integration {
        id: "excel",
        name: "Excel",
        description: "Automated report generation and data export",
        category: Analytics,
        icon: IconKind::FileText,
        status: Available,
        featured: false,
        capabilities: &["Report Export", "Data Analysis", "Chart Generation", "Template Automation"],
    },
    // Communication
    Integration {
        id: "teams",
        name: "Microsoft Teams",
        description: "Enterprise communication and collaboration platform",
        category: Communication,
        icon: IconKind::Users,
        status: Available,
        featured: false,
        capabilities: &["Video Conferencing", "File Collaboration", "Chat Integration", "Calendar Sync"],
    },
    Integration {
        id: "outlook",
        name: "Outlook",
        description: "Email notifications and calendar integration",
        category: Communication,
        icon: IconKind::Mail,
        status: Available,
        featured: false,
        capabilities: &["Email Alerts", "Calendar Events", "Meeting Scheduling", "Task Reminders"],
    },
    Integration {
        id: "phone-system",
        name: "Phone Systems",
        description: "Integration with VoIP and traditional phone systems",
        category: Communication,
        icon: IconKind::Phone,
        status: ComingSoon,
        featured: false,
        capabilities: &["Call Logging", "Automatic Dialing", "Call Recording", "Contact Management"],
    },
    // Workflow
    Integration {
        id: "calendar",
        name: "Calendar Systems",
        description: "Google Calendar, Outlook Calendar integration",
        category: Workflow,
        icon: IconKind::Calendar,
        status: Available,
        featured: false,
        capabilities: &["Court Dates", "Appointment Scheduling", "Deadline Tracking", "Reminder Alerts"],
    },
    Integration {
        id: "document-mgmt",
        name: "Document Management",
        description: "SharePoint, Google Drive, and other storage systems",
        category: Workflow,
        icon: IconKind::Server,
        status: Available,
        featured: false,
        capabilities: &["File Storage", "Version Control", "Access Management", "Audit Trails"],
    },
    Integration {
        id: "time-tracking",
        name: "Time Tracking",
        description: "Automated time logging for case work and reporting",
        category: Workflow,
        icon: IconKind::Clock,
        status: Beta,
        featured: false,
        capabilities: &["Automatic Logging", "Billable Hours", "Activity Tracking", "Productivity Reports"],
    },
    // Security
    Integration {
        id: "sso",
        name: "Single Sign-On",
        description: "Active Directory, SAML, OAuth integration",
        category: Security,
        icon: IconKind::Shield,
        status: Available,
        featured: true,
        capabilities: &["User Authentication", "Role Management", "Access Control", "Audit Logging"],
    },
    Integration {
        id: "compliance",
        name: "Compliance Tools",
        description: "HIPAA, FERPA, and state compliance monitoring",
        category: Security,
        icon: IconKind::CheckCircle,
        status: Available,
        featured: false,
        capabilities: &["Privacy Protection", "Audit Trails", "Data Encryption", "Compliance Reporting"],
    },
];
