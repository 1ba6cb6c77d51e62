//! Content records rendered by the landing page.
//!
//! Every record is built from `'static` data in [`super::data`] and never
//! mutated. Ids are unique within their list and double as list keys.

use derive_more::Display;
use serde::Serialize;

/// Palette slot used for icon tiles, step badges and card tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    #[display("primary")]
    Primary,
    #[display("secondary")]
    Secondary,
    #[display("accent")]
    Accent,
    #[display("success")]
    Success,
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

/// Effort level shown on process steps and sample questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    #[display("simple")]
    Simple,
    #[display("medium")]
    Medium,
    #[display("advanced")]
    Advanced,
}

impl Complexity {
    /// Label used on sample-question cards.
    pub fn level_label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Basic",
            Complexity::Medium => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    #[display("reporting")]
    Reporting,
    #[display("workflow")]
    Workflow,
    #[display("compliance")]
    Compliance,
    #[display("analytics")]
    Analytics,
    #[display("monitoring")]
    Monitoring,
}

impl QuestionCategory {
    pub fn accent(&self) -> Accent {
        match self {
            QuestionCategory::Reporting => Accent::Primary,
            QuestionCategory::Workflow => Accent::Secondary,
            QuestionCategory::Compliance => Accent::Accent,
            QuestionCategory::Analytics => Accent::Success,
            QuestionCategory::Monitoring => Accent::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationCategory {
    #[display("core")]
    Core,
    #[display("child welfare")]
    ChildWelfare,
    #[display("analytics")]
    Analytics,
    #[display("communication")]
    Communication,
    #[display("workflow")]
    Workflow,
    #[display("security")]
    Security,
}

impl IntegrationCategory {
    /// Heading used by the category filter.
    pub fn title(&self) -> &'static str {
        match self {
            IntegrationCategory::Core => "Core Platforms",
            IntegrationCategory::ChildWelfare => "Child Welfare Systems",
            IntegrationCategory::Analytics => "Analytics & Reporting",
            IntegrationCategory::Communication => "Communication Tools",
            IntegrationCategory::Workflow => "Workflow & Productivity",
            IntegrationCategory::Security => "Security & Compliance",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            IntegrationCategory::Core => Accent::Primary,
            IntegrationCategory::ChildWelfare => Accent::Accent,
            IntegrationCategory::Analytics => Accent::Success,
            IntegrationCategory::Communication => Accent::Secondary,
            IntegrationCategory::Workflow => Accent::Warning,
            IntegrationCategory::Security => Accent::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationStatus {
    #[display("Available")]
    Available,
    #[display("Coming Soon")]
    ComingSoon,
    #[display("Beta")]
    Beta,
}

/// Direction of a hero metric's recent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

/// Leaf icons available to content records; rendered by `ui::icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    AlertCircle,
    AlertTriangle,
    ArrowDown,
    ArrowRight,
    BarChart,
    Bell,
    Brain,
    Calendar,
    CheckCircle,
    ChevronLeft,
    ChevronRight,
    Clock,
    Database,
    ExternalLink,
    Eye,
    FileText,
    GitBranch,
    Github,
    GraduationCap,
    Link,
    Linkedin,
    Loader,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Minus,
    Pause,
    Phone,
    Play,
    Search,
    Server,
    Shield,
    Star,
    TrendingDown,
    TrendingUp,
    Twitter,
    Users,
    Workflow,
    X,
    Zap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
    pub benefits: &'static [&'static str],
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStep {
    pub id: &'static str,
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub icon: IconKind,
    pub accent: Accent,
    pub duration: Option<&'static str>,
    pub complexity: Option<Complexity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: QuestionCategory,
    pub complexity: Complexity,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: IntegrationCategory,
    pub icon: IconKind,
    pub status: IntegrationStatus,
    pub featured: bool,
    pub capabilities: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub id: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterSection {
    pub id: &'static str,
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl ContactInfo {
    /// `"Austin, TX 78701"`
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }

    pub fn tel_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub founded: &'static str,
    pub headquarters: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub change: Option<&'static str>,
    pub trend: Trend,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

/// Headline, body copy and bullet list shared by the call-to-action blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub perks: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Accent::Warning.to_string(), "warning");
        assert_eq!(IntegrationCategory::ChildWelfare.to_string(), "child welfare");
        assert_eq!(IntegrationStatus::ComingSoon.to_string(), "Coming Soon");
        assert_eq!(Complexity::Medium.to_string(), "medium");
        assert_eq!(Complexity::Medium.level_label(), "Intermediate");
    }

    #[test]
    fn test_serialized_tags_are_kebab_case() {
        let json = serde_json::to_string(&IntegrationStatus::ComingSoon).unwrap();
        assert_eq!(json, "\"coming-soon\"");
        let json = serde_json::to_string(&IntegrationCategory::ChildWelfare).unwrap();
        assert_eq!(json, "\"child-welfare\"");
    }

    #[test]
    fn test_contact_hrefs() {
        let contact = ContactInfo {
            address: "1 Main St",
            city: "Austin",
            state: "TX",
            zip: "78701",
            phone: "+1 (555) 123-4567",
            email: "hello@example.com",
        };
        assert_eq!(contact.locality(), "Austin, TX 78701");
        assert_eq!(contact.tel_href(), "tel:+15551234567");
        assert_eq!(contact.mailto_href(), "mailto:hello@example.com");
    }

    #[test]
    fn test_category_accents() {
        assert_eq!(QuestionCategory::Monitoring.accent(), Accent::Warning);
        assert_eq!(IntegrationCategory::Security.accent(), Accent::Error);
    }
}
