use crate::core::content::{CompanyInfo, ContactInfo, FooterLink, FooterSection, IconKind, SocialLink};

const fn anchor(id: &'static str, text: &'static str, href: &'static str) -> FooterLink {
    FooterLink {
        id,
        text,
        href,
        external: false,
    }
}

const fn external(id: &'static str, text: &'static str, href: &'static str) -> FooterLink {
    FooterLink {
        id,
        text,
        href,
        external: true,
    }
}

pub static FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        id: "product",
        title: "Product",
        links: &[
            anchor("features", "Features", "#features"),
            anchor("integrations", "Integrations", "#integrations"),
            anchor("sample-questions", "AI Capabilities", "#sample-questions"),
            anchor("how-it-works", "How It Works", "#how-it-works"),
            external("pricing", "Pricing", "/pricing"),
            external("api-docs", "API Documentation", "/docs"),
        ],
    },
    FooterSection {
        id: "company",
        title: "Company",
        links: &[
            external("about", "About Us", "/about"),
            external("careers", "Careers", "/careers"),
            external("blog", "Blog", "/blog"),
            external("news", "News & Press", "/news"),
            anchor("contact", "Contact", "#contact"),
            external("partners", "Partners", "/partners"),
        ],
    },
    FooterSection {
        id: "support",
        title: "Support",
        links: &[
            external("help-center", "Help Center", "/help"),
            external("documentation", "Documentation", "/docs"),
            external("training", "Training Resources", "/training"),
            external("webinars", "Webinars", "/webinars"),
            external("status", "System Status", "https://status.example.com"),
            external("community", "Community Forum", "/community"),
        ],
    },
    FooterSection {
        id: "legal",
        title: "Legal",
        links: &[
            external("privacy", "Privacy Policy", "/privacy"),
            external("terms", "Terms of Service", "/terms"),
            external("security", "Security", "/security"),
            external("compliance", "Compliance", "/compliance"),
            external("cookies", "Cookie Policy", "/cookies"),
            external("gdpr", "GDPR Compliance", "/gdpr"),
        ],
    },
];

pub static CONTACT_INFO: ContactInfo = ContactInfo {
    address: "123 Innovation Drive, Suite 400",
    city: "Austin",
    state: "TX",
    zip: "78701",
    phone: "+1 (555) 123-4567",
    email: "contact@jirabot.com",
};

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        id: "linkedin",
        name: "LinkedIn",
        url: "https://linkedin.com/company/jirabot",
        icon: IconKind::Linkedin,
    },
    SocialLink {
        id: "twitter",
        name: "Twitter",
        url: "https://twitter.com/jirabot",
        icon: IconKind::Twitter,
    },
    SocialLink {
        id: "github",
        name: "GitHub",
        url: "https://github.com/jirabot",
        icon: IconKind::Github,
    },
];

pub static COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "JIRA Bot Solutions",
    tagline: "Empowering child welfare agencies with intelligent automation",
    description: "Trusted by 50+ counties and 15+ state agencies nationwide for streamlined JIRA workflow management.",
    founded: "2021",
    headquarters: "Austin, TX",
};
