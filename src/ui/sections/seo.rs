//! Document head for the landing page: title, description, Open Graph and
//! Twitter cards, canonical link and the JSON-LD organization block.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde_json::json;

use crate::core::{CompanyInfo, ContactInfo};

/// Used for canonical and Open Graph URLs when the server has no `SITE_URL`.
pub const DEFAULT_SITE_URL: &str = "https://jirabot.com";

pub const PAGE_TITLE: &str = "JIRA Bot - AI Workflow Automation for Child Welfare Agencies";
pub const PAGE_DESCRIPTION: &str = "AI-powered JIRA bot that automates pipeline management, case tracking and compliance reporting for child welfare implementation teams.";

/// Public origin of the site, provided as context by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(pub String);

impl SiteUrl {
    /// `path` joined onto the origin with exactly one slash between them.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self(DEFAULT_SITE_URL.to_string())
    }
}

/// schema.org `Organization` record for search engines.
pub fn organization_json_ld(company: &CompanyInfo, contact: &ContactInfo, site: &SiteUrl) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": company.name,
        "description": company.description,
        "slogan": company.tagline,
        "foundingDate": company.founded,
        "url": site.join("/"),
        "logo": site.join("/favicon.svg"),
        "email": contact.email,
        "telephone": contact.phone,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": contact.address,
            "addressLocality": contact.city,
            "addressRegion": contact.state,
            "postalCode": contact.zip,
            "addressCountry": "US",
        },
    })
    .to_string()
}

#[component]
pub fn SeoMeta(company: &'static CompanyInfo, contact: &'static ContactInfo) -> impl IntoView {
    let site = use_context::<SiteUrl>().unwrap_or_default();
    let url = site.join("/");
    let image = site.join("/og-image.png");
    let json_ld = organization_json_ld(company, contact, &site);

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Meta name="keywords" content="JIRA bot, child welfare, workflow automation, case management, pipeline management, compliance reporting"/>

        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=url.clone()/>
        <Meta property="og:title" content=PAGE_TITLE/>
        <Meta property="og:description" content=PAGE_DESCRIPTION/>
        <Meta property="og:image" content=image.clone()/>
        <Meta property="og:site_name" content=company.name/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=PAGE_TITLE/>
        <Meta name="twitter:description" content=PAGE_DESCRIPTION/>
        <Meta name="twitter:image" content=image/>

        <Link rel="canonical" href=url/>

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{COMPANY_INFO, CONTACT_INFO};

    #[test]
    fn test_join() {
        let site = SiteUrl("https://jirabot.example.com/".to_string());
        assert_eq!(site.join("/"), "https://jirabot.example.com/");
        assert_eq!(site.join("og-image.png"), "https://jirabot.example.com/og-image.png");
        assert_eq!(SiteUrl::default().join("/"), "https://jirabot.com/");
    }

    #[test]
    fn test_organization_json_ld() {
        let raw = organization_json_ld(&COMPANY_INFO, &CONTACT_INFO, &SiteUrl::default());
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], COMPANY_INFO.name);
        assert_eq!(value["url"], "https://jirabot.com/");
        assert_eq!(value["address"]["addressLocality"], "Austin");
        assert_eq!(value["address"]["postalCode"], "78701");
        assert_eq!(value["email"], CONTACT_INFO.email);
    }
}
