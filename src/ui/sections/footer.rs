//! Closing call to action and the `#contact` footer.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::core::{
    CallToAction, CompanyInfo, ContactInfo, FooterLink, FooterSection, IconKind, SocialLink,
    Testimonial,
};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Container, ContainerSize, IconPosition, Section,
    SectionBackground, SectionElement, SectionPadding,
};
use crate::ui::hooks::follow_href;
use crate::ui::icon::Icon;

const TESTIMONIAL_STARS: usize = 5;

/// `(target, rel)` for a footer link; external links open in a new tab.
fn link_target(link: &FooterLink) -> (&'static str, Option<&'static str>) {
    if link.external {
        ("_blank", Some("noopener noreferrer"))
    } else {
        ("_self", None)
    }
}

fn copyright_line(year: i32, company: &str) -> String {
    format!("\u{a9} {year} {company}. All rights reserved.")
}

/// Loose shape check before accepting a newsletter address.
fn is_plausible_email(input: &str) -> bool {
    let input = input.trim();
    match input.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[component]
pub fn FinalCta(
    content: &'static CallToAction,
    testimonial: &'static Testimonial,
    certifications: &'static [&'static str],
) -> impl IntoView {
    view! {
        <Section padding=SectionPadding::ExtraLarge background=SectionBackground::Primary>
            <Container size=ContainerSize::ExtraLarge>
                <div class="text-center space-y-12">
                    <div class="space-y-6">
                        <h2 class="text-4xl lg:text-5xl font-bold text-white max-w-4xl mx-auto leading-tight">
                            {content.title}
                        </h2>
                        <p class="text-xl text-white/90 max-w-3xl mx-auto leading-relaxed">{content.subtitle}</p>
                    </div>

                    <figure class="max-w-4xl mx-auto bg-white/10 backdrop-blur-sm rounded-2xl p-8 border border-white/20">
                        <div class="flex items-center justify-center mb-6" aria-label="Rated 5 out of 5">
                            {(0..TESTIMONIAL_STARS)
                                .map(|_| view! { <Icon kind=IconKind::Star class="w-6 h-6 text-yellow-300 fill-current"/> })
                                .collect_view()}
                        </div>
                        <blockquote class="text-xl text-white/95 italic leading-relaxed mb-6">
                            "\u{201c}" {testimonial.quote} "\u{201d}"
                        </blockquote>
                        <figcaption class="text-white/80">
                            <div class="font-semibold">{testimonial.author}</div>
                            <div class="text-sm">{testimonial.role}</div>
                            <div class="text-sm">{testimonial.company}</div>
                        </figcaption>
                    </figure>

                    <ul class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 max-w-5xl mx-auto">
                        {content
                            .perks
                            .iter()
                            .map(|perk| view! {
                                <li class="flex items-center gap-3 text-white/90">
                                    <Icon kind=IconKind::CheckCircle class="w-6 h-6 text-green-400 flex-shrink-0"/>
                                    <span class="text-left">{*perk}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::ExtraLarge
                            icon=IconKind::ArrowRight
                            icon_position=IconPosition::Right
                            class="border-white text-white hover:bg-white hover:text-primary-600"
                            on_click=Callback::new(|_| follow_href("#contact"))
                        >
                            {content.primary}
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::ExtraLarge
                            icon=IconKind::Play
                            on_click=Callback::new(|_| follow_href("#contact"))
                        >
                            {content.secondary}
                        </Button>
                    </div>

                    <div class="space-y-4">
                        <p class="text-white/70 text-sm">"Trusted by child welfare professionals nationwide"</p>
                        <div class="flex flex-wrap justify-center items-center gap-8 text-white/60 text-sm">
                            {certifications
                                .iter()
                                .map(|label| view! {
                                    <div class="flex items-center gap-2">
                                        <span class="w-2 h-2 bg-green-400 rounded-full"></span>
                                        <span>{*label}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Container>
        </Section>
    }
}

#[component]
pub fn ContactDetails(contact: &'static ContactInfo) -> impl IntoView {
    view! {
        <address class="space-y-4 not-italic">
            <div class="flex items-start gap-3">
                <Icon kind=IconKind::MapPin class="w-5 h-5 text-white/70 flex-shrink-0 mt-0.5"/>
                <div class="text-white/90">
                    <div>{contact.address}</div>
                    <div>{contact.locality()}</div>
                </div>
            </div>
            <div class="flex items-center gap-3">
                <Icon kind=IconKind::Phone class="w-5 h-5 text-white/70 flex-shrink-0"/>
                <a href=contact.tel_href() class="text-white/90 hover:text-white transition-colors">
                    {contact.phone}
                </a>
            </div>
            <div class="flex items-center gap-3">
                <Icon kind=IconKind::Mail class="w-5 h-5 text-white/70 flex-shrink-0"/>
                <a href=contact.mailto_href() class="text-white/90 hover:text-white transition-colors">
                    {contact.email}
                </a>
            </div>
        </address>
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            {links
                .iter()
                .map(|social| view! {
                    <a
                        href=social.url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-10 h-10 bg-white/10 hover:bg-white/20 rounded-full flex items-center justify-center transition-all duration-200 hover:scale-110 hover:shadow-lg focus:outline-none focus:ring-2 focus:ring-white/50"
                        aria-label=format!("Follow us on {}", social.name)
                    >
                        <Icon kind=social.icon class="w-5 h-5 text-white"/>
                    </a>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<bool>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = email.with(|value| is_plausible_email(value));
        if accepted {
            email.set(String::new());
        }
        status.set(Some(accepted));
    };

    view! {
        <div class="space-y-3">
            <h4 class="text-white font-semibold">"Stay Updated"</h4>
            <p class="text-white/80 text-sm">"Get the latest updates on features and best practices."</p>
            <form class="flex flex-col sm:flex-row gap-2" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Enter your email"
                    aria-label="Email address"
                    class="flex-1 px-4 py-2 rounded-lg bg-white/10 border border-white/20 text-white placeholder-white/60 focus:outline-none focus:ring-2 focus:ring-white/50"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2 bg-white text-primary-600 rounded-lg font-semibold hover:bg-gray-100 transition-colors flex items-center justify-center gap-2"
                >
                    <Icon kind=IconKind::Mail class="w-4 h-4"/>
                    <span>"Subscribe"</span>
                </button>
            </form>
            <p class="text-sm text-white/80" aria-live="polite">
                {move || match status.get() {
                    Some(true) => "Thanks! You're on the list.",
                    Some(false) => "Please enter a valid email address.",
                    None => "",
                }}
            </p>
        </div>
    }
}

#[component]
fn FooterColumn(section: &'static FooterSection) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h4 class="text-white font-semibold text-lg">{section.title}</h4>
            <ul class="space-y-3">
                {section
                    .links
                    .iter()
                    .map(|link| {
                        let (target, rel) = link_target(link);
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    target=target
                                    rel=rel
                                    class="text-white/80 hover:text-white transition-colors flex items-center gap-1 group"
                                >
                                    <span>{link.text}</span>
                                    {link.external.then(|| view! {
                                        <Icon kind=IconKind::ExternalLink class="w-3 h-3 opacity-0 group-hover:opacity-100 transition-opacity"/>
                                    })}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer(
    company: &'static CompanyInfo,
    sections: &'static [FooterSection],
    contact: &'static ContactInfo,
    social: &'static [SocialLink],
    #[prop(default = true)]
    show_newsletter: bool,
) -> impl IntoView {
    let copyright = copyright_line(Utc::now().year(), company.name);

    view! {
        <Section
            id="contact"
            element=SectionElement::Footer
            padding=SectionPadding::ExtraLarge
            background=SectionBackground::Primary
        >
            <Container size=ContainerSize::ExtraLarge>
                <div class="space-y-12">
                    <div class="grid lg:grid-cols-5 gap-8">
                        <div class="lg:col-span-2 space-y-6">
                            <div>
                                <h3 class="text-2xl font-bold text-white mb-2">{company.name}</h3>
                                <p class="text-white/80 text-lg leading-relaxed">{company.tagline}</p>
                            </div>

                            <ContactDetails contact=contact/>

                            <div>
                                <h4 class="text-white font-semibold mb-3">"Follow Us"</h4>
                                <SocialLinks links=social/>
                            </div>

                            {show_newsletter.then(|| view! { <NewsletterSignup/> })}
                        </div>

                        <div class="lg:col-span-3 grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                            {sections.iter().map(|section| view! { <FooterColumn section=section/> }).collect_view()}
                        </div>
                    </div>

                    <div class="border-t border-white/20 pt-8">
                        <div class="flex flex-col lg:flex-row justify-between items-center gap-4">
                            <div class="text-white/70 text-sm">{copyright}</div>
                            <div class="flex flex-wrap items-center gap-6 text-sm">
                                <a href="/privacy" class="text-white/70 hover:text-white transition-colors">"Privacy Policy"</a>
                                <a href="/terms" class="text-white/70 hover:text-white transition-colors">"Terms of Service"</a>
                                <a href="/cookies" class="text-white/70 hover:text-white transition-colors">"Cookie Settings"</a>
                            </div>
                            <div class="text-white/60 text-xs">"Built with \u{2764}\u{fe0f} for child welfare professionals"</div>
                        </div>
                    </div>
                </div>
            </Container>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::FOOTER_SECTIONS;

    #[test]
    fn test_link_targets() {
        for link in FOOTER_SECTIONS.iter().flat_map(|section| section.links) {
            let (target, rel) = link_target(link);
            if link.external {
                assert_eq!(target, "_blank");
                assert_eq!(rel, Some("noopener noreferrer"));
            } else {
                assert!(link.href.starts_with('#'));
                assert_eq!(target, "_self");
                assert!(rel.is_none());
            }
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "JIRA Bot Solutions"),
            "\u{a9} 2026 JIRA Bot Solutions. All rights reserved."
        );
        assert!(copyright_line(Utc::now().year(), "X").contains(&Utc::now().year().to_string()));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("ops@county.gov"));
        assert!(is_plausible_email("  a@b.co "));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@county.gov"));
        assert!(!is_plausible_email("ops@localhost"));
        assert!(!is_plausible_email("ops@county."));
    }
}
