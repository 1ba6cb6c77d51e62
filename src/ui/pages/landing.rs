//! The single landing page: every section of the site in scroll order.

use leptos::prelude::*;

use crate::core::data::{
    ADDITIONAL_FEATURES, ALL_INTEGRATIONS, CERTIFICATIONS, COMPANY_INFO, CONTACT_INFO,
    CORE_FEATURES, FINAL_CTA, FOOTER_SECTIONS, HERO_HEADLINE, HERO_SUBHEADLINE,
    IMPLEMENTATION_STEPS, NAVIGATION_ITEMS, SAMPLE_QUESTIONS, SOCIAL_LINKS, TESTIMONIAL,
};
use crate::ui::sections::{
    AdditionalFeatures, Features, FinalCta, Footer, Hero, HeroContent, HowItWorks,
    ImplementationApproach, Integrations, Navigation, QuestionCarousel, SeoMeta,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta company=&COMPANY_INFO contact=&CONTACT_INFO/>

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Navigation items=NAVIGATION_ITEMS/>

            <Hero>
                <HeroContent headline=HERO_HEADLINE subheadline=HERO_SUBHEADLINE/>
            </Hero>

            <Features
                title="Core Bot Capabilities"
                subtitle="Powerful automation features designed specifically for child welfare implementation teams"
                features=CORE_FEATURES
            />
            <AdditionalFeatures features=ADDITIONAL_FEATURES/>

            <HowItWorks
                title="How It Works"
                subtitle="Our proven 4-step implementation process gets your team up and running quickly with minimal disruption"
                steps=IMPLEMENTATION_STEPS
            />
            <ImplementationApproach/>

            <QuestionCarousel questions=SAMPLE_QUESTIONS/>

            <Integrations
                title="Platform Integrations"
                subtitle="Seamlessly connect with the tools your child welfare team already uses"
                integrations=ALL_INTEGRATIONS
            />

            <FinalCta content=&FINAL_CTA testimonial=&TESTIMONIAL certifications=CERTIFICATIONS/>

            <Footer
                company=&COMPANY_INFO
                sections=FOOTER_SECTIONS
                contact=&CONTACT_INFO
                social=SOCIAL_LINKS
            />
        </div>
    }
}
