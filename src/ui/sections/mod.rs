//! Landing page sections, top to bottom.

pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod integrations;
pub mod navigation;
pub mod questions;
pub mod seo;

pub use features::{
    AdditionalFeatures, FeatureCard, FeatureGrid, FeatureIcon, FeatureLayout, Features,
};
pub use footer::{ContactDetails, FinalCta, Footer, SocialLinks};
pub use hero::{CtaButtons, CtaLink, FloatingElement, Hero, HeroContent, MetricsCard};
pub use how_it_works::{
    HowItWorks, ImplementationApproach, ProcessFlow, ProcessLayout, ProcessStepCard, StepVariant,
    Timeline,
};
pub use integrations::{IntegrationCard, IntegrationGrid, Integrations};
pub use navigation::{MobileMenu, Navigation};
pub use questions::{CarouselNavigation, QuestionCard, QuestionCarousel};
pub use seo::{SeoMeta, SiteUrl};
