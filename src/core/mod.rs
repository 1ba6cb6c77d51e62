//! Core page model: content records, static data and the interaction state
//! machines driven by the browser hooks in `ui::hooks`.

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod integrations;
pub mod sections;
#[cfg(test)]
mod tests;
pub mod visibility;

pub use carousel::{
    CarouselKey, CarouselState, DEFAULT_AUTOPLAY_INTERVAL_MS, KeyModifiers, KeyTarget,
};
pub use content::*;
pub use error::{SiteError, SiteResult};
pub use integrations::{IntegrationFilter, IntegrationStats};
pub use sections::{ActiveSectionTracker, SectionSpan};
pub use visibility::{IntersectionSample, Threshold, VisibilityOptions, VisibilityState};
