//! Common reusable UI components
//!
//! Building blocks shared by every page section: buttons, cards, badges,
//! layout bands and the class helpers they rely on.

pub mod badge;
pub mod button;
pub mod card;
mod class;
pub mod keyboard;
pub mod layout;
pub mod palette;
mod reveal;

pub use badge::{Badge, BadgeSize, BadgeVariant, StatusBadge};
pub use button::{Button, ButtonSize, ButtonVariant, IconPosition};
pub use card::{Card, CardPadding, CardVariant};
pub use class::class_list;
pub use keyboard::{CAROUSEL_HINTS, KeyboardHint, KeyboardHints};
pub use layout::{
    Container, ContainerPadding, ContainerSize, Section, SectionBackground, SectionElement,
    SectionHeader, SectionPadding,
};
pub use palette::{AccentClasses, accent_classes, status_surface, status_swatch, trend_classes};
pub use reveal::Reveal;
