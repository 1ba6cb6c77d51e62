//! UI layer: shared components, browser hooks, page sections and routed pages.

pub mod common;
pub mod hooks;
pub mod icon;
pub mod pages;
pub mod sections;

pub use icon::Icon;
pub use pages::{LandingPage, NotFoundPage};
