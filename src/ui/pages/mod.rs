//! Routed pages: the landing page at `/` and the 404 fallback.

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
