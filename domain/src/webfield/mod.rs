//! Group web pages: static templates and the generated landing page.

pub mod landing;
pub mod templates;

pub use landing::{LandingHeader, LandingLink, LandingPageError};
