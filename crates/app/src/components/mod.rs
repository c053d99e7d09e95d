pub mod brand_logo;
pub mod glyph;
pub mod status_badge;

pub use brand_logo::BrandLogo;
pub use glyph::Glyph;
pub use status_badge::{AssetStatusBadge, CertificationBadge};
