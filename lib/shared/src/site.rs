//! Compiled-in site configuration.
//!
//! Every piece of copy and every document-level value the pages emit lives
//! here, so views never carry their own string literals.

use serde::{Deserialize, Serialize};

use crate::paint::{Paint, ParsePaintError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document title
    pub title: String,
    /// Document `<meta name="description">`
    pub description: String,
    pub wordmark: String,
    pub tagline: String,
    pub cta_label: String,
    /// Where the call-to-action points (default: "/map")
    pub cta_href: String,
    /// Crosshair paint as CSS text, parsed with `Paint::from_str`
    pub icon_color: String,
}

impl SiteConfig {
    pub fn icon_paint(&self) -> Result<Paint, ParsePaintError> {
        self.icon_color.parse()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Locatr".to_string(),
            description: "Locatr Frontend".to_string(),
            wordmark: "LOCATR".to_string(),
            tagline: "Explore your world in 3D".to_string(),
            cta_label: "Get Started".to_string(),
            cta_href: "/map".to_string(),
            icon_color: "rgba(255,255,255,0.22)".to_string(),
        }
    }
}
