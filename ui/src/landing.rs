use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::paint::Paint;
use shared::site::SiteConfig;

use crate::{CrosshairIcon, Layout, RevealStage, REVEAL_DURATION_SECS, REVEAL_EASING};

pub const LANDING_ICON_SIZE: f64 = 18.0;

/// Crosshair paint from the config, falling back to the ambient text color.
pub fn icon_paint(config: &SiteConfig) -> Paint {
    config.icon_paint().unwrap_or_else(|e| {
        warn!("Ignoring icon color {:?}: {e}", config.icon_color);
        Paint::default()
    })
}

/// Landing page: icon, wordmark, tagline and a single call-to-action.
///
/// Copy is read from a `SiteConfig` context when one is provided.
#[component]
pub fn Landing() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let color = icon_paint(&config);
    let SiteConfig {
        wordmark,
        tagline,
        cta_label,
        cta_href,
        ..
    } = config;

    let timeline = format!(
        "--reveal-duration: {REVEAL_DURATION_SECS}s; --reveal-easing: {REVEAL_EASING}"
    );

    rsx! {
      Layout {
        div { class: "landing", style: "{timeline}",
          span {
            class: "reveal landing-icon",
            style: RevealStage::Icon.style(),
            CrosshairIcon { size: LANDING_ICON_SIZE, color }
          }
          h1 {
            class: "reveal wordmark",
            style: RevealStage::Wordmark.style(),
            "{wordmark}"
          }
          p {
            class: "reveal tagline",
            style: RevealStage::Tagline.style(),
            "{tagline}"
          }
          a {
            class: "reveal cta",
            style: RevealStage::Cta.style(),
            href: "{cta_href}",
            "{cta_label}"
          }
        }
      }
    }
}
