use dioxus::prelude::*;
use shared::site::SiteConfig;
use ui::{icon_paint, CrosshairIcon, Layout, LANDING_ICON_SIZE};

use crate::Route;

// The map itself is served elsewhere; this keeps the link inside the router.
#[component]
pub fn MapPage() -> Element {
    let color = icon_paint(&use_context::<SiteConfig>());

    rsx! {
      Layout {
        div { class: "landing",
          CrosshairIcon { size: LANDING_ICON_SIZE, color }
          p { class: "tagline", "Map" }
          Link { class: "cta", to: Route::HomePage {}, "Back" }
        }
      }
    }
}
