use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use ui::Layout;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| warn!("No route for /{path}"));

    rsx! {
      Layout {
        div { class: "landing",
          h1 { class: "wordmark", "404" }
          p { class: "tagline", "Nothing at /{path}" }
          Link { class: "cta", to: Route::HomePage {}, "Home" }
        }
      }
    }
}
