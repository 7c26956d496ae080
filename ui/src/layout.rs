use dioxus::prelude::*;

/// Page frame: fixed dark backdrop and a column centered in the viewport.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      // Full-viewport background, stays put while content animates
      div { class: "backdrop" }

      main { class: "page", {children} }
    }
}
