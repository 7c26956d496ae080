use dioxus::prelude::*;
use ui::Landing;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Landing {}
    }
}
