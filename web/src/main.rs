use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::site::SiteConfig;

use views::{HomePage, MapPage, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},
    #[route("/map")]
    MapPage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const DISPLAY_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Barlow+Condensed:wght@300;400;500&display=swap";

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Root layout: document head and the router.
#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);

    use_hook(|| info!("Locatr frontend mounted"));

    rsx! {
        DocumentHead { config }

        Router::<Route> {}
    }
}

/// Title, description and the global resources every page loads.
#[component]
fn DocumentHead(config: SiteConfig) -> Element {
    let SiteConfig {
        title, description, ..
    } = config;

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: DISPLAY_FONT }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "description", content: "{description}" }
        document::Title { "{title}" }
    }
}
