use dioxus::prelude::*;

mod config;
mod content;
mod routes;

use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Site config is static for the lifetime of the app.
    use_context_provider(|| config::app_config().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
