use dioxus::prelude::*;
use shared_types::ALL_SECTIONS;

use crate::content::{catalog, module_url};
use crate::routes::Route;

/// Landing page listing every section and the worked solutions.
#[component]
pub fn Home() -> Element {
    let catalog = catalog();
    let sections: Vec<(&'static str, &'static str, Vec<(String, String, String)>)> = ALL_SECTIONS
        .iter()
        .map(|section| {
            let modules = catalog
                .modules_in(*section)
                .map(|m| (m.id.clone(), m.title.clone(), module_url(*section, &m.id)))
                .collect();
            (section.as_str(), section.label(), modules)
        })
        .collect();

    rsx! {
        document::Title { "USACO Guide" }
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            h1 { class: "home-title", "USACO Guide" }
            p { class: "home-subtitle", "A free collection of curated, high-quality competitive programming resources." }

            div { class: "home-sections",
                for (key, label, modules) in sections {
                    div { key: "{key}", class: "home-section",
                        h2 { "{label}" }
                        ul {
                            for (id, title, url) in modules {
                                li { key: "{id}",
                                    a { href: url, "{title}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "home-solutions",
                h2 { "Solutions" }
                ul {
                    for solution in catalog.solutions() {
                        li { key: "{solution.id}",
                            Link { to: Route::SolutionPage { id: solution.id.clone() }, "{solution.title}" }
                        }
                    }
                }
            }
        }
    }
}
