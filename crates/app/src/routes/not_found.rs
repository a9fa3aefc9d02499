use dioxus::prelude::*;
use shared_types::{ModuleInfo, Section};

use crate::content::{catalog, module_url, Catalog};
use crate::routes::Route;

/// First module of the section named by the path's leading segment, if
/// that segment is a section key. `/silver/typo` suggests the start of
/// Silver.
fn section_suggestion<'a>(catalog: &'a Catalog, route: &[String]) -> Option<(Section, &'a ModuleInfo)> {
    let section = Section::from_key(route.first()?)?;
    let first = catalog.modules_in(section).next()?;
    Some((section, first))
}

/// Shown for unknown paths and for module ids that don't belong to the
/// section in the URL.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no guide page for path");

    let suggestion = section_suggestion(catalog(), &route)
        .map(|(section, module)| (section.label(), module_url(section, &module.id)));

    rsx! {
        document::Title { "Not Found · USACO Guide" }
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                h1 { class: "not-found-title", "This module doesn't exist" }
                p { class: "not-found-message",
                    "Nothing in the guide lives at "
                    code { "{path}" }
                    ". It may have been renamed or moved to another section."
                }
                if let Some((label, url)) = suggestion {
                    a { class: "not-found-suggestion", href: url, "Start of {label}" }
                }
                Link { to: Route::Home {}, class: "not-found-link", "Browse all sections" }
            }
        }
    }
}
