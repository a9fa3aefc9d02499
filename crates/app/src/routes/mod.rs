pub mod home;
pub mod not_found;
pub mod pages;

use dioxus::prelude::*;
use shared_types::{AppConfig, LayoutInfo};
use shared_ui::{DesktopSidebar, PinToggle, SidebarLayoutProvider, SidebarRegion, StorageBackend};

use home::Home;
use not_found::NotFound;
use pages::{ModulePage, SolutionPage};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/problems/:id/solution")]
    SolutionPage { id: String },
    #[route("/:section/:id")]
    ModulePage { section: String, id: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Page chrome for modules and solutions: desktop sidebar, its pin toggle
/// and the article body. The toggle shares the sidebar's region so that
/// reaching for it keeps a hover-expanded sidebar open.
///
/// The layout is keyed by page id, so every navigation mounts a fresh
/// sidebar state that re-reads the stored pin preference.
#[component]
pub fn MarkdownLayout(info: LayoutInfo, children: Element) -> Element {
    let page_id = info.id().to_string();
    let page = std::iter::once(rsx! {
        MarkdownLayoutInner { key: "{page_id}", info: info.clone(), {children} }
    });

    rsx! {
        {page}
    }
}

#[component]
fn MarkdownLayoutInner(info: LayoutInfo, children: Element) -> Element {
    let config: AppConfig = use_context();
    let data = crate::content::catalog().layout_data(info);
    let title = data.info.title().to_string();

    rsx! {
        document::Title { "{title} · USACO Guide" }
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarLayoutProvider { data: data, config: config, storage: StorageBackend::Browser,
            div { class: "guide-layout",
                SidebarRegion {
                    DesktopSidebar {
                        brand: rsx! {
                            Link { to: Route::Home {}, class: "guide-brand", "USACO Guide" }
                        },
                        a { class: "guide-sidebar-footer-link", href: "https://forum.usaco.guide", "Forum" }
                    }
                    PinToggle {}
                }
                main { class: "guide-content",
                    {children}
                }
            }
        }
    }
}
