use dioxus::prelude::*;
use shared_types::{LayoutInfo, Section};

use crate::content::{catalog, module_url};
use crate::routes::not_found::NotFound;
use crate::routes::MarkdownLayout;

/// A guide module at `/:section/:id`.
///
/// The section segment must match the module's own section; anything else
/// is a 404.
#[component]
pub fn ModulePage(section: String, id: String) -> Element {
    let module = catalog()
        .module(&id)
        .filter(|m| Section::from_key(&section) == Some(m.section))
        .cloned();

    let Some(module) = module else {
        return rsx! {
            NotFound { route: vec![section, id] }
        };
    };

    let title = module.title.clone();
    rsx! {
        MarkdownLayout { info: LayoutInfo::Module(module),
            article { class: "guide-article",
                h1 { class: "guide-article-title", "{title}" }
                p { class: "guide-article-placeholder", "Module content is rendered here." }
            }
        }
    }
}

/// Worked solution for one problem at `/problems/:id/solution`.
#[component]
pub fn SolutionPage(id: String) -> Element {
    let Some(solution) = catalog().solution(&id).cloned() else {
        return rsx! {
            NotFound { route: vec!["problems".to_string(), id, "solution".to_string()] }
        };
    };

    let title = solution.title.clone();
    let appears_in: Vec<(String, String)> = solution
        .modules_with_problem
        .iter()
        .filter_map(|module_id| catalog().module(module_id))
        .map(|m| (m.title.clone(), module_url(m.section, &m.id)))
        .collect();

    rsx! {
        MarkdownLayout { info: LayoutInfo::Solution(solution),
            article { class: "guide-article",
                h1 { class: "guide-article-title", "Solution: {title}" }
                if !appears_in.is_empty() {
                    p { class: "guide-article-meta",
                        "Appears in: "
                        for (title, url) in appears_in {
                            a { key: "{url}", class: "guide-article-module", href: url, "{title}" }
                        }
                    }
                }
            }
        }
    }
}
