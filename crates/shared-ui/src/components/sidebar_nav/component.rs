use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronRight};
use dioxus_free_icons::Icon;
use shared_types::{ModuleLink, NavLinkGroup, PersistedFlag, Section, ALL_SECTIONS};

use crate::storage::StorageBackend;
use crate::use_layout;

/// Navigation list inside the desktop sidebar.
///
/// Reads `collapsed` and the page data from the layout context. The active
/// section is local to the list; it starts at the section resolved for the
/// current page.
#[component]
pub fn SidebarNav() -> Element {
    let ctx = use_layout();
    let collapsed = ctx.collapsed();
    let data = ctx.data;

    let mut active_section = use_signal(|| data.peek().initial_section);
    let groups = use_memo(move || data.read().groups(active_section()));
    let page_id = data.read().info.id().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            class: "sidebar-nav",
            "data-collapsed": if collapsed { "true" } else { "false" },
            div { class: "sidebar-nav-sections",
                SectionSelect {
                    current: active_section(),
                    collapsed: collapsed,
                    on_select: move |section| active_section.set(section),
                }
            }
            div { class: "sidebar-nav-groups",
                {groups().into_iter().map(|group| {
                    let key = group.label.clone();
                    let active = group.contains(&page_id);
                    rsx! {
                        NavGroup { key: "{key}", group: group, active: active, collapsed: collapsed }
                    }
                })}
            }
        }
    }
}

/// Section picker at the top of the navigation list. Shows only the
/// section's initial while the sidebar is collapsed.
#[component]
pub fn SectionSelect(
    current: Section,
    collapsed: bool,
    #[props(default)] on_select: Option<EventHandler<Section>>,
) -> Element {
    let label = current.label();
    if collapsed {
        let initial = &label[..1];
        return rsx! {
            span { class: "section-select-compact", title: label, "{initial}" }
        };
    }

    rsx! {
        select {
            class: "section-select",
            "aria-label": "Section",
            value: current.as_str(),
            onchange: move |evt| {
                if let (Some(section), Some(handler)) = (Section::from_key(&evt.value()), &on_select) {
                    handler.call(section);
                }
            },
            {ALL_SECTIONS.iter().map(|section| {
                let key = section.as_str();
                let text = section.label();
                rsx! {
                    option { key: "{key}", value: key, selected: *section == current, "{text}" }
                }
            })}
        }
    }
}

/// One chapter accordion.
///
/// The expand flag is sticky per label when a [`StorageBackend`] is in
/// context. An active group is always opened, overriding a stored
/// collapse. Sub-items render only while the group is expanded and the
/// sidebar is not collapsed; a collapsed sidebar also hides the label.
#[component]
pub fn NavGroup(group: NavLinkGroup, active: bool, collapsed: bool) -> Element {
    let storage = try_use_context::<StorageBackend>();
    let label = group.label.clone();
    let mut expanded = use_signal(|| true);
    let mut loaded = use_signal(|| false);
    let preference = use_hook(|| storage.map(|s| Rc::new(PersistedFlag::group_expanded(s, &label))));

    {
        let preference = preference.clone();
        use_effect(move || {
            let preference = preference.clone();
            spawn(async move {
                if let Some(preference) = &preference {
                    if let Some(stored) = preference.load().await {
                        expanded.set(stored);
                    }
                }
                loaded.set(true);
            });
        });
    }

    // An active group is forced open once the stored flag is in, and again
    // whenever it becomes active (the same label can recur across sections).
    use_effect(use_reactive((&active,), move |(active,)| {
        if active && loaded() {
            expanded.set(true);
        }
    }));

    use_effect(move || {
        let value = expanded();
        if !loaded() {
            return;
        }
        if let Some(preference) = preference.clone() {
            spawn(async move {
                preference.save(value).await;
            });
        }
    });

    let is_expanded = expanded();
    let show_children = is_expanded && !collapsed;
    let page_data = use_layout().data;

    rsx! {
        div {
            class: "nav-group",
            "data-active": if active { "true" } else { "false" },
            div {
                class: "nav-group-header",
                role: "button",
                "aria-expanded": if is_expanded { "true" } else { "false" },
                onclick: move |_| expanded.set(!is_expanded),
                if !collapsed {
                    span { class: "nav-group-label", "{label}" }
                }
                if is_expanded {
                    Icon::<FaChevronDown> { icon: FaChevronDown, width: 14, height: 14 }
                } else {
                    Icon::<FaChevronRight> { icon: FaChevronRight, width: 14, height: 14 }
                }
            }
            if show_children {
                ul { class: "nav-group-items",
                    {group.children.iter().map(|link| {
                        let key = link.id.clone();
                        let active = page_data.read().is_active(&link.id);
                        rsx! {
                            li { key: "{key}",
                                ItemLink { link: link.clone(), active: active }
                            }
                        }
                    })}
                }
            }
        }
    }
}

/// Link to a single module.
#[component]
pub fn ItemLink(link: ModuleLink, #[props(default = false)] active: bool) -> Element {
    let ModuleLink { title, url, .. } = link;

    rsx! {
        a {
            class: "nav-item-link",
            href: "{url}",
            "data-active": if active { "true" } else { "false" },
            "{title}"
        }
    }
}
