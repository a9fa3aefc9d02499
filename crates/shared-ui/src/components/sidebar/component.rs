use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{
    AppConfig, FeatureFlags, LayoutData, PinnedPreference, PointerTarget, SidebarGeometry,
    SidebarPhase, SidebarVisibility,
};

use crate::outside_pointer::use_outside_pointer_down;
use crate::storage::StorageBackend;
use crate::SidebarNav;

/// DOM id of the region holding the sidebar panel and its pin toggle.
/// Pointer-downs outside this element collapse a hover-expanded sidebar.
pub const SIDEBAR_REGION_ID: &str = "guide-desktop-sidebar";

// ─── Context ───────────────────────────────────────────────────────────

/// Layout state shared by the sidebar panel, the detached pin toggle and
/// the navigation list.
///
/// Holds the one authoritative [`SidebarVisibility`] for the page. Reading
/// any accessor subscribes the calling component, so every consumer
/// re-renders in the same pass when a mutator runs.
#[derive(Clone, Copy, PartialEq)]
pub struct LayoutContext {
    visibility: Signal<SidebarVisibility>,
    hydrated: Signal<bool>,
    pub data: Signal<LayoutData>,
    pub flags: FeatureFlags,
    pub geometry: SidebarGeometry,
}

impl LayoutContext {
    pub fn visibility(&self) -> SidebarVisibility {
        (self.visibility)()
    }

    pub fn pinned(&self) -> bool {
        self.visibility().pinned()
    }

    pub fn hovering(&self) -> bool {
        self.visibility().hovering()
    }

    pub fn collapsed(&self) -> bool {
        self.visibility().collapsed()
    }

    pub fn phase(&self) -> SidebarPhase {
        self.visibility().phase()
    }

    /// False until the persisted preference has been applied on the client.
    pub fn is_hydrated(&self) -> bool {
        (self.hydrated)()
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.update(|v| v.set_pinned(pinned));
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.update(|v| v.set_hovering(hovering));
    }

    pub fn toggle_pinned(&mut self) {
        self.update(SidebarVisibility::toggle_pinned);
    }

    pub fn pointer_enter(&mut self) {
        if self.flags.hover_expand {
            self.update(SidebarVisibility::pointer_enter);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.flags.hover_expand {
            self.update(SidebarVisibility::pointer_leave);
        }
    }

    pub fn outside_pointer_down(&mut self, target: PointerTarget) {
        self.update(|v| v.outside_pointer_down(target));
    }

    fn mark_hydrated(&mut self) {
        self.hydrated.set(true);
    }

    /// Apply a transition and publish it only if something changed.
    fn update(&mut self, transition: impl FnOnce(&mut SidebarVisibility) -> bool) {
        let mut next = *self.visibility.peek();
        if transition(&mut next) {
            tracing::debug!(phase = next.phase().as_str(), "sidebar visibility changed");
            self.visibility.set(next);
        }
    }
}

/// Hook to access the layout context.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>()
}

/// Owns the layout context for one page mount.
///
/// Renders collapsed and unpinned on the server and on the first client
/// render, then loads the pinned preference from `storage` and writes it
/// back on every change.
#[component]
pub fn SidebarLayoutProvider(
    data: LayoutData,
    #[props(default)] config: AppConfig,
    #[props(default)] storage: StorageBackend,
    children: Element,
) -> Element {
    let flags = config.features;
    let ctx = use_context_provider(|| LayoutContext {
        visibility: Signal::new(SidebarVisibility::default()),
        hydrated: Signal::new(false),
        data: Signal::new(data.clone()),
        flags,
        geometry: config.sidebar.geometry(),
    });
    use_context_provider(|| storage.clone());

    let preference = use_hook(|| {
        Rc::new(PinnedPreference::pinned(
            storage.clone(),
            &config.sidebar.storage_namespace,
        ))
    });

    // Effects only run on the client, after the first render.
    {
        let preference = preference.clone();
        use_effect(move || {
            let preference = preference.clone();
            spawn(async move {
                let mut ctx = ctx;
                if flags.persist_pin {
                    if let Some(pinned) = preference.load().await {
                        ctx.set_pinned(pinned);
                    }
                }
                ctx.mark_hydrated();
            });
        });
    }

    // Subscribes to `pinned` only. Hydration itself must not trigger a
    // write of the default value.
    let pinned = use_memo(move || ctx.pinned());
    use_effect(move || {
        let pinned = pinned();
        if !flags.persist_pin || !*ctx.hydrated.peek() {
            return;
        }
        let preference = preference.clone();
        spawn(async move {
            preference.save(pinned).await;
        });
    });

    rsx! {
        {children}
    }
}

// ─── Region ────────────────────────────────────────────────────────────

/// Hover and outside-click boundary for the sidebar.
///
/// Wraps the panel and the detached pin toggle so that moving onto or
/// pressing the toggle never counts as leaving the sidebar.
#[component]
pub fn SidebarRegion(children: Element) -> Element {
    let mut ctx = use_layout();

    use_outside_pointer_down(
        SIDEBAR_REGION_ID,
        ctx.flags.outside_click_collapse,
        use_callback(move |target| ctx.outside_pointer_down(target)),
    );

    rsx! {
        div {
            id: SIDEBAR_REGION_ID,
            class: "sidebar-region",
            onmouseenter: move |_| ctx.pointer_enter(),
            onmouseleave: move |_| ctx.pointer_leave(),
            {children}
        }
    }
}

// ─── Panel ─────────────────────────────────────────────────────────────

/// Fixed desktop sidebar: brand slot, navigation list and footer.
///
/// Width follows `collapsed`. Place it inside a [`SidebarRegion`] next to
/// the [`PinToggle`](crate::PinToggle).
#[component]
pub fn DesktopSidebar(
    brand: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_layout();
    let collapsed = ctx.collapsed();
    let width = ctx.geometry.width_px(collapsed);

    let base = vec![
        Attribute::new("class", "desktop-sidebar", None, false),
        Attribute::new("data-state", ctx.phase().as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            style: "width: {width}px",
            ..merged,
            aside {
                class: "desktop-sidebar-panel",
                style: "width: {width}px",
                div { class: "desktop-sidebar-top",
                    div {
                        class: "desktop-sidebar-brand",
                        "data-collapsed": if collapsed { "true" } else { "false" },
                        {brand}
                    }
                    SidebarNav {}
                }
                div { class: "desktop-sidebar-footer", {children} }
            }
        }
    }
}
