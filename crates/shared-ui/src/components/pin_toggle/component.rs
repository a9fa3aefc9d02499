use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaThumbtack;
use dioxus_free_icons::Icon;

use crate::use_layout;

/// Round pin button straddling the sidebar edge.
///
/// Rendered as a sibling of [`DesktopSidebar`](crate::DesktopSidebar), not
/// a child, and only once the persisted preference has been applied so it
/// never shows the default icon for a pinned user.
#[component]
pub fn PinToggle() -> Element {
    let mut ctx = use_layout();
    if !ctx.is_hydrated() {
        return rsx! {};
    }

    let collapsed = ctx.collapsed();
    rsx! {
        PinToggleButton {
            pinned: ctx.pinned(),
            left_px: ctx.geometry.toggle_left_px(collapsed),
            size_px: ctx.geometry.toggle_size_px,
            onclick: move |_| ctx.toggle_pinned(),
        }
    }
}

/// Presentational half of [`PinToggle`].
#[component]
pub fn PinToggleButton(
    pinned: bool,
    left_px: i32,
    size_px: u32,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let label = if pinned { "Unpin Sidebar" } else { "Pin Sidebar" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "pin-toggle",
            r#type: "button",
            "aria-label": label,
            "aria-pressed": if pinned { "true" } else { "false" },
            "data-pinned": if pinned { "true" } else { "false" },
            style: "left: {left_px}px; width: {size_px}px; height: {size_px}px",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            Icon::<FaThumbtack> { icon: FaThumbtack, width: 18, height: 18 }
        }
    }
}
