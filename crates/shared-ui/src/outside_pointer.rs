//! Document-wide pointer-down listener scoped to a component's lifetime.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::PointerTarget;

/// Registry on `window` holding one release function per live listener.
const REGISTRY: &str = "__sidebarPointerListeners";

/// Handle for one registered `pointerdown` listener.
///
/// The JS side posts `true`/`false` for inside/outside the region, or
/// `null` when the region element is not in the document.
struct OutsidePointerListener {
    id: String,
    registered: Cell<bool>,
}

impl OutsidePointerListener {
    fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            registered: Cell::new(false),
        }
    }

    fn register(&self, region_id: &str) -> Option<document::Eval> {
        if self.registered.replace(true) {
            return None;
        }
        tracing::debug!(listener = %self.id, region = region_id, "registering outside pointer listener");
        Some(document::eval(&register_script(&self.id, region_id)))
    }

    fn unregister(&self) {
        if self.registered.replace(false) {
            tracing::debug!(listener = %self.id, "removing outside pointer listener");
            document::eval(&unregister_script(&self.id));
        }
    }
}

fn register_script(listener_id: &str, region_id: &str) -> String {
    format!(
        r#"
        const registry = (window.{REGISTRY} = window.{REGISTRY} || {{}});
        await new Promise((resolve) => {{
            const handler = (event) => {{
                const region = document.getElementById("{region_id}");
                dioxus.send(region ? region.contains(event.target) : null);
            }};
            document.addEventListener("pointerdown", handler, true);
            registry["{listener_id}"] = () => {{
                document.removeEventListener("pointerdown", handler, true);
                delete registry["{listener_id}"];
                resolve();
            }};
        }});
        "#
    )
}

fn unregister_script(listener_id: &str) -> String {
    format!(
        r#"
        const registry = window.{REGISTRY};
        if (registry && registry["{listener_id}"]) {{
            registry["{listener_id}"]();
        }}
        "#
    )
}

/// Call `on_pointer_down` for every pointer-down anywhere in the document,
/// classified against the element with id `region_id`.
///
/// The listener is attached after mount and removed when the calling
/// component unmounts. With `enabled == false` nothing is attached.
pub fn use_outside_pointer_down(
    region_id: &'static str,
    enabled: bool,
    on_pointer_down: Callback<PointerTarget>,
) {
    let listener = use_hook(|| Rc::new(OutsidePointerListener::new()));

    {
        let listener = listener.clone();
        use_effect(move || {
            if !enabled {
                return;
            }
            let Some(mut eval) = listener.register(region_id) else {
                return;
            };
            spawn(async move {
                while let Ok(contained) = eval.recv::<Option<bool>>().await {
                    on_pointer_down.call(PointerTarget::from_containment(contained));
                }
            });
        });
    }

    use_drop(move || listener.unregister());
}
