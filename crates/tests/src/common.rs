use shared_types::{
    pinned_key, MemoryStorage, PinnedPreference, PointerTarget, SidebarGeometry, SidebarPhase,
    SidebarVisibility, DEFAULT_NAMESPACE,
};

/// Storage key the default config persists the pin under.
pub fn default_pinned_key() -> String {
    pinned_key(DEFAULT_NAMESPACE)
}

/// One page mount of the sidebar, driven the way the layout provider
/// drives it: a collapsed first render, a load from storage, then a save
/// after every pinned change.
pub struct SidebarSession {
    pub visibility: SidebarVisibility,
    pub hydrated: bool,
    preference: PinnedPreference<MemoryStorage>,
}

impl SidebarSession {
    /// First render only. Nothing has been read from storage yet.
    pub fn render(storage: &MemoryStorage) -> Self {
        Self {
            visibility: SidebarVisibility::default(),
            hydrated: false,
            preference: PinnedPreference::pinned(storage.clone(), DEFAULT_NAMESPACE),
        }
    }

    /// First render followed by hydration.
    pub async fn mount(storage: &MemoryStorage) -> Self {
        let mut session = Self::render(storage);
        session.hydrate().await;
        session
    }

    pub async fn hydrate(&mut self) {
        if let Some(pinned) = self.preference.load().await {
            self.visibility.set_pinned(pinned);
        }
        self.hydrated = true;
    }

    pub fn phase(&self) -> SidebarPhase {
        self.visibility.phase()
    }

    pub fn hover(&mut self) {
        self.visibility.pointer_enter();
    }

    pub fn leave(&mut self) {
        self.visibility.pointer_leave();
    }

    pub fn click_outside(&mut self) {
        self.visibility.outside_pointer_down(PointerTarget::Outside);
    }

    pub fn click_inside(&mut self) {
        self.visibility.outside_pointer_down(PointerTarget::Inside);
    }

    /// Left offset of the pin toggle in the current state.
    pub fn toggle_left_px(&self) -> i32 {
        SidebarGeometry::DEFAULT.toggle_left_px(self.visibility.collapsed())
    }

    /// Press and release on the pin toggle. The toggle shares the
    /// sidebar's region, so its pointer-down is classified as inside.
    pub async fn click_pin_toggle(&mut self) {
        self.press_pin_toggle();
        self.release_pin_toggle().await;
    }

    pub fn press_pin_toggle(&mut self) {
        self.visibility.outside_pointer_down(PointerTarget::Inside);
    }

    pub async fn release_pin_toggle(&mut self) {
        if self.visibility.toggle_pinned() {
            self.persist().await;
        }
    }

    async fn persist(&self) {
        if self.hydrated {
            self.preference.save(self.visibility.pinned()).await;
        }
    }
}
