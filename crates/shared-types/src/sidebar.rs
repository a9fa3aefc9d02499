use serde::{Deserialize, Serialize};

/// The two independent signals that decide whether the desktop sidebar is
/// expanded.
///
/// `collapsed` is never stored; it is recomputed from `pinned` and
/// `hovering` on every read. Fields are private so the mutators below are
/// the only way to change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarVisibility {
    pinned: bool,
    hovering: bool,
}

/// Display phase derived from [`SidebarVisibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPhase {
    Collapsed,
    HoverExpanded,
    PinnedExpanded,
}

impl SidebarPhase {
    /// Value for the `data-state` attribute on the sidebar panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarPhase::Collapsed => "collapsed",
            SidebarPhase::HoverExpanded => "hover-expanded",
            SidebarPhase::PinnedExpanded => "pinned-expanded",
        }
    }
}

/// Where a global pointer-down landed relative to the sidebar region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
    /// The sidebar region has not rendered yet, so containment cannot be
    /// decided. Treated as "not outside".
    Unknown,
}

impl PointerTarget {
    /// Classify a containment check that may not have had a region to test.
    pub fn from_containment(contained: Option<bool>) -> Self {
        match contained {
            Some(true) => PointerTarget::Inside,
            Some(false) => PointerTarget::Outside,
            None => PointerTarget::Unknown,
        }
    }
}

impl SidebarVisibility {
    pub const fn new(pinned: bool, hovering: bool) -> Self {
        Self { pinned, hovering }
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn collapsed(&self) -> bool {
        !self.pinned && !self.hovering
    }

    pub fn phase(&self) -> SidebarPhase {
        match (self.pinned, self.hovering) {
            (true, _) => SidebarPhase::PinnedExpanded,
            (false, true) => SidebarPhase::HoverExpanded,
            (false, false) => SidebarPhase::Collapsed,
        }
    }

    /// Set the pinned flag. Returns `true` if the state changed.
    pub fn set_pinned(&mut self, pinned: bool) -> bool {
        let changed = self.pinned != pinned;
        self.pinned = pinned;
        changed
    }

    /// Set the hovering flag unconditionally. Returns `true` if the state
    /// changed.
    ///
    /// Hover handlers and the outside-click detector should go through
    /// [`pointer_enter`](Self::pointer_enter),
    /// [`pointer_leave`](Self::pointer_leave) and
    /// [`outside_pointer_down`](Self::outside_pointer_down), which skip the
    /// write while pinned.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    /// Flip `pinned`. Pinning also drops `hovering`: hover handlers are
    /// gated while pinned, so a hover flag kept across the pin would
    /// re-expand the sidebar on unpin.
    pub fn toggle_pinned(&mut self) -> bool {
        let pinning = !self.pinned;
        if pinning {
            self.hovering = false;
        }
        self.set_pinned(pinning)
    }

    /// Pointer entered the sidebar region.
    pub fn pointer_enter(&mut self) -> bool {
        if self.pinned {
            return false;
        }
        self.set_hovering(true)
    }

    /// Pointer left the sidebar region.
    pub fn pointer_leave(&mut self) -> bool {
        if self.pinned {
            return false;
        }
        self.set_hovering(false)
    }

    /// A pointer-down happened somewhere in the document.
    pub fn outside_pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.pinned || target != PointerTarget::Outside {
            return false;
        }
        self.set_hovering(false)
    }
}

/// Pixel geometry of the desktop sidebar and its detached pin toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarGeometry {
    pub collapsed_width_px: u32,
    pub expanded_width_px: u32,
    pub toggle_size_px: u32,
}

impl Default for SidebarGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SidebarGeometry {
    /// 5rem collapsed, 20rem expanded, 44px round toggle.
    pub const DEFAULT: SidebarGeometry = SidebarGeometry {
        collapsed_width_px: 80,
        expanded_width_px: 320,
        toggle_size_px: 44,
    };

    pub fn width_px(&self, collapsed: bool) -> u32 {
        if collapsed {
            self.collapsed_width_px
        } else {
            self.expanded_width_px
        }
    }

    /// Horizontal offset that centres the pin toggle on the sidebar edge.
    pub fn toggle_left_px(&self, collapsed: bool) -> i32 {
        self.width_px(collapsed) as i32 - (self.toggle_size_px / 2) as i32
    }
}
