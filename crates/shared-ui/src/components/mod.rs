// Shared layout state; everything below reads it.
pub mod sidebar;

// Surfaces that consume the layout context
pub mod pin_toggle;
pub mod sidebar_nav;

// Re-exports for convenience
pub use pin_toggle::*;
pub use sidebar::*;
pub use sidebar_nav::*;
