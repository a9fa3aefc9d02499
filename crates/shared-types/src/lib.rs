pub mod error;
pub mod feature_flags;

// Sidebar shell domain
pub mod navigation;
pub mod preference;
pub mod sidebar;

pub use error::*;
pub use feature_flags::*;
pub use navigation::*;
pub use preference::*;
pub use sidebar::*;
