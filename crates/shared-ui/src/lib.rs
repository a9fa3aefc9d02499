pub mod components;
pub mod outside_pointer;
pub mod storage;


pub use components::*;
pub use outside_pointer::use_outside_pointer_down;
pub use storage::{BrowserStorage, StorageBackend};
