pub mod menu;

pub use menu::{Document, MenuOverlay, ScrollLock};
