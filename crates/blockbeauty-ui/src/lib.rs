//! BlockBeauty UI Components
//!
//! Small Dioxus widgets shared by the desktop app: toolbar buttons and
//! gradient swatches. Styling comes from the app's global stylesheet;
//! components only emit class names.

pub mod components;

pub use components::*;
