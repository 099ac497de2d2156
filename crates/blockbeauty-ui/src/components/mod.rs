//! Reusable UI components
//!
//! All components render plain elements with BEM-style classes defined in
//! the desktop app's `GLOBAL_STYLES`.

mod button;
mod swatch;

pub use button::*;
pub use swatch::*;
