//! BlockBeauty Core Library
//!
//! Style state, interaction logic and PNG export for code cards.
//!
//! ## Overview
//!
//! A card is a block of highlighted source code on a gradient background.
//! The desktop app owns one [`CardStyle`] and routes every pointer,
//! keyboard and viewport event through the types in this crate:
//!
//! - [`resize`]: drag gestures on the width/height handles
//! - [`picker`]: open/close state and placement of option popups
//! - [`responsive`]: mobile layout override from the viewport size
//! - [`export`]: snapshot → save pipeline behind [`Rasterizer`] and [`ImageSaver`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use blockbeauty_core::{CardRasterizer, CardSnapshot, CardStyle, DownloadSaver, EditorOptions, Exporter};
//!
//! let mut style = CardStyle::new();
//! style.select_background(3);
//! style.set_source("fn main() {}\n");
//!
//! let exporter = Exporter::new(CardRasterizer::new(None), DownloadSaver::new("./out"));
//! let card = CardSnapshot::capture(&style, &EditorOptions::default());
//! exporter.export(Some(&card));
//! ```

pub mod dimension;
pub mod error;
pub mod export;
pub mod highlight;
pub mod picker;
pub mod render;
pub mod resize;
pub mod responsive;
pub mod style;

// Re-exports
pub use dimension::{Axis, Preset, STEP};
pub use error::{ExportError, ExportResult};
pub use export::{
    CardImage, CardSnapshot, DownloadSaver, ExportOutcome, Exporter, ImageSaver, Rasterizer,
    EXPORT_FILENAME,
};
pub use highlight::{EditorOptions, HighlightedCode, Highlighter, Language, Span, SyntaxTheme};
pub use picker::{placement, Placement, PickerState, PressTarget, TriggerRect};
pub use render::CardRasterizer;
pub use resize::{CaptureGuard, PointerCapture, PointerPos, ResizeController, ResizeGesture};
pub use responsive::{Viewport, MOBILE_BREAKPOINT};
pub use style::{Background, CardStyle, Padding, Rgb};
