//! Context providers for BlockBeauty.
//!
//! The root [`App`](crate::app::App) owns all shared state and provides it
//! here; components read and mutate it through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let mut style = use_card_style();
//! style.write().select_background(2);
//! ```

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use blockbeauty_core::{
    CardRasterizer, CardSnapshot, CardStyle, DownloadSaver, EditorOptions, Exporter,
    PointerCapture, ResizeController, Viewport,
};
use dioxus::prelude::*;

/// Settings taken from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where exported images are written
    pub output_dir: PathBuf,
    /// Font file for the rasterizer (platform default when unset)
    pub font: Option<PathBuf>,
    /// Editor and export font size
    pub font_size: f32,
}

/// Get the app configuration.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Exporter wired to the real rasterizer and download directory.
pub type AppExporter = Exporter<CardRasterizer, DownloadSaver>;

/// Shared exporter handle for context.
#[derive(Clone)]
pub struct SharedExporter(pub Arc<AppExporter>);

impl SharedExporter {
    pub fn new(config: &AppConfig) -> Self {
        let exporter = Exporter::new(
            CardRasterizer::new(config.font.clone()),
            DownloadSaver::new(config.output_dir.clone()),
        );
        tracing::info!("Exports go to {}", exporter.saver().dir().display());
        Self(Arc::new(exporter))
    }
}

/// Mounted card element, `None` until the card is in the webview.
#[derive(Clone, Copy)]
pub struct CardMount(pub Signal<Option<Rc<MountedData>>>);

impl CardMount {
    pub fn is_attached(&self) -> bool {
        self.0.read().is_some()
    }

    /// Snapshot the card for export, if it is attached.
    pub fn snapshot(&self, style: &CardStyle, options: &EditorOptions) -> Option<CardSnapshot> {
        self.is_attached()
            .then(|| CardSnapshot::capture(style, options))
    }
}

/// Pointer capture backed by the full-window drag overlay.
///
/// Acquiring renders the overlay, which carries the move/up listeners;
/// releasing removes it together with its listeners.
#[derive(Clone, Copy)]
pub struct OverlayCapture(pub Signal<bool>);

impl PointerCapture for OverlayCapture {
    fn acquire(&self) {
        let mut active = self.0;
        active.set(true);
    }

    fn release(&self) {
        let mut active = self.0;
        active.set(false);
    }
}

/// Resize controller for the two card handles.
#[derive(Clone, Copy)]
pub struct ResizeState {
    pub controller: Signal<ResizeController<OverlayCapture>>,
    pub capturing: Signal<bool>,
}

/// Hook to access the card style state.
pub fn use_card_style() -> Signal<CardStyle> {
    use_context::<Signal<CardStyle>>()
}

/// Hook to access the current viewport size.
pub fn use_viewport() -> Signal<Viewport> {
    use_context::<Signal<Viewport>>()
}

/// Hook to access the editor display options.
pub fn use_editor_options() -> Signal<EditorOptions> {
    use_context::<Signal<EditorOptions>>()
}

pub fn use_card_mount() -> CardMount {
    use_context::<CardMount>()
}

pub fn use_resize_state() -> ResizeState {
    use_context::<ResizeState>()
}

pub fn use_exporter() -> SharedExporter {
    use_context::<SharedExporter>()
}
