//! Viewport tracking for the responsive layout.
//!
//! Reads the window size on mount and on every resize, stores it in the
//! viewport signal and lets [`CardStyle::apply_viewport`] decide whether
//! the mobile override kicks in.

use blockbeauty_core::{CardStyle, Viewport};
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

/// Window content size at mount.
pub fn use_initial_viewport() -> Viewport {
    let window = use_window();
    use_hook(move || {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Viewport::new(size.width, size.height)
    })
}

/// Style state for mount time, with the viewport already applied.
pub fn initial_style(viewport: Viewport) -> CardStyle {
    let mut style = CardStyle::new();
    style.apply_viewport(viewport);
    style
}

/// Keep `viewport` and the style's mobile flag in sync with window resizes.
pub fn use_responsive_layout(mut style: Signal<CardStyle>, mut viewport: Signal<Viewport>) {
    let window = use_window();

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let size = size.to_logical::<f64>(window.scale_factor());
            let next = Viewport::new(size.width, size.height);
            viewport.set(next);
            if style.write().apply_viewport(next) {
                tracing::info!(
                    "Mobile layout for {}x{} viewport",
                    next.width.round(),
                    next.height.round()
                );
            }
        }
    });
}
