use std::rc::Rc;

use blockbeauty_core::{EditorOptions, ResizeController};
use dioxus::prelude::*;

use crate::components::{CodeCard, DragCapture, Toolbar};
use crate::context::{
    get_config, CardMount, OverlayCapture, ResizeState, SharedExporter,
};
use crate::responsive::{initial_style, use_initial_viewport, use_responsive_layout};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the card style state and every other piece of shared state, and
/// provides them to the tree through context.
#[component]
pub fn App() -> Element {
    let config = get_config();
    let initial_viewport = use_initial_viewport();

    let style = use_signal(move || initial_style(initial_viewport));
    let viewport = use_signal(move || initial_viewport);
    let font_size = config.font_size;
    let options = use_signal(move || EditorOptions {
        font_size,
        ..Default::default()
    });
    let card_mount: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let capturing = use_signal(|| false);
    let controller = use_signal(move || ResizeController::new(OverlayCapture(capturing)));

    use_context_provider(|| style);
    use_context_provider(|| viewport);
    use_context_provider(|| options);
    use_context_provider(|| CardMount(card_mount));
    use_context_provider(|| ResizeState {
        controller,
        capturing,
    });
    use_context_provider(move || SharedExporter::new(&config));

    use_responsive_layout(style, viewport);

    let app_class = if style.read().is_mobile_layout() {
        "app app--mobile"
    } else {
        "app"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "{app_class}",
            CodeCard {}
            Toolbar {}
            if capturing() {
                DragCapture {}
            }
        }
    }
}
