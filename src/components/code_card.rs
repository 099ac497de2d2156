//! Code Card Component
//!
//! The exported artifact: a gradient frame around a window-chrome panel
//! holding the code editor, plus the two resize handles and the size
//! readout underneath.

use blockbeauty_core::{Axis, Highlighter, SyntaxTheme};
use dioxus::prelude::*;

use crate::components::{CodeEditor, ResizeHandle};
use crate::context::{use_card_mount, use_card_style, use_editor_options};

/// Inline style for the window panel: theme background at 85% opacity.
fn window_style(theme: SyntaxTheme) -> String {
    match Highlighter::shared().palette(theme) {
        Ok((bg, fg)) => format!(
            "background: rgba({}, {}, {}, 0.85); color: {};",
            bg.0,
            bg.1,
            bg.2,
            fg.hex()
        ),
        Err(e) => {
            tracing::warn!("No palette for {}: {}", theme.name(), e);
            String::new()
        }
    }
}

#[component]
pub fn CodeCard() -> Element {
    let mut style = use_card_style();
    let options = use_editor_options();
    let mut mounted = use_card_mount().0;

    use_drop(move || mounted.set(None));

    let (card_css, width, height, theme, language, filename, source) = {
        let s = style.read();
        (
            format!(
                "width: {}px; height: {}px; padding: {}px; background: {};",
                s.width(),
                s.height(),
                s.padding().pixels(),
                s.background().css()
            ),
            s.width(),
            s.height(),
            s.theme(),
            s.language(),
            s.filename().to_string(),
            s.source().to_string(),
        )
    };
    let current_theme = use_memo(move || style.read().theme());
    let window_css = use_memo(move || window_style(current_theme()));

    rsx! {
        div { class: "card-frame",
            ResizeHandle { axis: Axis::Width }
            div {
                class: "card",
                style: "{card_css}",
                onmounted: move |evt: MountedEvent| {
                    tracing::debug!("Card attached");
                    mounted.set(Some(evt.data()));
                },
                div { class: "card__window", style: "{window_css}",
                    div { class: "card__titlebar",
                        span { class: "card__dot" }
                        span { class: "card__dot" }
                        span { class: "card__dot" }
                        input {
                            class: "card__filename",
                            r#type: "text",
                            spellcheck: "false",
                            value: "{filename}",
                            oninput: move |evt: FormEvent| style.write().set_filename(evt.value()),
                        }
                    }
                    CodeEditor {
                        value: source,
                        language,
                        theme,
                        options: options.read().clone(),
                        on_change: move |text: String| style.write().set_source(text),
                    }
                }
            }
            ResizeHandle { axis: Axis::Height }
        }
        div { class: "card-readout", "{width} × {height}" }
    }
}
