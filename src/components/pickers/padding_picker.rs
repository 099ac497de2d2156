//! Inline padding selector.

use blockbeauty_core::Padding;
use blockbeauty_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_card_style;

#[component]
pub fn PaddingPicker() -> Element {
    let mut style = use_card_style();
    let current = style.read().padding();

    rsx! {
        div { class: "padding-picker",
            span { "Padding" }
            for padding in Padding::ALL {
                Button {
                    key: "{padding.index()}",
                    variant: ButtonVariant::Chip,
                    active: padding == current,
                    title: format!("{}px", padding.pixels()),
                    onclick: move |_| {
                        style.write().select_padding(padding.index());
                    },
                    "{padding.label()}"
                }
            }
        }
    }
}
