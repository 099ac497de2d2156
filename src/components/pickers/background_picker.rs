//! Background gradient picker.

use blockbeauty_core::{Background, PickerState};
use blockbeauty_ui::GradientSwatch;
use dioxus::prelude::*;

use super::{option_class, Popover};
use crate::context::use_card_style;

#[component]
pub fn BackgroundPicker() -> Element {
    let mut style = use_card_style();
    let mut state = use_signal(PickerState::default);
    let current = style.read().background();

    rsx! {
        Popover {
            state,
            popup_height: 120.0,
            title: "Card background".to_string(),
            label: rsx! {
                GradientSwatch { background: current, labelled: false }
                "Background"
            },
            ul { class: "picker-grid",
                for background in Background::ALL {
                    li {
                        key: "{background.index()}",
                        class: option_class(background == current),
                        onclick: move |_| {
                            style.write().select_background(background.index());
                            let next = state.peek().select();
                            state.set(next);
                        },
                        GradientSwatch { background }
                    }
                }
            }
        }
    }
}
