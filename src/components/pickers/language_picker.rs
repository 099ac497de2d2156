//! Highlighting language picker.

use blockbeauty_core::{Language, PickerState};
use dioxus::prelude::*;

use super::{option_class, Popover};
use crate::context::use_card_style;

/// Popup is capped at 16rem and scrolls past that.
const POPUP_HEIGHT: f64 = 272.0;

#[component]
pub fn LanguagePicker() -> Element {
    let mut style = use_card_style();
    let mut state = use_signal(PickerState::default);
    let current = style.read().language();

    rsx! {
        Popover {
            state,
            popup_height: POPUP_HEIGHT,
            label: rsx! { "{current.name()}" },
            ul { class: "picker-list",
                for language in Language::ALL {
                    li {
                        key: "{language.name()}",
                        class: option_class(language == current),
                        onclick: move |_| {
                            style.write().set_language(language);
                            let next = state.peek().select();
                            state.set(next);
                        },
                        "{language.name()}"
                    }
                }
            }
        }
    }
}
