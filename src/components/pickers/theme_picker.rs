//! Syntax theme picker.

use blockbeauty_core::{PickerState, SyntaxTheme};
use dioxus::prelude::*;

use super::{option_class, Popover};
use crate::context::use_card_style;

#[component]
pub fn ThemePicker() -> Element {
    let mut style = use_card_style();
    let mut state = use_signal(PickerState::default);
    let current = style.read().theme();

    rsx! {
        Popover {
            state,
            popup_height: 296.0,
            label: rsx! { "{current.name()}" },
            ul { class: "picker-list",
                for theme in SyntaxTheme::ALL {
                    li {
                        key: "{theme.name()}",
                        class: option_class(theme == current),
                        onclick: move |_| {
                            style.write().set_theme(theme);
                            let next = state.peek().select();
                            state.set(next);
                        },
                        "{theme.name()}"
                    }
                }
            }
        }
    }
}
