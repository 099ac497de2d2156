//! Width / height picker.
//!
//! Slider, numeric field, steppers and presets all write through the
//! clamped setters on [`CardStyle`](blockbeauty_core::CardStyle). The
//! numeric field ignores out-of-range text instead of clamping it, so a
//! half-typed value never snaps the card.

use blockbeauty_core::{Axis, PickerState, STEP};
use blockbeauty_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use super::Popover;
use crate::context::use_card_style;

const POPUP_HEIGHT: f64 = 200.0;

#[component]
pub fn DimensionPicker(axis: Axis) -> Element {
    let mut style = use_card_style();
    let state = use_signal(PickerState::default);
    let value = style.read().dimension(axis);
    let (min, max) = (axis.min(), axis.max());

    rsx! {
        Popover {
            state,
            popup_height: POPUP_HEIGHT,
            title: format!("Card {}", axis.label().to_lowercase()),
            label: rsx! { "{axis.label()}" },
            div { class: "dimension-popup",
                div { class: "dimension-popup__row",
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: format!("-{STEP}px"),
                        disabled: value <= min,
                        onclick: move |_| {
                            style.write().step_dimension_down(axis);
                        },
                        "−"
                    }
                    input {
                        class: "dimension-popup__slider",
                        r#type: "range",
                        min: "{min}",
                        max: "{max}",
                        step: "{STEP}",
                        value: "{value}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(candidate) = evt.value().parse::<i64>() {
                                style.write().set_dimension(axis, candidate);
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: format!("+{STEP}px"),
                        disabled: value >= max,
                        onclick: move |_| {
                            style.write().step_dimension_up(axis);
                        },
                        "+"
                    }
                }
                div { class: "dimension-popup__row",
                    input {
                        class: "dimension-popup__input",
                        r#type: "number",
                        min: "{min}",
                        max: "{max}",
                        value: "{value}",
                        oninput: move |evt: FormEvent| {
                            let text = evt.value();
                            if axis.parse_input(&text).is_some() {
                                style.write().input_dimension(axis, &text);
                            } else {
                                tracing::trace!("Ignoring {} input {:?}", axis.label(), text);
                            }
                        },
                    }
                    span { "px" }
                }
                div { class: "dimension-popup__presets",
                    for (index, preset) in axis.presets().iter().enumerate() {
                        Button {
                            key: "{preset.label}",
                            variant: ButtonVariant::Chip,
                            active: preset.value == value,
                            title: format!("{}px", preset.value),
                            onclick: move |_| {
                                style.write().apply_preset(axis, index);
                            },
                            "{preset.label}"
                        }
                    }
                }
                div { class: "dimension-popup__bounds",
                    span { "{min}px" }
                    span { "{max}px" }
                }
            }
        }
    }
}
