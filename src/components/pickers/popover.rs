//! Popover shell shared by the floating pickers.
//!
//! Owns nothing but the trigger element; the open state lives in the
//! caller's `Signal<PickerState>` so option handlers can close it.

use std::rc::Rc;

use blockbeauty_core::{placement, Placement, PickerState, PressTarget, TriggerRect};
use blockbeauty_ui::{Button, ButtonVariant, Chevron};
use dioxus::prelude::*;

use crate::context::use_viewport;

/// Feed a press to the picker, writing only when it changes the state.
fn press(mut state: Signal<PickerState>, target: PressTarget) {
    let current = *state.peek();
    let next = current.press(target);
    if next != current {
        state.set(next);
    }
}

/// Trigger button plus a popup that opens below it, or above when the
/// viewport has no room underneath.
///
/// # Example
///
/// ```rust,ignore
/// let state = use_signal(PickerState::default);
/// rsx! {
///     Popover { state, popup_height: 200.0, label: rsx! { "Theme" },
///         ul { class: "picker-list", /* options */ }
///     }
/// }
/// ```
#[component]
pub fn Popover(
    state: Signal<PickerState>,
    /// Height the popup needs, used to choose its direction
    popup_height: f64,
    /// Trigger content
    label: Element,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let viewport = use_viewport();
    let mut trigger: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let current = state();
    let wrapper_class = if current.is_open() {
        "picker is-open"
    } else {
        "picker"
    };

    let toggle = move |_| {
        let mut state = state;
        spawn(async move {
            let current = *state.peek();
            if current.is_open() {
                state.set(current.toggle(Placement::Below));
                return;
            }
            let element = trigger.peek().clone();
            let side = match element {
                Some(el) => match el.get_client_rect().await {
                    Ok(rect) => placement(
                        TriggerRect::new(rect.origin.y, rect.size.height),
                        popup_height,
                        viewport.peek().height,
                    ),
                    Err(e) => {
                        tracing::debug!("Trigger rect unavailable: {:?}", e);
                        Placement::Below
                    }
                },
                None => Placement::Below,
            };
            state.set(current.toggle(side));
        });
    };

    rsx! {
        if current.is_open() {
            div {
                class: "picker-backdrop",
                onmousedown: move |_| press(state, PressTarget::Outside),
            }
        }
        div { class: "{wrapper_class}",
            div {
                onmounted: move |evt: MountedEvent| trigger.set(Some(evt.data())),
                onmousedown: move |_| press(state, PressTarget::Trigger),
                Button {
                    variant: ButtonVariant::Outline,
                    active: current.is_open(),
                    title: title.clone().unwrap_or_default(),
                    onclick: toggle,
                    {label}
                    Chevron { up: current == PickerState::OpenUp }
                }
            }
            div {
                class: "{current.class()}",
                onmousedown: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    press(state, PressTarget::Popup);
                },
                {children}
            }
        }
    }
}
