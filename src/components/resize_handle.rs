//! Resize Handles
//!
//! Two drag handles on the card (left edge for width, bottom edge for
//! height) and the full-window overlay that follows the pointer while a
//! drag is live.

use blockbeauty_core::{Axis, PointerPos};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::context::{use_card_style, use_resize_state};

fn pointer(evt: &MouseEvent) -> PointerPos {
    let point = evt.client_coordinates();
    PointerPos::new(point.x, point.y)
}

/// Drag handle for one card axis.
#[component]
pub fn ResizeHandle(axis: Axis) -> Element {
    let style = use_card_style();
    let resize = use_resize_state();
    let mut controller = resize.controller;

    let active = controller.read().active_axis() == Some(axis);
    let class = match (axis, active) {
        (Axis::Width, false) => "resize-handle resize-handle--width",
        (Axis::Width, true) => "resize-handle resize-handle--width is-active",
        (Axis::Height, false) => "resize-handle resize-handle--height",
        (Axis::Height, true) => "resize-handle resize-handle--height is-active",
    };

    rsx! {
        div {
            class: "{class}",
            title: "Drag to resize {axis.label().to_lowercase()}",
            onmousedown: move |evt: MouseEvent| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                evt.prevent_default();
                controller.write().press(axis, pointer(&evt), &style.read());
            },
        }
    }
}

/// Full-window layer carrying the move/up listeners of a live drag.
///
/// Rendered only while the resize controller holds pointer capture, so
/// the listeners disappear with the gesture.
#[component]
pub fn DragCapture() -> Element {
    let mut style = use_card_style();
    let resize = use_resize_state();
    let mut controller = resize.controller;

    let class = match controller.read().active_axis() {
        Some(Axis::Height) => "drag-capture drag-capture--height",
        _ => "drag-capture drag-capture--width",
    };

    rsx! {
        div {
            class: "{class}",
            onmousemove: move |evt: MouseEvent| {
                if !evt.held_buttons().contains(MouseButton::Primary) {
                    // Button came up outside the window.
                    controller.write().release();
                    return;
                }
                controller.write().drag(pointer(&evt), &mut style.write());
            },
            onmouseup: move |_| {
                controller.write().release();
            },
        }
    }
}
