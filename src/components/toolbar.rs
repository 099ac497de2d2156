//! Toolbar
//!
//! Bottom control strip: style pickers, editor toggles and the export
//! button. Wraps onto several rows in the mobile layout.

use blockbeauty_core::Axis;
use blockbeauty_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::pickers::{
    BackgroundPicker, DimensionPicker, LanguagePicker, PaddingPicker, ThemePicker,
};
use crate::components::ExportButton;
use crate::context::use_editor_options;

/// Word wrap and minimap switches for the editor.
#[component]
fn EditorToggles() -> Element {
    let mut options = use_editor_options();
    let (word_wrap, minimap) = {
        let o = options.read();
        (o.word_wrap, o.minimap)
    };

    rsx! {
        Button {
            variant: ButtonVariant::Chip,
            active: word_wrap,
            title: "Toggle word wrap".to_string(),
            onclick: move |_| options.write().word_wrap = !word_wrap,
            "Wrap"
        }
        Button {
            variant: ButtonVariant::Chip,
            active: minimap,
            title: "Toggle minimap".to_string(),
            onclick: move |_| options.write().minimap = !minimap,
            "Minimap"
        }
    }
}

#[component]
pub fn Toolbar() -> Element {
    rsx! {
        nav { class: "toolbar",
            BackgroundPicker {}
            PaddingPicker {}
            ThemePicker {}
            LanguagePicker {}
            DimensionPicker { axis: Axis::Width }
            DimensionPicker { axis: Axis::Height }
            EditorToggles {}
            ExportButton {}
        }
    }
}
