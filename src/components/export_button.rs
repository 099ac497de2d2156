//! Export Button
//!
//! Snapshots the mounted card and hands it to the exporter off the UI
//! thread. Failures are logged by the exporter and never surface here.

use blockbeauty_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{use_card_mount, use_card_style, use_editor_options, use_exporter};

#[component]
pub fn ExportButton() -> Element {
    let style = use_card_style();
    let options = use_editor_options();
    let card_mount = use_card_mount();
    let exporter = use_exporter();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            title: "Save the card as a PNG".to_string(),
            onclick: move |_| {
                let snapshot = card_mount.snapshot(&style.read(), &options.read());
                let exporter = exporter.0.clone();
                spawn(async move {
                    exporter.export_detached(snapshot).await;
                });
            },
            "Save Image"
        }
    }
}
