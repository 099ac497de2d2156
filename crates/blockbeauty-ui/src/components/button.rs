//! Button Components
//!
//! Toolbar button styles:
//! - Outline: bordered toolbar action (pickers, save)
//! - Chip: compact option inside a picker or button row
//! - Ghost: borderless, for steppers and icon actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Bordered toolbar button
    #[default]
    Outline,
    /// Small option button
    Chip,
    /// Borderless button
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Chip => "btn-chip",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extras, marking the active state.
pub fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" is-active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Highlights the button as the current selection
    #[props(default = false)]
    pub active: bool,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| export(),
///         "Save Image"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());
    let title = props.title.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{title}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Chevron shown on buttons that open a popup.
#[component]
pub fn Chevron(#[props(default = false)] up: bool) -> Element {
    let d = if up { "m1 5 4-4 4 4" } else { "m1 1 4 4 4-4" };
    rsx! {
        svg {
            class: "chevron",
            xmlns: "http://www.w3.org/2000/svg",
            width: "10",
            height: "6",
            view_box: "0 0 10 6",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "{d}",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
