//! Gradient Swatch
//!
//! Round colour preview for a background option.

use blockbeauty_core::Background;
use dioxus::prelude::*;

/// Inline style for a swatch of `background`.
pub fn swatch_style(background: Background) -> String {
    format!("background: {};", background.css())
}

/// Gradient dot with the option name beside it.
#[component]
pub fn GradientSwatch(
    background: Background,
    /// Show the gradient name next to the dot
    #[props(default = true)]
    labelled: bool,
) -> Element {
    let style = swatch_style(background);
    rsx! {
        span { class: "swatch",
            span { class: "swatch__dot", style: "{style}" }
            if labelled {
                span { class: "swatch__label", "{background.name()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_style_uses_gradient() {
        assert_eq!(
            swatch_style(Background::Emerald),
            "background: linear-gradient(to right, #10b981, #064e3b);"
        );
    }
}
