//! Code Editor Component
//!
//! A transparent textarea stacked over a syntax-highlighted copy of the
//! same text. The highlight layer comes from the same highlighter the PNG
//! export uses.

use blockbeauty_core::{
    EditorOptions, HighlightedCode, Highlighter, Language, Rgb, Span, SyntaxTheme,
};
use dioxus::prelude::*;

/// Highlight `value`, falling back to uncoloured lines if highlighting fails.
fn highlight_or_plain(value: &str, language: Language, theme: SyntaxTheme) -> HighlightedCode {
    match Highlighter::shared().highlight(value, language, theme) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("Highlighting failed, showing plain text: {}", e);
            let fallback = Rgb(0xff, 0xff, 0xff);
            HighlightedCode {
                background: Rgb(0, 0, 0),
                foreground: fallback,
                lines: value
                    .lines()
                    .map(|line| {
                        vec![Span {
                            text: line.to_string(),
                            color: fallback,
                        }]
                    })
                    .collect(),
            }
        }
    }
}

/// Render highlighted lines as coloured spans.
fn render_lines(code: &HighlightedCode) -> Element {
    rsx! {
        for (i, spans) in code.lines.iter().enumerate() {
            div { key: "{i}", class: "code-line",
                for (j, span) in spans.iter().enumerate() {
                    span {
                        key: "{j}",
                        style: "color: {span.color.hex()};",
                        "{span.text}"
                    }
                }
            }
        }
    }
}

/// Editable, highlighted code area
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CodeEditor {
///         value: style.read().source().to_string(),
///         language: Language::Rust,
///         theme: SyntaxTheme::OceanDark,
///         options: EditorOptions::default(),
///         on_change: move |text| style.write().set_source(text),
///     }
/// }
/// ```
#[component]
pub fn CodeEditor(
    /// Current source text
    value: String,
    language: Language,
    theme: SyntaxTheme,
    options: EditorOptions,
    /// Called with the full text after every edit
    on_change: EventHandler<String>,
) -> Element {
    // Rehighlight only when the text, language or theme changes.
    let code = use_memo(use_reactive!(|(value, language, theme)| {
        highlight_or_plain(&value, language, theme)
    }));
    let code = code.read();
    let class = if options.word_wrap {
        "code-editor code-editor--wrap"
    } else {
        "code-editor"
    };
    let font = format!(
        "font-size: {}px; font-family: {}; color: {};",
        options.font_size,
        options.font_family,
        code.foreground.hex()
    );
    let caret = format!("caret-color: {};", code.foreground.hex());

    rsx! {
        div { class: "{class}", style: "{font}",
            div { class: "code-editor__stack",
                pre { class: "code-editor__highlight", "aria-hidden": "true",
                    {render_lines(&code)}
                }
                textarea {
                    class: "code-editor__input",
                    style: "{caret}",
                    spellcheck: "false",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            }
            if options.minimap {
                div { class: "code-editor__minimap", "aria-hidden": "true",
                    pre { {render_lines(&code)} }
                }
            }
        }
    }
}
