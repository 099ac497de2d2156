//! Syntax highlighting for the card's source text.
//!
//! Both the live editor overlay and the PNG rasterizer draw from the same
//! [`HighlightedCode`], so the exported image matches what is on screen.

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{ExportError, ExportResult};
use crate::style::Rgb;

/// Colour scheme used for the code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SyntaxTheme {
    #[default]
    OceanDark,
    EightiesDark,
    MochaDark,
    OceanLight,
    InspiredGitHub,
    SolarizedDark,
    SolarizedLight,
}

impl SyntaxTheme {
    pub const ALL: [SyntaxTheme; 7] = [
        SyntaxTheme::OceanDark,
        SyntaxTheme::EightiesDark,
        SyntaxTheme::MochaDark,
        SyntaxTheme::OceanLight,
        SyntaxTheme::InspiredGitHub,
        SyntaxTheme::SolarizedDark,
        SyntaxTheme::SolarizedLight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SyntaxTheme::OceanDark => "Ocean Dark",
            SyntaxTheme::EightiesDark => "Eighties Dark",
            SyntaxTheme::MochaDark => "Mocha Dark",
            SyntaxTheme::OceanLight => "Ocean Light",
            SyntaxTheme::InspiredGitHub => "Inspired GitHub",
            SyntaxTheme::SolarizedDark => "Solarized Dark",
            SyntaxTheme::SolarizedLight => "Solarized Light",
        }
    }

    /// Key of the theme in syntect's default theme set.
    fn key(self) -> &'static str {
        match self {
            SyntaxTheme::OceanDark => "base16-ocean.dark",
            SyntaxTheme::EightiesDark => "base16-eighties.dark",
            SyntaxTheme::MochaDark => "base16-mocha.dark",
            SyntaxTheme::OceanLight => "base16-ocean.light",
            SyntaxTheme::InspiredGitHub => "InspiredGitHub",
            SyntaxTheme::SolarizedDark => "Solarized (dark)",
            SyntaxTheme::SolarizedLight => "Solarized (light)",
        }
    }
}

/// Language the source is highlighted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    Rust,
    Go,
    Java,
    Cpp,
    CSharp,
    Html,
    Css,
    Json,
    Shell,
    Sql,
    PlainText,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::JavaScript,
        Language::Python,
        Language::Rust,
        Language::Go,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Shell,
        Language::Sql,
        Language::PlainText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::PlainText => "Plain Text",
        }
    }

    /// Extension token syntect resolves the syntax by.
    fn token(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Rust => "rs",
            Language::Go => "go",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Shell => "sh",
            Language::Sql => "sql",
            Language::PlainText => "txt",
        }
    }
}

/// Display options handed to the code editor.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOptions {
    pub minimap: bool,
    pub word_wrap: bool,
    pub font_size: f32,
    pub font_family: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            minimap: false,
            word_wrap: true,
            font_size: 16.0,
            font_family: "'JetBrains Mono', 'SF Mono', 'Consolas', monospace".to_string(),
        }
    }
}

/// A run of text drawn in one colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Rgb,
}

/// Highlighted source, one entry per line, without line terminators.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightedCode {
    pub background: Rgb,
    pub foreground: Rgb,
    pub lines: Vec<Vec<Span>>,
}

impl HighlightedCode {
    /// Text of a line with its spans joined back together.
    #[cfg(test)]
    fn line_text(&self, index: usize) -> String {
        self.lines
            .get(index)
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Loaded syntect syntax and theme sets.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

static SHARED: OnceLock<Highlighter> = OnceLock::new();

fn to_rgb(color: Color) -> Rgb {
    Rgb(color.r, color.g, color.b)
}

fn theme_palette(theme: &Theme) -> (Rgb, Rgb) {
    let background = theme
        .settings
        .background
        .map(to_rgb)
        .unwrap_or(Rgb(0x2b, 0x30, 0x3b));
    let foreground = theme
        .settings
        .foreground
        .map(to_rgb)
        .unwrap_or(Rgb(0xc0, 0xc5, 0xce));
    (background, foreground)
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Process-wide instance; the default sets are expensive to load.
    pub fn shared() -> &'static Highlighter {
        SHARED.get_or_init(Highlighter::new)
    }

    fn theme(&self, theme: SyntaxTheme) -> ExportResult<&Theme> {
        self.themes
            .themes
            .get(theme.key())
            .ok_or_else(|| ExportError::Highlight(format!("theme {} not bundled", theme.key())))
    }

    /// Background and default text colour of `theme`.
    pub fn palette(&self, theme: SyntaxTheme) -> ExportResult<(Rgb, Rgb)> {
        self.theme(theme).map(theme_palette)
    }

    pub fn highlight(
        &self,
        source: &str,
        language: Language,
        theme: SyntaxTheme,
    ) -> ExportResult<HighlightedCode> {
        let theme = self.theme(theme)?;
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language.token())
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let (background, foreground) = theme_palette(theme);

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(source) {
            let ranges = highlighter
                .highlight_line(line, &self.syntaxes)
                .map_err(|e| ExportError::Highlight(e.to_string()))?;
            let spans = ranges
                .into_iter()
                .filter_map(|(style, text)| {
                    let text = text.trim_end_matches(['\n', '\r']);
                    (!text.is_empty()).then(|| Span {
                        text: text.to_string(),
                        color: to_rgb(style.foreground),
                    })
                })
                .collect();
            lines.push(spans);
        }

        Ok(HighlightedCode {
            background,
            foreground,
            lines,
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
