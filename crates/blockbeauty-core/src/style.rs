//! Card style state.
//!
//! [`CardStyle`] is the single source of truth for how the card looks. The
//! root component owns one instance; pickers, the resize controller and the
//! responsive adapter mutate it only through the named setters below.

use crate::dimension::Axis;
use crate::highlight::{Language, SyntaxTheme};
use crate::responsive::Viewport;

/// An sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex notation (`#rrggbb`).
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Background gradient behind the code window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Indigo,
    Yellow,
    Emerald,
    Red,
    Cyan,
}

impl Background {
    pub const ALL: [Background; 5] = [
        Background::Indigo,
        Background::Yellow,
        Background::Emerald,
        Background::Red,
        Background::Cyan,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Background::Indigo => "Indigo",
            Background::Yellow => "Yellow",
            Background::Emerald => "Emerald",
            Background::Red => "Red",
            Background::Cyan => "Cyan",
        }
    }

    /// Left and right stops of the horizontal gradient.
    pub fn stops(self) -> (Rgb, Rgb) {
        match self {
            Background::Indigo => (Rgb(0x7c, 0x3a, 0xed), Rgb(0x4f, 0x46, 0xe5)),
            Background::Yellow => (Rgb(0xfd, 0xe6, 0x8a), Rgb(0xfa, 0xcc, 0x15)),
            Background::Emerald => (Rgb(0x10, 0xb9, 0x81), Rgb(0x06, 0x4e, 0x3b)),
            Background::Red => (Rgb(0xef, 0x44, 0x44), Rgb(0xf9, 0x73, 0x16)),
            Background::Cyan => (Rgb(0x06, 0xb6, 0xd4), Rgb(0x3b, 0x82, 0xf6)),
        }
    }

    /// CSS `background` value for the webview.
    pub fn css(self) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient(to right, {}, {})", from.hex(), to.hex())
    }
}

/// Space between the card edge and the code window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Padding {
    #[default]
    P4,
    P8,
    P12,
    P16,
}

impl Padding {
    pub const ALL: [Padding; 4] = [Padding::P4, Padding::P8, Padding::P12, Padding::P16];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label shown on the padding buttons.
    pub fn label(self) -> &'static str {
        match self {
            Padding::P4 => "4",
            Padding::P8 => "8",
            Padding::P12 => "12",
            Padding::P16 => "16",
        }
    }

    pub fn pixels(self) -> u32 {
        match self {
            Padding::P4 => 16,
            Padding::P8 => 32,
            Padding::P12 => 48,
            Padding::P16 => 64,
        }
    }
}

pub const DEFAULT_FILENAME: &str = "Untitled-1";

pub const DEFAULT_SOURCE: &str = r#"function greet(name) {
  const message = `Hello, ${name}!`;
  console.log(message);
  return message;
}

greet("BlockBeauty");
"#;

/// Everything that determines how the card is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct CardStyle {
    background: Background,
    padding: Padding,
    width: u32,
    height: u32,
    filename: String,
    source: String,
    theme: SyntaxTheme,
    language: Language,
    mobile_layout: bool,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            background: Background::default(),
            padding: Padding::default(),
            width: Axis::Width.default_value(),
            height: Axis::Height.default_value(),
            filename: DEFAULT_FILENAME.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            theme: SyntaxTheme::default(),
            language: Language::default(),
            mobile_layout: false,
        }
    }
}

impl CardStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimension(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn theme(&self) -> SyntaxTheme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_mobile_layout(&self) -> bool {
        self.mobile_layout
    }

    pub fn set_background(&mut self, background: Background) {
        tracing::debug!(background = background.name(), "background selected");
        self.background = background;
    }

    /// Select a background by palette index. Invalid indices are ignored.
    pub fn select_background(&mut self, index: usize) -> bool {
        match Background::from_index(index) {
            Some(background) => {
                self.set_background(background);
                true
            }
            None => false,
        }
    }

    pub fn set_padding(&mut self, padding: Padding) {
        tracing::debug!(padding = padding.pixels(), "padding selected");
        self.padding = padding;
    }

    /// Select a padding by index. Invalid indices are ignored.
    pub fn select_padding(&mut self, index: usize) -> bool {
        match Padding::from_index(index) {
            Some(padding) => {
                self.set_padding(padding);
                true
            }
            None => false,
        }
    }

    /// Set a dimension from an arbitrary candidate, clamping into range.
    ///
    /// Used by drags, sliders, steppers, presets and the responsive override.
    pub fn set_dimension(&mut self, axis: Axis, candidate: i64) -> u32 {
        let value = axis.clamp(candidate);
        match axis {
            Axis::Width => self.width = value,
            Axis::Height => self.height = value,
        }
        value
    }

    /// Apply text typed into a numeric field. Out-of-range or non-numeric
    /// input leaves the dimension unchanged.
    pub fn input_dimension(&mut self, axis: Axis, text: &str) -> bool {
        match axis.parse_input(text) {
            Some(value) => {
                self.set_dimension(axis, value as i64);
                true
            }
            None => {
                tracing::debug!(axis = axis.label(), input = text, "ignoring dimension input");
                false
            }
        }
    }

    pub fn step_dimension_up(&mut self, axis: Axis) -> u32 {
        let next = axis.step_up(self.dimension(axis));
        self.set_dimension(axis, next as i64)
    }

    pub fn step_dimension_down(&mut self, axis: Axis) -> u32 {
        let next = axis.step_down(self.dimension(axis));
        self.set_dimension(axis, next as i64)
    }

    /// Jump to one of the axis presets by index. Invalid indices are ignored.
    pub fn apply_preset(&mut self, axis: Axis, index: usize) -> bool {
        match axis.presets().get(index) {
            Some(preset) => {
                self.set_dimension(axis, preset.value as i64);
                true
            }
            None => false,
        }
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn set_theme(&mut self, theme: SyntaxTheme) {
        tracing::debug!(theme = theme.name(), "theme selected");
        self.theme = theme;
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(language = language.name(), "language selected");
        self.language = language;
    }

    /// Recompute the mobile flag for a new viewport size.
    ///
    /// On the transition into mobile layout the card dimensions are
    /// overridden to fit the viewport. Returns `true` when that override
    /// was applied. Leaving mobile layout never restores earlier values.
    pub fn apply_viewport(&mut self, viewport: Viewport) -> bool {
        let was_mobile = self.mobile_layout;
        self.mobile_layout = viewport.is_mobile();

        if self.mobile_layout && !was_mobile {
            let (width, height) = viewport.mobile_dimensions();
            let width = self.set_dimension(Axis::Width, width);
            let height = self.set_dimension(Axis::Height, height);
            tracing::debug!(width, height, "mobile layout override applied");
            return true;
        }
        false
    }
}
