//! Card dimension axes, bounds and presets.
//!
//! Every width/height the card ever takes passes through [`Axis::clamp`]
//! or [`Axis::accepts`], which is what keeps the range invariant.

/// Pixel step used by the increment/decrement buttons.
pub const STEP: u32 = 10;

/// One of the two resizable card dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

/// A named quick-preset value for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub value: u32,
}

const WIDTH_PRESETS: [Preset; 4] = [
    Preset { label: "Small", value: 480 },
    Preset { label: "Medium", value: 640 },
    Preset { label: "Large", value: 768 },
    Preset { label: "Wide", value: 900 },
];

const HEIGHT_PRESETS: [Preset; 4] = [
    Preset { label: "Short", value: 400 },
    Preset { label: "Medium", value: 500 },
    Preset { label: "Tall", value: 640 },
    Preset { label: "Max", value: 800 },
];

impl Axis {
    /// Inclusive lower bound in pixels.
    pub const fn min(self) -> u32 {
        400
    }

    /// Inclusive upper bound in pixels.
    pub const fn max(self) -> u32 {
        match self {
            Axis::Width => 900,
            Axis::Height => 800,
        }
    }

    /// Value the card starts with.
    pub const fn default_value(self) -> u32 {
        match self {
            Axis::Width => 640,
            Axis::Height => 500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Width => "Width",
            Axis::Height => "Height",
        }
    }

    pub fn presets(self) -> &'static [Preset; 4] {
        match self {
            Axis::Width => &WIDTH_PRESETS,
            Axis::Height => &HEIGHT_PRESETS,
        }
    }

    /// Constrain any candidate (possibly negative) into the axis range.
    pub fn clamp(self, candidate: i64) -> u32 {
        candidate.clamp(self.min() as i64, self.max() as i64) as u32
    }

    /// Whether a directly entered value is inside the range.
    pub fn accepts(self, value: u32) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Parse the text of a numeric input field.
    ///
    /// Returns `None` for anything that is not an in-range integer; callers
    /// ignore the edit in that case rather than clamping it.
    pub fn parse_input(self, text: &str) -> Option<u32> {
        let value = text.trim().parse::<u32>().ok()?;
        self.accepts(value).then_some(value)
    }

    /// Value one step above `current`, never past the upper bound.
    pub fn step_up(self, current: u32) -> u32 {
        self.clamp(current as i64 + STEP as i64)
    }

    /// Value one step below `current`, never past the lower bound.
    pub fn step_down(self, current: u32) -> u32 {
        self.clamp(current as i64 - STEP as i64)
    }
}
