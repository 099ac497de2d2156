//! Toolbar pickers.
//!
//! Every floating picker is a [`Popover`] around its own option list; the
//! padding row is inline and has no popup.

mod background_picker;
mod dimension_picker;
mod language_picker;
mod padding_picker;
mod popover;
mod theme_picker;

pub use background_picker::BackgroundPicker;
pub use dimension_picker::DimensionPicker;
pub use language_picker::LanguagePicker;
pub use padding_picker::PaddingPicker;
pub use popover::Popover;
pub use theme_picker::ThemePicker;

/// Class for one entry of a picker list.
pub(crate) fn option_class(active: bool) -> &'static str {
    if active {
        "picker-option is-active"
    } else {
        "picker-option"
    }
}
