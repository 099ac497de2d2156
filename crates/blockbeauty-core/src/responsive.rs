//! Viewport geometry for the responsive layout.

/// Viewports narrower than this use the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Horizontal room left around the card in mobile layout.
const MOBILE_WIDTH_MARGIN: f64 = 40.0;

/// Vertical room left for the toolbar in mobile layout.
const MOBILE_HEIGHT_MARGIN: f64 = 120.0;

/// Logical size of the window content area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Unclamped card size for mobile layout:
    /// `min(width - 40, 900)` by `min(height - 120, 800)`.
    pub fn mobile_dimensions(&self) -> (i64, i64) {
        let width = (self.width - MOBILE_WIDTH_MARGIN).min(900.0);
        let height = (self.height - MOBILE_HEIGHT_MARGIN).min(800.0);
        (width.floor() as i64, height.floor() as i64)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1100.0, 900.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardStyle;

    #[test]
    fn test_breakpoint() {
        assert!(Viewport::new(767.0, 900.0).is_mobile());
        assert!(!Viewport::new(768.0, 900.0).is_mobile());
    }

    #[test]
    fn test_mobile_formulas() {
        assert_eq!(Viewport::new(500.0, 900.0).mobile_dimensions(), (460, 780));
        assert_eq!(Viewport::new(700.0, 1400.0).mobile_dimensions(), (660, 800));
    }

    #[test]
    fn test_resize_into_mobile_overrides_dimensions() {
        let mut style = CardStyle::new();
        assert!(style.apply_viewport(Viewport::new(500.0, 900.0)));
        assert!(style.is_mobile_layout());
        assert_eq!(style.width(), 460);
        assert_eq!(style.height(), 780);
    }

    #[test]
    fn test_override_only_on_transition() {
        let mut style = CardStyle::new();
        style.apply_viewport(Viewport::new(500.0, 900.0));
        style.set_dimension(crate::Axis::Width, 420);

        // Still mobile: the manual choice stands.
        assert!(!style.apply_viewport(Viewport::new(520.0, 900.0)));
        assert_eq!(style.width(), 420);
    }

    #[test]
    fn test_leaving_mobile_keeps_override() {
        let mut style = CardStyle::new();
        style.apply_viewport(Viewport::new(600.0, 700.0));
        assert!(!style.apply_viewport(Viewport::new(1200.0, 900.0)));
        assert!(!style.is_mobile_layout());
        assert_eq!(style.width(), 560);
        assert_eq!(style.height(), 580);
    }

    #[test]
    fn test_tiny_viewport_still_clamped() {
        let mut style = CardStyle::new();
        style.apply_viewport(Viewport::new(320.0, 480.0));
        assert_eq!(style.width(), 400);
        assert_eq!(style.height(), 400);
    }
}
