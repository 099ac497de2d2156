//! Edge case and boundary condition tests
//!
//! These tests walk the user-facing flows end to end: picking options,
//! typing dimensions, dragging handles and resizing the window.

use blockbeauty_core::{
    placement, Axis, Background, CardStyle, Language, PickerState, Placement, PointerCapture,
    PointerPos, PressTarget, ResizeController, SyntaxTheme, TriggerRect, Viewport,
};

#[derive(Clone, Copy)]
struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&self) {}
    fn release(&self) {}
}

// ============================================================================
// Picker Flows
// ============================================================================

/// Selecting a background writes the index and closes the picker
#[test]
fn test_background_pick_closes_picker() {
    let mut style = CardStyle::new();
    let mut picker = PickerState::Closed;

    picker = picker.toggle(Placement::Below);
    assert!(picker.is_open());

    assert!(style.select_background(3));
    picker = picker.select();

    assert_eq!(style.background(), Background::Red);
    assert_eq!(style.background().index(), 3);
    assert_eq!(picker, PickerState::Closed);
}

/// Placement is recomputed every time the picker opens
#[test]
fn test_placement_recomputed_on_each_open() {
    let viewport = Viewport::new(1100.0, 700.0);
    let popup_height = 240.0;

    let low = TriggerRect::new(600.0, 40.0);
    let state = PickerState::Closed.toggle(placement(low, popup_height, viewport.height));
    assert_eq!(state, PickerState::OpenUp);

    let state = state.press(PressTarget::Outside);
    assert_eq!(state, PickerState::Closed);

    let high = TriggerRect::new(80.0, 40.0);
    let state = state.toggle(placement(high, popup_height, viewport.height));
    assert_eq!(state, PickerState::OpenDown);
}

/// Theme and language pickers write through to the style
#[test]
fn test_theme_and_language() {
    let mut style = CardStyle::new();
    style.set_theme(SyntaxTheme::SolarizedLight);
    style.set_language(Language::Python);
    assert_eq!(style.theme(), SyntaxTheme::SolarizedLight);
    assert_eq!(style.language(), Language::Python);
}

// ============================================================================
// Dimension Input
// ============================================================================

/// Boundary values are accepted, one past them is ignored
#[test]
fn test_dimension_input_boundaries() {
    let mut style = CardStyle::new();

    assert!(style.input_dimension(Axis::Width, "400"));
    assert!(style.input_dimension(Axis::Width, "900"));
    assert!(!style.input_dimension(Axis::Width, "901"));
    assert_eq!(style.width(), 900);

    assert!(style.input_dimension(Axis::Height, "800"));
    assert!(!style.input_dimension(Axis::Height, "801"));
    assert!(!style.input_dimension(Axis::Height, "399"));
    assert_eq!(style.height(), 800);
}

/// Partially typed values do not disturb the current dimension
#[test]
fn test_partial_typing_is_ignored() {
    let mut style = CardStyle::new();
    for partial in ["7", "70", "700"] {
        style.input_dimension(Axis::Width, partial);
    }
    assert_eq!(style.width(), 700);
}

/// Stepping never leaves the range
#[test]
fn test_stepping_at_bounds() {
    let mut style = CardStyle::new();
    for _ in 0..100 {
        style.step_dimension_up(Axis::Width);
    }
    assert_eq!(style.width(), 900);
    for _ in 0..100 {
        style.step_dimension_down(Axis::Width);
    }
    assert_eq!(style.width(), 400);
}

// ============================================================================
// Drag + Responsive Interaction
// ============================================================================

/// A drag starting from a mobile override continues from the override
#[test]
fn test_drag_after_mobile_override() {
    let mut style = CardStyle::new();
    style.apply_viewport(Viewport::new(500.0, 900.0));
    assert_eq!(style.width(), 460);

    let mut controller = ResizeController::new(NoCapture);
    controller.press(Axis::Width, PointerPos::new(200.0, 0.0), &style);
    controller.drag(PointerPos::new(150.0, 0.0), &mut style);
    controller.release();
    assert_eq!(style.width(), 510);
}

/// Desktop viewport at mount keeps the defaults
#[test]
fn test_desktop_mount_keeps_defaults() {
    let mut style = CardStyle::new();
    assert!(!style.apply_viewport(Viewport::default()));
    assert_eq!((style.width(), style.height()), (640, 500));
}

/// Moving after release changes nothing
#[test]
fn test_move_after_release() {
    let mut style = CardStyle::new();
    let mut controller = ResizeController::new(NoCapture);
    controller.press(Axis::Height, PointerPos::new(0.0, 0.0), &style);
    controller.drag(PointerPos::new(0.0, 100.0), &mut style);
    controller.release();

    assert_eq!(controller.drag(PointerPos::new(0.0, 250.0), &mut style), None);
    assert_eq!(style.height(), 600);
}
