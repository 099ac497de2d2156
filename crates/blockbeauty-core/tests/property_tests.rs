//! Property-based tests for card style mutations
//!
//! Uses proptest to verify the dimension range invariant holds no matter
//! which sequence of drags, inputs and viewport changes is applied.

use std::cell::Cell;
use std::rc::Rc;

use blockbeauty_core::{
    Axis, Background, CardStyle, PointerCapture, PointerPos, ResizeController, ResizeGesture,
    Viewport,
};
use proptest::prelude::*;

#[derive(Clone, Default)]
struct Capture(Rc<Cell<i32>>);

impl PointerCapture for Capture {
    fn acquire(&self) {
        self.0.set(self.0.get() + 1);
    }

    fn release(&self) {
        self.0.set(self.0.get() - 1);
    }
}

// ============================================================================
// Strategy Generators
// ============================================================================

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Width), Just(Axis::Height)]
}

fn pointer_strategy() -> impl Strategy<Value = PointerPos> {
    (-10_000.0..10_000.0f64, -10_000.0..10_000.0f64).prop_map(|(x, y)| PointerPos::new(x, y))
}

/// Operations that can be performed on a CardStyle
#[derive(Debug, Clone)]
enum StyleOp {
    Drag(Axis, PointerPos, Vec<PointerPos>),
    Input(Axis, String),
    StepUp(Axis),
    StepDown(Axis),
    Preset(Axis, usize),
    Viewport(f64, f64),
}

fn style_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<StyleOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (axis_strategy(), pointer_strategy(), prop::collection::vec(pointer_strategy(), 0..10))
                .prop_map(|(axis, start, moves)| StyleOp::Drag(axis, start, moves)),
            2 => (axis_strategy(), "[0-9]{0,5}").prop_map(|(axis, text)| StyleOp::Input(axis, text)),
            1 => axis_strategy().prop_map(StyleOp::StepUp),
            1 => axis_strategy().prop_map(StyleOp::StepDown),
            1 => (axis_strategy(), 0..6usize).prop_map(|(axis, i)| StyleOp::Preset(axis, i)),
            1 => (0.0..3000.0f64, 0.0..3000.0f64).prop_map(|(w, h)| StyleOp::Viewport(w, h)),
        ],
        0..max_ops,
    )
}

fn in_range(style: &CardStyle) -> bool {
    (400..=900).contains(&style.width()) && (400..=800).contains(&style.height())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any drag sequence leaves both dimensions inside their bounds
    #[test]
    fn drags_stay_in_bounds(
        axis in axis_strategy(),
        start in pointer_strategy(),
        moves in prop::collection::vec(pointer_strategy(), 1..50),
    ) {
        let capture = Capture::default();
        let mut controller = ResizeController::new(capture.clone());
        let mut style = CardStyle::new();

        controller.press(axis, start, &style);
        for pointer in moves {
            controller.drag(pointer, &mut style);
            prop_assert!(in_range(&style));
        }
        controller.release();
        prop_assert_eq!(capture.0.get(), 0);
    }

    /// Inside the range, a drag of Δ changes the dimension by exactly Δ
    #[test]
    fn drag_delta_is_linear(start in 400u32..=800, delta in -300i64..300) {
        let origin = PointerPos::new(500.0, 500.0);

        let width = ResizeGesture::begin(Axis::Width, origin, start);
        let left = PointerPos::new(500.0 - delta as f64, 500.0);
        prop_assert_eq!(width.candidate(left), start as i64 + delta);

        let height = ResizeGesture::begin(Axis::Height, origin, start);
        let down = PointerPos::new(500.0, 500.0 + delta as f64);
        prop_assert_eq!(height.candidate(down), start as i64 + delta);
    }

    /// Any mix of operations preserves the range invariant
    #[test]
    fn mixed_operations_preserve_invariants(ops in style_ops_strategy(40)) {
        let mut controller = ResizeController::new(Capture::default());
        let mut style = CardStyle::new();

        for op in ops {
            match op {
                StyleOp::Drag(axis, start, moves) => {
                    controller.press(axis, start, &style);
                    for pointer in moves {
                        controller.drag(pointer, &mut style);
                    }
                    controller.release();
                }
                StyleOp::Input(axis, text) => {
                    let before = style.dimension(axis);
                    let applied = style.input_dimension(axis, &text);
                    if !applied {
                        prop_assert_eq!(style.dimension(axis), before);
                    }
                }
                StyleOp::StepUp(axis) => {
                    style.step_dimension_up(axis);
                }
                StyleOp::StepDown(axis) => {
                    style.step_dimension_down(axis);
                }
                StyleOp::Preset(axis, i) => {
                    style.apply_preset(axis, i);
                }
                StyleOp::Viewport(w, h) => {
                    style.apply_viewport(Viewport::new(w, h));
                    prop_assert_eq!(style.is_mobile_layout(), w < 768.0);
                }
            }
            prop_assert!(in_range(&style));
        }
    }

    /// Exactly one background is active, and it is the last one selected
    #[test]
    fn background_selection(indices in prop::collection::vec(0usize..8, 1..20)) {
        let mut style = CardStyle::new();
        let mut expected = style.background();
        for i in indices {
            if style.select_background(i) {
                expected = Background::ALL[i];
            }
            prop_assert_eq!(style.background(), expected);
            prop_assert!(style.background().index() < Background::ALL.len());
        }
    }
}

proptest! {
    /// Parsing typed text up front predicts exactly which edits the style
    /// accepts, so rejected keystrokes never need a mutable borrow
    #[test]
    fn typed_text_precheck_matches_input(axis in axis_strategy(), text in "[ 0-9a-z+-]{0,6}") {
        let mut style = CardStyle::new();
        let before = style.clone();
        let parsed = axis.parse_input(&text);

        let applied = style.input_dimension(axis, &text);
        prop_assert_eq!(applied, parsed.is_some());
        match parsed {
            Some(value) => prop_assert_eq!(style.dimension(axis), value),
            None => prop_assert_eq!(style, before),
        }
    }
}
