//! Drag-to-resize gestures on the card handles.
//!
//! A gesture is press → any number of moves → release. While a gesture is
//! live the controller holds a [`CaptureGuard`], which keeps the window-wide
//! move/up listeners registered; dropping the guard deregisters them, so a
//! finished or abandoned gesture can never leave listeners behind.

use crate::dimension::Axis;
use crate::style::CardStyle;

/// Pointer position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Host-side registration of the listeners that follow a drag.
///
/// Implementations attach move/up handling in `acquire` and detach it in
/// `release`. Only [`CaptureGuard`] calls these.
pub trait PointerCapture {
    fn acquire(&self);
    fn release(&self);
}

/// Holds pointer capture for the lifetime of one gesture.
#[must_use = "dropping the guard releases pointer capture immediately"]
pub struct CaptureGuard<C: PointerCapture> {
    capture: C,
}

impl<C: PointerCapture> CaptureGuard<C> {
    pub fn acquire(capture: C) -> Self {
        capture.acquire();
        Self { capture }
    }
}

impl<C: PointerCapture> Drop for CaptureGuard<C> {
    fn drop(&mut self) {
        self.capture.release();
    }
}

/// The state captured at pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGesture {
    axis: Axis,
    origin: PointerPos,
    start: u32,
}

impl ResizeGesture {
    pub fn begin(axis: Axis, origin: PointerPos, start: u32) -> Self {
        Self {
            axis,
            origin,
            start,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Unclamped dimension for the current pointer position.
    ///
    /// The width handle sits on the left edge, so moving left grows the
    /// card; the height handle sits on the bottom edge, so moving down
    /// grows it.
    pub fn candidate(&self, pointer: PointerPos) -> i64 {
        let start = self.start as i64;
        match self.axis {
            Axis::Width => start - (pointer.x - self.origin.x).round() as i64,
            Axis::Height => start + (pointer.y - self.origin.y).round() as i64,
        }
    }

    /// Dimension for the current pointer position, clamped to the axis range.
    pub fn value_at(&self, pointer: PointerPos) -> u32 {
        self.axis.clamp(self.candidate(pointer))
    }
}

struct ActiveDrag<C: PointerCapture> {
    gesture: ResizeGesture,
    _guard: CaptureGuard<C>,
}

/// Turns pointer events on the two resize handles into dimension updates.
pub struct ResizeController<C: PointerCapture + Clone> {
    capture: C,
    active: Option<ActiveDrag<C>>,
}

impl<C: PointerCapture + Clone> ResizeController<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            active: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_axis(&self) -> Option<Axis> {
        self.active.as_ref().map(|drag| drag.gesture.axis())
    }

    /// Pointer-down on a handle: start a gesture from the current dimension.
    pub fn press(&mut self, axis: Axis, pointer: PointerPos, style: &CardStyle) {
        // A stale gesture releases its capture before the new one acquires.
        self.active.take();

        let gesture = ResizeGesture::begin(axis, pointer, style.dimension(axis));
        tracing::debug!(axis = axis.label(), start = style.dimension(axis), "resize started");
        self.active = Some(ActiveDrag {
            gesture,
            _guard: CaptureGuard::acquire(self.capture.clone()),
        });
    }

    /// Pointer-move while captured. Returns the committed value, or `None`
    /// when no gesture is live.
    pub fn drag(&mut self, pointer: PointerPos, style: &mut CardStyle) -> Option<u32> {
        let gesture = self.active.as_ref()?.gesture;
        let value = gesture.value_at(pointer);
        Some(style.set_dimension(gesture.axis(), value as i64))
    }

    /// Pointer-up: end the gesture and release capture.
    pub fn release(&mut self) -> bool {
        match self.active.take() {
            Some(drag) => {
                tracing::debug!(axis = drag.gesture.axis().label(), "resize finished");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingCapture {
        live: Rc<Cell<i32>>,
        acquisitions: Rc<Cell<u32>>,
    }

    impl PointerCapture for CountingCapture {
        fn acquire(&self) {
            self.live.set(self.live.get() + 1);
            self.acquisitions.set(self.acquisitions.get() + 1);
        }

        fn release(&self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn test_width_drag_left_grows() {
        let gesture = ResizeGesture::begin(Axis::Width, PointerPos::new(300.0, 50.0), 640);
        assert_eq!(gesture.candidate(PointerPos::new(250.0, 80.0)), 690);
        assert_eq!(gesture.candidate(PointerPos::new(330.0, 80.0)), 610);
    }

    #[test]
    fn test_height_drag_down_grows() {
        let gesture = ResizeGesture::begin(Axis::Height, PointerPos::new(10.0, 600.0), 500);
        assert_eq!(gesture.candidate(PointerPos::new(90.0, 640.0)), 540);
        assert_eq!(gesture.candidate(PointerPos::new(90.0, 560.0)), 460);
    }

    #[test]
    fn test_drag_is_clamped() {
        let gesture = ResizeGesture::begin(Axis::Width, PointerPos::new(500.0, 0.0), 640);
        assert_eq!(gesture.value_at(PointerPos::new(-4000.0, 0.0)), 900);
        assert_eq!(gesture.value_at(PointerPos::new(4000.0, 0.0)), 400);
    }

    #[test]
    fn test_controller_commits_and_releases() {
        let capture = CountingCapture::default();
        let mut controller = ResizeController::new(capture.clone());
        let mut style = CardStyle::new();

        controller.press(Axis::Width, PointerPos::new(100.0, 100.0), &style);
        assert!(controller.is_dragging());
        assert_eq!(capture.live.get(), 1);

        assert_eq!(controller.drag(PointerPos::new(60.0, 100.0), &mut style), Some(680));
        assert_eq!(controller.drag(PointerPos::new(80.0, 100.0), &mut style), Some(660));
        assert_eq!(style.width(), 660);

        assert!(controller.release());
        assert!(!controller.is_dragging());
        assert_eq!(capture.live.get(), 0);
    }

    #[test]
    fn test_moves_without_gesture_are_ignored() {
        let mut controller = ResizeController::new(CountingCapture::default());
        let mut style = CardStyle::new();
        assert_eq!(controller.drag(PointerPos::new(0.0, 0.0), &mut style), None);
        assert_eq!(style.width(), 640);
        assert!(!controller.release());
    }

    #[test]
    fn test_no_listener_leak_across_drags() {
        let capture = CountingCapture::default();
        let mut controller = ResizeController::new(capture.clone());
        let mut style = CardStyle::new();

        for i in 0..5 {
            let axis = if i % 2 == 0 { Axis::Width } else { Axis::Height };
            controller.press(axis, PointerPos::new(0.0, 0.0), &style);
            controller.drag(PointerPos::new(-15.0, 15.0), &mut style);
            controller.release();
            assert_eq!(capture.live.get(), 0);
        }
        assert_eq!(capture.acquisitions.get(), 5);
    }

    #[test]
    fn test_press_while_dragging_releases_previous() {
        let capture = CountingCapture::default();
        let mut controller = ResizeController::new(capture.clone());
        let style = CardStyle::new();

        controller.press(Axis::Width, PointerPos::new(0.0, 0.0), &style);
        controller.press(Axis::Height, PointerPos::new(0.0, 0.0), &style);
        assert_eq!(capture.live.get(), 1);
        assert_eq!(controller.active_axis(), Some(Axis::Height));
    }

    #[test]
    fn test_dropping_controller_releases_capture() {
        let capture = CountingCapture::default();
        {
            let mut controller = ResizeController::new(capture.clone());
            controller.press(Axis::Height, PointerPos::new(0.0, 0.0), &CardStyle::new());
            assert_eq!(capture.live.get(), 1);
        }
        assert_eq!(capture.live.get(), 0);
    }
}
