//! Open/close state and placement of floating option pickers.

/// Visibility and drop direction of a floating picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    OpenDown,
    OpenUp,
}

/// Direction a popup unfolds from its trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Below,
    Above,
}

/// Where a pointer press landed relative to an open picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    Trigger,
    Popup,
    Outside,
}

/// Vertical extent of a picker's trigger in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRect {
    pub top: f64,
    pub bottom: f64,
}

impl TriggerRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }
}

/// Choose a placement for a popup of `popup_height` under `trigger`.
///
/// The popup opens upward only when it would not fit between the trigger
/// and the bottom of the viewport.
pub fn placement(trigger: TriggerRect, popup_height: f64, viewport_height: f64) -> Placement {
    let space_below = viewport_height - trigger.bottom;
    if space_below < popup_height {
        Placement::Above
    } else {
        Placement::Below
    }
}

impl PickerState {
    pub fn is_open(self) -> bool {
        !matches!(self, PickerState::Closed)
    }

    pub fn opened(placement: Placement) -> Self {
        match placement {
            Placement::Below => PickerState::OpenDown,
            Placement::Above => PickerState::OpenUp,
        }
    }

    /// Trigger clicked: open with a freshly computed placement, or close.
    pub fn toggle(self, placement: Placement) -> Self {
        if self.is_open() {
            PickerState::Closed
        } else {
            Self::opened(placement)
        }
    }

    /// An option was chosen.
    pub fn select(self) -> Self {
        PickerState::Closed
    }

    /// A pointer press happened somewhere in the window.
    ///
    /// Presses outside both trigger and popup dismiss an open picker; the
    /// trigger handles its own toggle and the popup its own selection.
    pub fn press(self, target: PressTarget) -> Self {
        match target {
            PressTarget::Outside => PickerState::Closed,
            PressTarget::Trigger | PressTarget::Popup => self,
        }
    }

    /// CSS modifier for the popup body.
    pub fn class(self) -> &'static str {
        match self {
            PickerState::Closed => "picker-popup picker-popup--closed",
            PickerState::OpenDown => "picker-popup picker-popup--down",
            PickerState::OpenUp => "picker-popup picker-popup--up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_below_when_room() {
        let trigger = TriggerRect::new(100.0, 40.0);
        assert_eq!(placement(trigger, 200.0, 900.0), Placement::Below);
    }

    #[test]
    fn test_placement_above_when_cramped() {
        let trigger = TriggerRect::new(780.0, 40.0);
        assert_eq!(placement(trigger, 200.0, 900.0), Placement::Above);
        // Exactly enough room still opens downward.
        let trigger = TriggerRect::new(660.0, 40.0);
        assert_eq!(placement(trigger, 200.0, 900.0), Placement::Below);
    }

    #[test]
    fn test_toggle_cycle() {
        let state = PickerState::Closed.toggle(Placement::Above);
        assert_eq!(state, PickerState::OpenUp);
        assert_eq!(state.toggle(Placement::Below), PickerState::Closed);
    }

    #[test]
    fn test_select_closes() {
        assert_eq!(PickerState::OpenDown.select(), PickerState::Closed);
    }

    #[test]
    fn test_outside_press() {
        assert_eq!(PickerState::OpenDown.press(PressTarget::Outside), PickerState::Closed);
        assert_eq!(PickerState::Closed.press(PressTarget::Outside), PickerState::Closed);
        assert_eq!(PickerState::OpenUp.press(PressTarget::Popup), PickerState::OpenUp);
        assert_eq!(PickerState::OpenUp.press(PressTarget::Trigger), PickerState::OpenUp);
    }
}
