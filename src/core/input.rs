//! Abstract input: held movement actions plus discrete trigger events.
//!
//! Front ends translate keys, touch buttons or scripts into a [`FrameInput`]
//! once per frame; the engine never sees concrete key codes.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Fire,
    Pause,
    Use,
    ToggleMap,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldActions {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl HeldActions {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Forward => self.forward = held,
            Action::Back => self.back = held,
            Action::TurnLeft => self.turn_left = held,
            Action::TurnRight => self.turn_right = held,
        }
    }

    /// Union of two sources (keyboard and touch both count).
    pub fn merge(self, other: HeldActions) -> HeldActions {
        HeldActions {
            forward: self.forward || other.forward,
            back: self.back || other.back,
            turn_left: self.turn_left || other.turn_left,
            turn_right: self.turn_right || other.turn_right,
        }
    }
}

/// Everything the engine needs from the outside world for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub held: HeldActions,
    pub events: Vec<InputEvent>,
    /// Seconds since the previous frame.
    pub dt: f32,
}

pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_its_own_flag() {
        let mut held = HeldActions::default();
        held.set(Action::TurnLeft, true);
        assert_eq!(held, HeldActions { turn_left: true, ..Default::default() });
        held.set(Action::TurnLeft, false);
        assert_eq!(held, HeldActions::default());
    }

    #[test]
    fn merge_is_a_union() {
        let keys = HeldActions { forward: true, ..Default::default() };
        let touch = HeldActions { turn_right: true, ..Default::default() };
        let both = keys.merge(touch);
        assert!(both.forward && both.turn_right);
        assert!(!both.back && !both.turn_left);
    }
}
