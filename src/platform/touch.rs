//! On-screen buttons for touch (or mouse) play.
//!
//! Each button is bound only if the config gives it a rectangle; missing
//! buttons are simply absent.

use crate::config::TouchConfig;
use crate::core::input::{Action, HeldActions, InputEvent};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchBinding {
    /// Counts as held while a finger is on it.
    Hold(Action),
    /// Fires once when a press begins.
    Tap(InputEvent),
}

#[derive(Clone, Debug)]
pub struct TouchButton {
    pub rect: [f32; 4],
    pub label: &'static str,
    pub binding: TouchBinding,
    pub is_pressed: bool,
}

impl TouchButton {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let [x, y, w, h] = self.rect;
        px >= x && px < x + w && py >= y && py < y + h
    }
}

#[derive(Clone, Debug, Default)]
pub struct TouchControls {
    pub buttons: Vec<TouchButton>,
}

impl TouchControls {
    pub fn from_config(cfg: &TouchConfig) -> Self {
        let slots = [
            (cfg.forward, "FWD", TouchBinding::Hold(Action::Forward)),
            (cfg.back, "BACK", TouchBinding::Hold(Action::Back)),
            (cfg.left, "LEFT", TouchBinding::Hold(Action::TurnLeft)),
            (cfg.right, "RIGHT", TouchBinding::Hold(Action::TurnRight)),
            (cfg.fire, "FIRE", TouchBinding::Tap(InputEvent::Fire)),
            (cfg.action, "USE", TouchBinding::Tap(InputEvent::Use)),
        ];
        let buttons = slots
            .into_iter()
            .filter_map(|(rect, label, binding)| {
                rect.map(|rect| TouchButton { rect, label, binding, is_pressed: false })
            })
            .collect();
        Self { buttons }
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Feed this frame's contact points; held actions are written into
    /// `held`, new taps are appended to `events`.
    pub fn update(&mut self, points: &[(f32, f32)], held: &mut HeldActions, events: &mut Vec<InputEvent>) {
        for button in &mut self.buttons {
            let pressed = points.iter().any(|&(x, y)| button.contains(x, y));
            match button.binding {
                TouchBinding::Hold(action) => {
                    if pressed {
                        held.set(action, true);
                    }
                }
                TouchBinding::Tap(event) => {
                    if pressed && !button.is_pressed {
                        events.push(event);
                    }
                }
            }
            button.is_pressed = pressed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TouchConfig {
        TouchConfig {
            forward: Some([0.0, 0.0, 50.0, 50.0]),
            fire: Some([100.0, 0.0, 50.0, 50.0]),
            ..Default::default()
        }
    }

    #[test]
    fn only_configured_buttons_exist() {
        let controls = TouchControls::from_config(&layout());
        assert_eq!(controls.buttons.len(), 2);
        assert!(TouchControls::from_config(&TouchConfig::default()).is_empty());
    }

    #[test]
    fn hold_button_sets_action_each_frame() {
        let mut controls = TouchControls::from_config(&layout());
        for _ in 0..2 {
            let mut held = HeldActions::default();
            let mut events = Vec::new();
            controls.update(&[(10.0, 10.0)], &mut held, &mut events);
            assert!(held.forward);
            assert!(events.is_empty());
        }
    }

    #[test]
    fn tap_fires_once_per_press() {
        let mut controls = TouchControls::from_config(&layout());
        let mut held = HeldActions::default();
        let mut events = Vec::new();
        controls.update(&[(120.0, 10.0)], &mut held, &mut events);
        controls.update(&[(120.0, 10.0)], &mut held, &mut events);
        assert_eq!(events, vec![InputEvent::Fire]);
        controls.update(&[], &mut held, &mut events);
        controls.update(&[(120.0, 10.0)], &mut held, &mut events);
        assert_eq!(events.len(), 2);
    }
}
