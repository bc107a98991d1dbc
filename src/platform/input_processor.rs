//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit input into engine InputEvents.
//
// Architecture:
//   winit WindowEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state arrives separately (ModifiersChanged) and is stamped
// onto every following key and button event. OS key repeats and keys the
// engine does not know are filtered out here.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        };
    }

    //--- Conversion -------------------------------------------------------

    /// `None` for repeats and unmapped keys.
    pub(crate) fn process_key_event(&self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        self.key_transition(map_key(code), event.state)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = map_button(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub(crate) fn process_cursor(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved { x: x as f32, y: y as f32 }
    }

    fn key_transition(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }
        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }
}

//=== Key / Button Tables =================================================

fn map_key(code: WinitKeyCode) -> KeyCode {
    use WinitKeyCode as W;
    match code {
        W::Digit0 => KeyCode::Digit0,
        W::Digit1 => KeyCode::Digit1,
        W::Digit2 => KeyCode::Digit2,
        W::Digit3 => KeyCode::Digit3,
        W::Digit4 => KeyCode::Digit4,
        W::Digit5 => KeyCode::Digit5,
        W::Digit6 => KeyCode::Digit6,
        W::Digit7 => KeyCode::Digit7,
        W::Digit8 => KeyCode::Digit8,
        W::Digit9 => KeyCode::Digit9,

        W::KeyA => KeyCode::KeyA,
        W::KeyB => KeyCode::KeyB,
        W::KeyC => KeyCode::KeyC,
        W::KeyD => KeyCode::KeyD,
        W::KeyE => KeyCode::KeyE,
        W::KeyF => KeyCode::KeyF,
        W::KeyG => KeyCode::KeyG,
        W::KeyH => KeyCode::KeyH,
        W::KeyI => KeyCode::KeyI,
        W::KeyJ => KeyCode::KeyJ,
        W::KeyK => KeyCode::KeyK,
        W::KeyL => KeyCode::KeyL,
        W::KeyM => KeyCode::KeyM,
        W::KeyN => KeyCode::KeyN,
        W::KeyO => KeyCode::KeyO,
        W::KeyP => KeyCode::KeyP,
        W::KeyQ => KeyCode::KeyQ,
        W::KeyR => KeyCode::KeyR,
        W::KeyS => KeyCode::KeyS,
        W::KeyT => KeyCode::KeyT,
        W::KeyU => KeyCode::KeyU,
        W::KeyV => KeyCode::KeyV,
        W::KeyW => KeyCode::KeyW,
        W::KeyX => KeyCode::KeyX,
        W::KeyY => KeyCode::KeyY,
        W::KeyZ => KeyCode::KeyZ,

        W::ArrowUp => KeyCode::ArrowUp,
        W::ArrowDown => KeyCode::ArrowDown,
        W::ArrowLeft => KeyCode::ArrowLeft,
        W::ArrowRight => KeyCode::ArrowRight,

        W::ShiftLeft => KeyCode::ShiftLeft,
        W::ShiftRight => KeyCode::ShiftRight,
        W::ControlLeft => KeyCode::ControlLeft,
        W::ControlRight => KeyCode::ControlRight,
        W::AltLeft => KeyCode::AltLeft,
        W::AltRight => KeyCode::AltRight,

        W::Space => KeyCode::Space,
        W::Enter => KeyCode::Enter,
        W::Escape => KeyCode::Escape,
        W::Tab => KeyCode::Tab,
        W::Backspace => KeyCode::Backspace,

        _ => KeyCode::Unidentified,
    }
}

fn map_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_state() -> ModifiersState {
        ModifiersState::SHIFT
    }

    #[test]
    fn modifiers_are_stamped_on_following_events() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(shift_state());

        let event = processor.key_transition(KeyCode::Space, ElementState::Pressed);
        assert_eq!(
            event,
            Some(InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::SHIFT })
        );

        let click = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Released);
        assert_eq!(
            click,
            InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::SHIFT }
        );
    }

    #[test]
    fn unidentified_keys_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(map_key(WinitKeyCode::F13), KeyCode::Unidentified);
        assert!(processor
            .key_transition(KeyCode::Unidentified, ElementState::Pressed)
            .is_none());
    }

    #[test]
    fn platformer_keys_map() {
        assert_eq!(map_key(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(map_key(WinitKeyCode::ShiftLeft), KeyCode::ShiftLeft);
        assert_eq!(map_key(WinitKeyCode::KeyD), KeyCode::KeyD);
        assert_eq!(map_key(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
    }

    #[test]
    fn extra_mouse_buttons_become_other() {
        assert_eq!(map_button(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(map_button(WinitMouseButton::Middle), MouseButton::Middle);
    }

    #[test]
    fn cursor_position_is_converted() {
        let processor = InputProcessor::new();
        match processor.process_cursor(12.5, 40.0) {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (12.5, 40.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }
}
