//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level keyboard and mouse input.
//
// The platform layer (winit) converts OS events into these types before
// they cross the thread boundary, so nothing in `core` or `game` ever
// depends on the windowing backend.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed / released)
//         ↓
//    ActionMapper + VirtualAxis (ControlAction, Horizontal)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Other` covers side, thumb and macro buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the key location, not the produced character: `KeyA` is the
/// same physical key on QWERTY and AZERTY layouts. Only keys a platformer
/// is likely to bind are listed; everything else arrives as
/// `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------
    //
    // Reported as ordinary keys so they can be bound to held actions
    // (e.g. ShiftLeft → Run). `Modifiers` tracks the combined state.

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys the platform layer could not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Discrete events compare by type, key/button and modifiers.
/// `MouseMoved` events are equal regardless of coordinates so a buffer can
/// coalesce them (last position wins).
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse button pressed.
    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Mouse button released.
    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Cursor moved, screen space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unsupported event, ignored by the state tracker.
    Unidentified,
}

impl InputEvent {
    /// Shorthand for a key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// Shorthand for a key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    /// Returns `true` for events whose order matters (keys and buttons).
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. }
                | Self::KeyUp { .. }
                | Self::MouseButtonDown { .. }
                | Self::MouseButtonUp { .. }
        )
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            // Coordinates ignored for coalescing
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers, consistent with `eq`.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Combined modifier key state (left or right variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    //=====================================================================
    // Equality
    //=====================================================================

    #[test]
    fn key_events_compare_by_key_and_modifiers() {
        assert_eq!(InputEvent::key_down(KeyCode::Space), InputEvent::key_down(KeyCode::Space));
        assert_ne!(InputEvent::key_down(KeyCode::Space), InputEvent::key_up(KeyCode::Space));

        let shifted = InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::SHIFT };
        assert_ne!(InputEvent::key_down(KeyCode::Space), shifted);
    }

    #[test]
    fn mouse_moved_ignores_coordinates() {
        let a = InputEvent::MouseMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::MouseMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn hashset_coalesces_mouse_moves() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::MouseMoved { x: 20.0, y: 30.0 });
        assert_eq!(set.len(), 1);

        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    //=====================================================================
    // Classification
    //=====================================================================

    #[test]
    fn discrete_classification() {
        assert!(InputEvent::key_down(KeyCode::Escape).is_discrete());
        assert!(InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE
        }
        .is_discrete());
        assert!(!InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_discrete());
        assert!(!InputEvent::Unidentified.is_discrete());
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
    }
}
