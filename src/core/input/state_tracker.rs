//=========================================================================
// State Tracker
//=========================================================================
//
// Raw input state with per-frame edge detection.
//
// Architecture:
//   InputEvent → process_events() → ButtonSet<KeyCode> / ButtonSet<MouseButton>
//
// Frame lifecycle: begin_frame() → process_events() → finalize_frame() → query
//
// Edges (pressed / released) live for exactly one frame, which is what the
// controllers mean by "toggle edge" and "jump edge".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== ButtonSet ===========================================================

/// Held state plus this frame's transitions for one kind of button.
#[derive(Debug, Clone)]
struct ButtonSet<T: Copy + Eq + Hash> {
    down: HashSet<T>,
    pressed: HashSet<T>,
    released: HashSet<T>,
}

impl<T: Copy + Eq + Hash> ButtonSet<T> {
    fn new() -> Self {
        Self {
            down: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
        }
    }

    fn clear_edges(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// OS key repeat sends KeyDown while held; only the first one is an edge.
    fn press(&mut self, button: T) {
        if self.down.insert(button) {
            self.pressed.insert(button);
        }
    }

    fn release(&mut self, button: T) {
        if self.down.remove(&button) {
            self.released.insert(button);
        }
    }
}

//=== StateTracker ========================================================

/// Tracks keys/buttons held across frames and the edges of the current frame.
#[derive(Debug, Clone)]
pub struct StateTracker {
    keys: ButtonSet<KeyCode>,
    buttons: ButtonSet<MouseButton>,
    modifiers: Modifiers,

    mouse_position: (f32, f32),
    frame_start_mouse: (f32, f32),
    mouse_delta: (f32, f32),
}

impl StateTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys: ButtonSet::new(),
            buttons: ButtonSet::new(),
            modifiers: Modifiers::NONE,
            mouse_position: (0.0, 0.0),
            frame_start_mouse: (0.0, 0.0),
            mouse_delta: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Drops last frame's edges; held state survives.
    pub(crate) fn begin_frame(&mut self) {
        self.keys.clear_edges();
        self.buttons.clear_edges();
        self.frame_start_mouse = self.mouse_position;
    }

    /// Applies a batch of events in arrival order.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Computes derived per-frame values (mouse delta).
    pub(crate) fn finalize_frame(&mut self) {
        self.mouse_delta = (
            self.mouse_position.0 - self.frame_start_mouse.0,
            self.mouse_position.1 - self.frame_start_mouse.1,
        );
    }

    /// Releases everything held, emitting release edges.
    ///
    /// Used when the window loses focus and key-up events would be lost.
    pub(crate) fn release_all(&mut self) {
        let keys: Vec<KeyCode> = self.keys.down.iter().copied().collect();
        for key in keys {
            self.keys.release(key);
        }
        let buttons: Vec<MouseButton> = self.buttons.down.iter().copied().collect();
        for button in buttons {
            self.buttons.release(button);
        }
        self.modifiers = Modifiers::NONE;
    }

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                self.keys.press(*key);
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                self.keys.release(*key);
            }
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                self.buttons.press(*button);
            }
            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                self.buttons.release(*button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }
            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// `true` only on the frame the key went UP → DOWN.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.pressed.contains(&key)
    }

    /// `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.down.contains(&key)
    }

    /// `true` only on the frame the key went DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys.released.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.pressed.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons.released.contains(&button)
    }

    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Cursor movement since the start of the frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    /// Modifier state reported with the most recent key/button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Iterates keys currently held (unordered).
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys.down.iter()
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.begin_frame();
        tracker.process_events(events);
        tracker.finalize_frame();
    }

    fn mouse_down(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn pressed_edge_lasts_one_frame() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::key_down(KeyCode::Space)]);
        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        frame(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        frame(&mut tracker, &[InputEvent::key_up(KeyCode::Space)]);
        assert!(!tracker.is_key_down(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
    }

    #[test]
    fn key_repeat_does_not_create_new_edge() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::key_down(KeyCode::Escape)]);
        frame(&mut tracker, &[InputEvent::key_down(KeyCode::Escape)]);

        assert!(tracker.is_key_down(KeyCode::Escape));
        assert!(!tracker.is_key_pressed(KeyCode::Escape), "Repeat must not re-trigger");
    }

    #[test]
    fn press_and_release_within_one_frame_keeps_both_edges() {
        let mut tracker = StateTracker::new();

        frame(
            &mut tracker,
            &[InputEvent::key_down(KeyCode::Space), InputEvent::key_up(KeyCode::Space)],
        );

        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[InputEvent::key_up(KeyCode::KeyA)]);
        assert!(!tracker.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn release_all_emits_release_edges() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[InputEvent::key_down(KeyCode::ShiftLeft), mouse_down(MouseButton::Left)]);

        tracker.begin_frame();
        tracker.release_all();

        assert!(tracker.is_key_released(KeyCode::ShiftLeft));
        assert!(tracker.is_button_released(MouseButton::Left));
        assert_eq!(tracker.keys_down().count(), 0);
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn mouse_delta_is_relative_to_frame_start() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseMoved { x: 100.0, y: 50.0 }]);
        assert_eq!(tracker.mouse_delta(), (100.0, 50.0));

        frame(&mut tracker, &[InputEvent::MouseMoved { x: 110.0, y: 40.0 }]);
        assert_eq!(tracker.mouse_delta(), (10.0, -10.0));

        frame(&mut tracker, &[]);
        assert_eq!(tracker.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn modifiers_follow_latest_event() {
        let mut tracker = StateTracker::new();
        frame(
            &mut tracker,
            &[InputEvent::KeyDown { key: KeyCode::KeyD, modifiers: Modifiers::SHIFT }],
        );
        assert!(tracker.modifiers().shift);
    }
}
