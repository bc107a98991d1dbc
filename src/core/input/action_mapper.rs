//=========================================================================
// Action Mapper
//=========================================================================
//
// Binds physical triggers (keys, mouse buttons) to game actions per context.
//
// Architecture:
//   (Trigger, InputContext) → HashMap → Action
//   Action queries walk the active context's triggers and ask the
//   StateTracker about each one.
//
// Modifiers are deliberately not part of a binding: holding Shift for Run
// must not stop Space from meaning Jump.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, InputContext},
    event::{InputEvent, KeyCode, MouseButton},
    state_tracker::StateTracker,
};

//=== Trigger =============================================================

/// A physical input that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(KeyCode),
    Mouse(MouseButton),
}

//=== ActionMapper ========================================================

/// Resolves actions from triggers in the active context.
///
/// Several triggers may share one action (ArrowLeft and A both mean
/// MoveLeft). Binding a trigger again in the same context replaces it.
pub(crate) struct ActionMapper<A: Action> {
    bindings: HashMap<(Trigger, InputContext), A>,
    current_context: InputContext,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with Primary context active and no bindings.
    pub(crate) fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            current_context: InputContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    pub(crate) fn bind(&mut self, trigger: Trigger, action: A, context: InputContext) {
        self.bindings.insert((trigger, context), action);
    }

    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.bind(Trigger::Key(key), action, context);
    }

    pub(crate) fn bind_mouse(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.bind(Trigger::Mouse(button), action, context);
    }

    pub(crate) fn unbind(&mut self, trigger: Trigger, context: InputContext) {
        self.bindings.remove(&(trigger, context));
    }

    /// Removes every trigger bound to `action` in `context`.
    pub(crate) fn unbind_action(&mut self, action: A, context: InputContext) {
        self.bindings
            .retain(|&(_, ctx), bound| !(ctx == context && *bound == action));
    }

    /// Clears all bindings of a context.
    pub(crate) fn clear_context(&mut self, context: InputContext) {
        self.bindings.retain(|&(_, ctx), _| ctx != context);
    }

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a press event to its action in the active context.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        let trigger = match event {
            InputEvent::KeyDown { key, .. } => Trigger::Key(*key),
            InputEvent::MouseButtonDown { button, .. } => Trigger::Mouse(*button),
            _ => return None,
        };
        self.bindings.get(&(trigger, self.current_context)).copied()
    }

    //--- Action Queries ---------------------------------------------------

    /// `true` if any trigger of `action` went down this frame.
    pub(crate) fn is_pressed(&self, action: A, state: &StateTracker) -> bool {
        self.triggers_for(action).any(|trigger| match trigger {
            Trigger::Key(key) => state.is_key_pressed(key),
            Trigger::Mouse(button) => state.is_button_pressed(button),
        })
    }

    /// `true` while any trigger of `action` is held.
    pub(crate) fn is_down(&self, action: A, state: &StateTracker) -> bool {
        self.triggers_for(action).any(|trigger| match trigger {
            Trigger::Key(key) => state.is_key_down(key),
            Trigger::Mouse(button) => state.is_button_down(button),
        })
    }

    /// `true` if a trigger of `action` went up this frame and none is still held.
    pub(crate) fn is_released(&self, action: A, state: &StateTracker) -> bool {
        let released = self.triggers_for(action).any(|trigger| match trigger {
            Trigger::Key(key) => state.is_key_released(key),
            Trigger::Mouse(button) => state.is_button_released(button),
        });
        released && !self.is_down(action, state)
    }

    fn triggers_for(&self, action: A) -> impl Iterator<Item = Trigger> + '_ {
        let context = self.current_context;
        self.bindings
            .iter()
            .filter(move |((_, ctx), bound)| *ctx == context && **bound == action)
            .map(|((trigger, _), _)| *trigger)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::Modifiers;

    //--- Test Action Type -------------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        Run,
        MoveLeft,
        Confirm,
    }

    impl Action for TestAction {}

    //--- Test Helpers -----------------------------------------------------

    fn frame(state: &mut StateTracker, events: &[InputEvent]) {
        state.begin_frame();
        state.process_events(events);
        state.finalize_frame();
    }

    //=====================================================================
    // Event Mapping
    //=====================================================================

    #[test]
    fn maps_key_down_to_bound_action() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);

        assert_eq!(mapper.map_event(&InputEvent::key_down(KeyCode::Space)), Some(TestAction::Jump));
        assert_eq!(mapper.map_event(&InputEvent::key_up(KeyCode::Space)), None);
        assert_eq!(mapper.map_event(&InputEvent::MouseMoved { x: 1.0, y: 1.0 }), None);
    }

    #[test]
    fn modifiers_do_not_affect_mapping() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);

        let shifted = InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::SHIFT };
        assert_eq!(mapper.map_event(&shifted), Some(TestAction::Jump));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);
        mapper.bind_key(KeyCode::Space, TestAction::Confirm, InputContext::Primary);

        assert_eq!(mapper.map_event(&InputEvent::key_down(KeyCode::Space)), Some(TestAction::Confirm));
    }

    //=====================================================================
    // Contexts
    //=====================================================================

    #[test]
    fn same_key_differs_per_context() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let menu = InputContext::custom(0);
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);
        mapper.bind_key(KeyCode::Space, TestAction::Confirm, menu);

        let event = InputEvent::key_down(KeyCode::Space);
        assert_eq!(mapper.map_event(&event), Some(TestAction::Jump));

        mapper.set_context(menu);
        assert_eq!(mapper.current_context(), menu);
        assert_eq!(mapper.map_event(&event), Some(TestAction::Confirm));
    }

    #[test]
    fn clear_context_leaves_other_contexts() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let menu = InputContext::custom(0);
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);
        mapper.bind_key(KeyCode::Enter, TestAction::Confirm, menu);

        mapper.clear_context(InputContext::Primary);
        assert_eq!(mapper.map_event(&InputEvent::key_down(KeyCode::Space)), None);

        mapper.set_context(menu);
        assert_eq!(mapper.map_event(&InputEvent::key_down(KeyCode::Enter)), Some(TestAction::Confirm));
    }

    //=====================================================================
    // Action Queries
    //=====================================================================

    #[test]
    fn any_bound_trigger_satisfies_query() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::MoveLeft, InputContext::Primary);
        mapper.bind_key(KeyCode::KeyA, TestAction::MoveLeft, InputContext::Primary);

        frame(&mut state, &[InputEvent::key_down(KeyCode::KeyA)]);
        assert!(mapper.is_pressed(TestAction::MoveLeft, &state));
        assert!(mapper.is_down(TestAction::MoveLeft, &state));

        frame(&mut state, &[]);
        assert!(!mapper.is_pressed(TestAction::MoveLeft, &state));
        assert!(mapper.is_down(TestAction::MoveLeft, &state));
    }

    #[test]
    fn held_run_does_not_block_jump_edge() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_key(KeyCode::ShiftLeft, TestAction::Run, InputContext::Primary);
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);

        frame(&mut state, &[InputEvent::key_down(KeyCode::ShiftLeft)]);
        frame(
            &mut state,
            &[InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::SHIFT }],
        );

        assert!(mapper.is_down(TestAction::Run, &state));
        assert!(mapper.is_pressed(TestAction::Jump, &state));
    }

    #[test]
    fn mouse_trigger_queries() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_mouse(MouseButton::Left, TestAction::Confirm, InputContext::Primary);

        frame(
            &mut state,
            &[InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );
        assert!(mapper.is_pressed(TestAction::Confirm, &state));

        frame(
            &mut state,
            &[InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );
        assert!(mapper.is_released(TestAction::Confirm, &state));
    }

    #[test]
    fn release_of_one_trigger_while_other_held_is_not_released() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::MoveLeft, InputContext::Primary);
        mapper.bind_key(KeyCode::KeyA, TestAction::MoveLeft, InputContext::Primary);

        frame(
            &mut state,
            &[InputEvent::key_down(KeyCode::ArrowLeft), InputEvent::key_down(KeyCode::KeyA)],
        );
        frame(&mut state, &[InputEvent::key_up(KeyCode::KeyA)]);

        assert!(!mapper.is_released(TestAction::MoveLeft, &state));
        assert!(mapper.is_down(TestAction::MoveLeft, &state));
    }

    #[test]
    fn unbind_action_removes_all_its_triggers() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::MoveLeft, InputContext::Primary);
        mapper.bind_key(KeyCode::KeyA, TestAction::MoveLeft, InputContext::Primary);
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);

        mapper.unbind_action(TestAction::MoveLeft, InputContext::Primary);
        mapper.unbind(Trigger::Key(KeyCode::Space), InputContext::Primary);

        frame(
            &mut state,
            &[InputEvent::key_down(KeyCode::KeyA), InputEvent::key_down(KeyCode::Space)],
        );
        assert!(!mapper.is_down(TestAction::MoveLeft, &state));
        assert!(!mapper.is_down(TestAction::Jump, &state));
    }

    #[test]
    fn queries_ignore_inactive_context() {
        let mut mapper = ActionMapper::<TestAction>::new();
        let mut state = StateTracker::new();
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);
        mapper.set_context(InputContext::custom(3));

        frame(&mut state, &[InputEvent::key_down(KeyCode::Space)]);
        assert!(!mapper.is_pressed(TestAction::Jump, &state));
    }
}
