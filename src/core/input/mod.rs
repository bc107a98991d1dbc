//=========================================================================
// Input System
//=========================================================================
//
// Turns raw platform events into the queries gameplay code asks each frame.
//
// Architecture:
//   InputEvent batches → StateTracker (held / edges)
//                      → ActionMapper (action edges and held state)
//                      → VirtualAxis   (smoothed [-1, 1] values)
//
// Frame lifecycle (driven by the orchestrator, once per variable tick):
//   process_frame(batches, dt) → scenes query → next frame
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
mod action_mapper;
pub mod axis;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, InputContext};
pub use action_mapper::Trigger;
pub use axis::{AxisId, AxisSettings};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use action_mapper::ActionMapper;
use axis::VirtualAxis;

//=== InputSystem =========================================================

/// Per-frame input facade: raw state, action bindings and virtual axes.
pub struct InputSystem<A: Action> {
    state: StateTracker,
    mapper: ActionMapper<A>,
    axes: HashMap<AxisId, VirtualAxis<A>>,

    /// Actions whose trigger went down this frame, in event order.
    actions: Vec<A>,

    /// Set by `release_all`, applied at the start of the next frame.
    release_pending: bool,
}

impl<A: Action> InputSystem<A> {
    pub fn new() -> Self {
        Self {
            state: StateTracker::new(),
            mapper: ActionMapper::new(),
            axes: HashMap::new(),
            actions: Vec::new(),
            release_pending: false,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies this frame's event batches and advances every virtual axis.
    ///
    /// `dt` is the unscaled frame time, so axes still settle while the
    /// simulation is paused.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>], dt: f32) {
        self.state.begin_frame();
        self.actions.clear();

        if self.release_pending {
            self.release_pending = false;
            self.state.release_all();
            for axis in self.axes.values_mut() {
                axis.reset();
            }
        }

        for batch in batches {
            self.state.process_events(batch);
            self.actions
                .extend(batch.iter().filter_map(|event| self.mapper.map_event(event)));
        }

        self.state.finalize_frame();

        for axis in self.axes.values_mut() {
            let negative = self.mapper.is_down(axis.negative(), &self.state);
            let positive = self.mapper.is_down(axis.positive(), &self.state);
            axis.update(negative, positive, dt);
        }

        if !self.actions.is_empty() {
            trace!(target: "input", "Actions this frame: {:?}", self.actions);
        }
    }

    /// Drops all held input at the start of the next frame, e.g. when the
    /// window loses focus and key-up events will never arrive.
    pub fn release_all(&mut self) {
        debug!(target: "input", "Releasing all held input");
        self.release_pending = true;
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key in the Primary context.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action, InputContext::Primary);
    }

    pub fn bind_key_in(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.mapper.bind_key(key, action, context);
    }

    /// Binds a mouse button in the Primary context.
    pub fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mapper.bind_mouse(button, action, InputContext::Primary);
    }

    pub fn bind_mouse_in(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.mapper.bind_mouse(button, action, context);
    }

    pub fn unbind(&mut self, trigger: Trigger, context: InputContext) {
        self.mapper.unbind(trigger, context);
    }

    pub fn unbind_action(&mut self, action: A, context: InputContext) {
        self.mapper.unbind_action(action, context);
    }

    pub fn clear_context(&mut self, context: InputContext) {
        self.mapper.clear_context(context);
    }

    pub fn set_context(&mut self, context: InputContext) {
        debug!(target: "input", "Input context → {:?}", context);
        self.mapper.set_context(context);
    }

    pub fn current_context(&self) -> InputContext {
        self.mapper.current_context()
    }

    /// Registers a virtual axis driven by two actions. Replaces any axis
    /// already registered under `id`.
    pub fn register_axis(&mut self, id: AxisId, negative: A, positive: A, settings: AxisSettings) {
        self.axes.insert(id, VirtualAxis::new(negative, positive, settings));
    }

    //--- Action Queries ---------------------------------------------------

    /// `true` on the frame a trigger of `action` went down.
    pub fn action_pressed(&self, action: A) -> bool {
        self.mapper.is_pressed(action, &self.state)
    }

    /// `true` while a trigger of `action` is held.
    pub fn action_down(&self, action: A) -> bool {
        self.mapper.is_down(action, &self.state)
    }

    pub fn action_released(&self, action: A) -> bool {
        self.mapper.is_released(action, &self.state)
    }

    /// Actions triggered this frame, in arrival order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Current value of a virtual axis; unregistered axes read 0.
    pub fn axis(&self, id: AxisId) -> f32 {
        self.axes.get(&id).map_or(0.0, VirtualAxis::value)
    }

    //--- Raw State --------------------------------------------------------

    /// Raw key/button/mouse state, independent of context.
    pub fn state(&self) -> &StateTracker {
        &self.state
    }
}

impl<A: Action> Default for InputSystem<A> {
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

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Left,
        Right,
        Jump,
    }

    impl Action for TestAction {}

    fn system() -> InputSystem<TestAction> {
        let mut input = InputSystem::new();
        input.bind_key(KeyCode::ArrowLeft, TestAction::Left);
        input.bind_key(KeyCode::ArrowRight, TestAction::Right);
        input.bind_key(KeyCode::Space, TestAction::Jump);
        input.register_axis(
            AxisId::HORIZONTAL,
            TestAction::Left,
            TestAction::Right,
            AxisSettings::default(),
        );
        input
    }

    #[test]
    fn actions_collected_in_event_order() {
        let mut input = system();
        input.process_frame(
            &[vec![
                InputEvent::key_down(KeyCode::Space),
                InputEvent::key_down(KeyCode::ArrowLeft),
            ]],
            0.016,
        );

        assert_eq!(input.actions(), &[TestAction::Jump, TestAction::Left]);
        assert!(input.action_pressed(TestAction::Jump));

        input.process_frame(&[], 0.016);
        assert!(input.actions().is_empty());
        assert!(!input.action_pressed(TestAction::Jump));
        assert!(input.action_down(TestAction::Jump));
    }

    #[test]
    fn axis_follows_held_direction() {
        let mut input = system();
        input.process_frame(&[vec![InputEvent::key_down(KeyCode::ArrowRight)]], 0.1);
        assert!(input.axis(AxisId::HORIZONTAL) > 0.0);

        for _ in 0..5 {
            input.process_frame(&[], 0.1);
        }
        assert_eq!(input.axis(AxisId::HORIZONTAL), 1.0);
    }

    #[test]
    fn unknown_axis_reads_zero() {
        let input = system();
        assert_eq!(input.axis(AxisId("Vertical")), 0.0);
    }

    #[test]
    fn release_all_clears_held_state_and_axes() {
        let mut input = system();
        input.process_frame(&[vec![InputEvent::key_down(KeyCode::ArrowLeft)]], 0.1);
        assert!(input.axis(AxisId::HORIZONTAL) < 0.0);

        input.release_all();
        input.process_frame(&[], 0.1);

        assert!(!input.action_down(TestAction::Left));
        assert!(input.action_released(TestAction::Left));
        assert_eq!(input.axis(AxisId::HORIZONTAL), 0.0);
    }

    #[test]
    fn context_switch_changes_resolution() {
        let mut input = system();
        let menu = InputContext::custom(0);
        input.set_context(menu);
        assert_eq!(input.current_context(), menu);

        input.process_frame(&[vec![InputEvent::key_down(KeyCode::Space)]], 0.016);
        assert!(!input.action_pressed(TestAction::Jump));
        assert!(input.state().is_key_pressed(KeyCode::Space));
    }
}
