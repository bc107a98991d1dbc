//=========================================================================
// Pause Controller
//=========================================================================
//
// Toggles the pause overlay and freezes simulation time.
//
//   Running ──Pause edge──► Paused     overlay shown, time-scale 0
//   Paused  ──Pause edge──► Running    overlay hidden, time-scale 1
//
// The overlay's buttons call resume(), restart() and exit_to_menu()
// directly. Scene loads go through a SceneLoader and land at the next
// tick boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::clock::SimulationClock;
use crate::core::scene::{SceneIndex, SceneLoader, MENU_SCENE, RESTART_SCENE};
use crate::game::controls::{ControlAction, ControlInput};

//=== Overlay =============================================================

/// A UI element that can be shown or hidden.
pub trait Overlay {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// The in-game pause menu.
#[derive(Debug, Default)]
pub struct MenuOverlay {
    active: bool,
}

impl MenuOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Overlay for MenuOverlay {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

//=== PauseState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

//=== PauseController =====================================================

pub struct PauseController<O: Overlay, L: SceneLoader> {
    state: PauseState,
    overlay: O,
    loader: L,
    clock: SimulationClock,
    restart_scene: SceneIndex,
}

impl<O: Overlay, L: SceneLoader> PauseController<O, L> {
    /// Starts Running with the overlay hidden.
    pub fn new(mut overlay: O, loader: L, clock: SimulationClock) -> Self {
        overlay.set_active(false);
        Self {
            state: PauseState::Running,
            overlay,
            loader,
            clock,
            restart_scene: RESTART_SCENE,
        }
    }

    /// Scene `restart()` loads; defaults to [`RESTART_SCENE`].
    pub fn with_restart_scene(mut self, index: SceneIndex) -> Self {
        self.restart_scene = index;
        self
    }

    //--- Ticks ------------------------------------------------------------

    /// Toggles on the Pause edge.
    pub fn on_variable_tick(&mut self, _dt: f32, input: &dyn ControlInput) {
        if input.pressed(ControlAction::Pause) {
            self.toggle();
        }
    }

    //--- Transitions ------------------------------------------------------

    pub fn toggle(&mut self) {
        match self.state {
            PauseState::Running => self.pause(),
            PauseState::Paused => self.resume(),
        }
    }

    /// Shows the overlay and stops time. No-op when already paused.
    pub fn pause(&mut self) {
        self.enter(PauseState::Paused);
    }

    /// Hides the overlay and restores time-scale 1. No-op when running.
    pub fn resume(&mut self) {
        self.enter(PauseState::Running);
    }

    /// Reloads the restart scene at normal speed.
    pub fn restart(&mut self) {
        info!(target: "pause", "Restarting into scene {:?}", self.restart_scene);
        self.loader.load_scene(self.restart_scene);
        self.enter(PauseState::Running);
    }

    /// Loads the main menu. The time-scale is left as it is; the menu scene
    /// owns its own speed.
    pub fn exit_to_menu(&mut self) {
        info!(target: "pause", "Exiting to menu");
        self.loader.load_scene(MENU_SCENE);
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> PauseState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter(&mut self, state: PauseState) {
        let paused = state == PauseState::Paused;
        self.overlay.set_active(paused);
        self.clock.set_time_scale(if paused { 0.0 } else { 1.0 });

        if self.state != state {
            info!(target: "pause", "{:?} → {:?}", self.state, state);
            self.state = state;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::AxisId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Loads(RefCell<Vec<SceneIndex>>);

    impl SceneLoader for Loads {
        fn load_scene(&self, index: SceneIndex) {
            self.0.borrow_mut().push(index);
        }
    }

    struct PauseKey(bool);

    impl ControlInput for PauseKey {
        fn pressed(&self, action: ControlAction) -> bool {
            self.0 && action == ControlAction::Pause
        }

        fn held(&self, _action: ControlAction) -> bool {
            false
        }

        fn axis(&self, _id: AxisId) -> f32 {
            0.0
        }
    }

    fn controller() -> (PauseController<MenuOverlay, Loads>, SimulationClock) {
        let clock = SimulationClock::new();
        (PauseController::new(MenuOverlay::new(), Loads::default(), clock.clone()), clock)
    }

    fn snapshot(controller: &PauseController<MenuOverlay, Loads>, clock: &SimulationClock) -> (PauseState, bool, f32) {
        (controller.state(), controller.overlay().is_active(), clock.time_scale())
    }

    #[test]
    fn construction_hides_overlay() {
        let mut overlay = MenuOverlay::new();
        overlay.set_active(true);

        let controller = PauseController::new(overlay, Loads::default(), SimulationClock::new());
        assert!(!controller.overlay().is_active());
        assert_eq!(controller.state(), PauseState::Running);
    }

    #[test]
    fn pause_edge_toggles() {
        let (mut controller, clock) = controller();

        controller.on_variable_tick(0.016, &PauseKey(true));
        assert_eq!(snapshot(&controller, &clock), (PauseState::Paused, true, 0.0));

        controller.on_variable_tick(0.016, &PauseKey(false));
        assert!(controller.is_paused());

        controller.on_variable_tick(0.016, &PauseKey(true));
        assert_eq!(snapshot(&controller, &clock), (PauseState::Running, false, 1.0));
    }

    #[test]
    fn double_toggle_restores_everything() {
        let (mut controller, clock) = controller();
        let before = snapshot(&controller, &clock);

        controller.toggle();
        controller.toggle();

        assert_eq!(snapshot(&controller, &clock), before);
    }

    #[test]
    fn resume_is_idempotent() {
        for toggles in 0..4 {
            let (mut controller, clock) = controller();
            for _ in 0..toggles {
                controller.toggle();
            }

            controller.resume();
            assert_eq!(snapshot(&controller, &clock), (PauseState::Running, false, 1.0), "after {} toggles", toggles);

            controller.resume();
            assert_eq!(snapshot(&controller, &clock), (PauseState::Running, false, 1.0));
        }
    }

    #[test]
    fn pause_is_idempotent() {
        let (mut controller, clock) = controller();
        controller.pause();
        controller.pause();
        assert_eq!(snapshot(&controller, &clock), (PauseState::Paused, true, 0.0));
    }

    #[test]
    fn restart_while_paused_resets_scale() {
        let (mut controller, clock) = controller();
        controller.pause();

        controller.restart();

        assert_eq!(controller.loader().0.borrow().as_slice(), &[RESTART_SCENE]);
        assert_eq!(clock.time_scale(), 1.0);
        assert!(!controller.overlay().is_active());
    }

    #[test]
    fn restart_target_is_configurable() {
        let (controller, _clock) = controller();
        let mut controller = controller.with_restart_scene(SceneIndex(2));
        controller.restart();
        assert_eq!(controller.loader().0.borrow().as_slice(), &[SceneIndex(2)]);
    }

    #[test]
    fn exit_to_menu_leaves_scale_alone() {
        let (mut controller, clock) = controller();
        controller.pause();

        controller.exit_to_menu();

        assert_eq!(controller.loader().0.borrow().as_slice(), &[MENU_SCENE]);
        assert_eq!(clock.time_scale(), 0.0);
    }
}
