//=========================================================================
// Level Scene
//=========================================================================
//
// The playable scene: one character in a sandbox world, with the pause
// menu on top.
//
//   update()        pause toggle → menu buttons → attack → input phase
//   fixed_update()  physics phase → sandbox step
//
// While paused, R restarts the level and Q returns to the main menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::scene::{Scene, SceneRequests};
use crate::game::animation::AnimatorParameters;
use crate::game::controls::{ControlAction, ControlInput};
use crate::game::error::ConfigError;
use crate::game::locomotion::{LocomotionConfig, LocomotionController};
use crate::game::pause::{MenuOverlay, PauseController};
use crate::game::physics::Vec3;
use crate::game::sandbox::{SandboxBody, SandboxWorld};

//=== LevelScene ==========================================================

pub type Player = LocomotionController<SandboxBody, AnimatorParameters>;

pub struct LevelScene {
    pause: PauseController<MenuOverlay, SceneRequests>,
    player: Player,
    world: SandboxWorld,
}

impl LevelScene {
    /// The demo level with the player at the origin.
    pub fn new(
        context: &GlobalContext<ControlAction>,
        config: LocomotionConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_world(context, config, SandboxWorld::demo_level()?, Vec3::ZERO)
    }

    pub fn with_world(
        context: &GlobalContext<ControlAction>,
        config: LocomotionConfig,
        world: SandboxWorld,
        spawn: Vec3,
    ) -> Result<Self, ConfigError> {
        let player = LocomotionController::builder(context.clock.clone())
            .config(config)
            .body(SandboxBody::at(spawn))
            .animator(AnimatorParameters::new())
            .build()?;

        let pause = PauseController::new(
            MenuOverlay::new(),
            context.scenes.clone(),
            context.clock.clone(),
        );

        Ok(Self { pause, player, world })
    }

    pub fn pause(&self) -> &PauseController<MenuOverlay, SceneRequests> {
        &self.pause
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &SandboxWorld {
        &self.world
    }
}

impl Scene<ControlAction> for LevelScene {
    fn on_enter(&mut self, _context: &GlobalContext<ControlAction>) {
        info!(target: "scene", "Level started at {:?}", self.player.body().transform.position);
    }

    fn update(&mut self, context: &GlobalContext<ControlAction>) {
        let input = &context.input;
        self.pause.on_variable_tick(context.frame_delta, input);

        if self.pause.is_paused() {
            if input.pressed(ControlAction::Restart) {
                self.pause.restart();
            } else if input.pressed(ControlAction::Quit) {
                self.pause.exit_to_menu();
            }
        } else if input.pressed(ControlAction::Attack) {
            self.player.set_attack_animation();
        }

        self.player.on_variable_tick(context.frame_delta, input, &self.world);
    }

    fn fixed_update(&mut self, context: &GlobalContext<ControlAction>, dt: f32) {
        self.player.on_fixed_tick(dt, &context.input);
        self.world.step(self.player.body_mut(), dt);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::SimulationClock;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{SceneIndex, MENU_SCENE, RESTART_SCENE};
    use crate::game::controls::install_default_bindings;
    use crate::game::locomotion::blend;
    use crossbeam_channel::Receiver;

    fn setup() -> (GlobalContext<ControlAction>, Receiver<SceneIndex>, LevelScene) {
        let (requests, receiver) = SceneRequests::channel();
        let mut context = GlobalContext::new(SimulationClock::new(), requests);
        install_default_bindings(&mut context.input);
        let level = LevelScene::new(&context, LocomotionConfig::default()).unwrap();
        (context, receiver, level)
    }

    fn press(context: &mut GlobalContext<ControlAction>, key: KeyCode) {
        context.input.process_frame(&[vec![InputEvent::key_down(key), InputEvent::key_up(key)]], 0.016);
    }

    #[test]
    fn escape_pauses_the_clock() {
        let (mut context, _rx, mut level) = setup();

        press(&mut context, KeyCode::Escape);
        level.update(&context);

        assert!(level.pause().is_paused());
        assert!(context.clock.is_stopped());
    }

    #[test]
    fn restart_key_only_works_while_paused() {
        let (mut context, rx, mut level) = setup();

        press(&mut context, KeyCode::KeyR);
        level.update(&context);
        assert!(rx.try_recv().is_err());

        press(&mut context, KeyCode::Escape);
        level.update(&context);
        press(&mut context, KeyCode::KeyR);
        level.update(&context);

        assert_eq!(rx.try_recv(), Ok(RESTART_SCENE));
        assert_eq!(context.clock.time_scale(), 1.0);
    }

    #[test]
    fn quit_key_requests_menu() {
        let (mut context, rx, mut level) = setup();

        press(&mut context, KeyCode::Escape);
        level.update(&context);
        press(&mut context, KeyCode::KeyQ);
        level.update(&context);

        assert_eq!(rx.try_recv(), Ok(MENU_SCENE));
    }

    #[test]
    fn attack_snaps_blend() {
        let (mut context, _rx, mut level) = setup();

        press(&mut context, KeyCode::KeyF);
        level.update(&context);

        assert_eq!(level.player().blend(), blend::ATTACK);
    }

    #[test]
    fn player_starts_grounded_after_first_update() {
        let (mut context, _rx, mut level) = setup();
        context.input.process_frame(&[], 0.016);
        level.update(&context);
        level.fixed_update(&context, 0.02);

        assert!(level.player().state().grounded);
        assert_eq!(level.player().body().transform.position.y, 0.0);
    }
}
