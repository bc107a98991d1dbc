//=========================================================================
// Locomotion Controller
//=========================================================================
//
// Maps player input onto a character body: horizontal motion, facing,
// jumps with a cooldown, riding moving platforms, and the blend scalar
// the animator samples.
//
// Two phases, called by the host in this order each frame:
//
//   on_variable_tick(dt, input, physics)   once per frame
//     ├─ ground probe         → grounded
//     ├─ jump edge + cooldown → jump latched
//     └─ platform probe       → attach / detach
//
//   on_fixed_tick(dt, input)               zero or more times per frame
//     ├─ x += axis · speed · dt
//     ├─ facing via scale.z
//     ├─ blend (smoothed on ground, jump in the air)
//     └─ latched jump → one upward impulse
//
//=========================================================================

//=== Module Declarations =================================================

pub mod blend;
mod config;

//=== Public API ==========================================================

pub use config::LocomotionConfig;

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::clock::SimulationClock;
use crate::core::input::AxisId;
use crate::game::animation::{AnimationSink, BLEND, SMOOTH_BLEND};
use crate::game::controls::{ControlAction, ControlInput};
use crate::game::error::ConfigError;
use crate::game::physics::{
    CharacterBody, CollisionLayers, LayerMask, PhysicsQuery, PlatformId, Vec3,
};
use blend::BlendState;

//=== Constants ===========================================================

/// Yaw applied at construction so the character faces along +x.
pub const SIDE_VIEW_YAW: f32 = 90.0;

//=== LocomotionState =====================================================

/// Per-character state carried between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionState {
    /// Result of this frame's ground probe.
    pub grounded: bool,
    /// Set by an accepted jump, cleared when the impulse is applied.
    pub jump_latched: bool,
    /// Scaled-clock time of the last accepted jump.
    pub last_jump_time: Option<f64>,
    pub attached_platform: Option<PlatformId>,
    /// Platform under the character on the previous input tick.
    pub tracked_platform: Option<PlatformId>,
}

//=== LocomotionController ================================================

pub struct LocomotionController<B: CharacterBody, S: AnimationSink> {
    config: LocomotionConfig,
    body: B,
    animator: S,
    clock: SimulationClock,
    ground_mask: LayerMask,
    platform_mask: LayerMask,
    state: LocomotionState,
    blend: BlendState,
    published_blend: Option<f32>,
    published_smooth: Option<f32>,
}

impl<B: CharacterBody, S: AnimationSink> LocomotionController<B, S> {
    /// Starts a builder; body and animator must be supplied before `build()`.
    pub fn builder(clock: SimulationClock) -> LocomotionControllerBuilder<B, S> {
        LocomotionControllerBuilder {
            clock,
            config: LocomotionConfig::default(),
            layers: CollisionLayers::default(),
            body: None,
            animator: None,
        }
    }

    //--- Input Phase ------------------------------------------------------

    /// Ground probe, jump latching and platform attachment.
    pub fn on_variable_tick(&mut self, _dt: f32, input: &dyn ControlInput, physics: &dyn PhysicsQuery) {
        let origin = self.body.transform().position;
        let reach = self.config.ground_check_distance;

        self.state.grounded = physics
            .raycast(origin, Vec3::DOWN, reach, self.ground_mask)
            .is_some();

        if self.state.grounded && input.pressed(ControlAction::Jump) {
            let now = self.clock.time();
            if self.cooldown_elapsed(now) {
                self.state.jump_latched = true;
                self.state.last_jump_time = Some(now);
                debug!(target: "locomotion", "Jump accepted at t={:.3}", now);
            } else {
                trace!(target: "locomotion", "Jump ignored, cooling down (t={:.3})", now);
            }
        }

        let under = if self.state.grounded {
            physics
                .raycast(origin, Vec3::DOWN, reach, self.platform_mask)
                .and_then(|hit| hit.platform)
        } else {
            None
        };

        let attach = match (under, self.state.tracked_platform) {
            (Some(current), Some(previous)) if current == previous => Some(current),
            _ => None,
        };
        self.state.tracked_platform = under;

        if attach != self.state.attached_platform {
            match attach {
                Some(platform) => debug!(target: "locomotion", "Attached to {:?}", platform),
                None => debug!(target: "locomotion", "Detached from platform"),
            }
        }
        self.state.attached_platform = attach;
        self.body.transform_mut().parent = attach;
    }

    //--- Physics Phase ----------------------------------------------------

    /// Movement, facing, blend and jump impulse for one fixed step.
    pub fn on_fixed_tick(&mut self, dt: f32, input: &dyn ControlInput) {
        let h = input.axis(AxisId::HORIZONTAL);
        let running = input.held(ControlAction::Run);

        let transform = self.body.transform_mut();
        transform.position.x += h * self.config.speed(running) * dt;
        if h > 0.0 {
            transform.scale.z = 1.0;
        } else if h < 0.0 {
            transform.scale.z = -1.0;
        }

        let target = blend::locomotion_target(h.abs() > self.config.move_threshold, running);
        if self.state.grounded {
            self.blend.smooth_toward(target);
        } else {
            self.blend.snap(blend::JUMP);
        }

        if input.pressed(ControlAction::Jump) {
            self.blend.snap(blend::JUMP);
        }

        if self.state.jump_latched {
            self.body.add_impulse(Vec3::UP * self.config.jump_force);
            self.blend.snap(blend::JUMP);
            self.state.jump_latched = false;
            trace!(target: "locomotion", "Jump impulse {}", self.config.jump_force);
        } else if self.body.velocity().y < 0.0 && self.state.grounded {
            self.blend.smooth_toward(target);
        }

        self.publish();
    }

    /// Shows the attack pose until the next fixed tick recomputes the blend.
    pub fn set_attack_animation(&mut self) {
        self.blend.snap(blend::ATTACK);
        self.publish();
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn blend(&self) -> f32 {
        self.blend.blend()
    }

    pub fn smoothed_blend(&self) -> f32 {
        self.blend.smoothed()
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn animator(&self) -> &S {
        &self.animator
    }

    //--- Internal Helpers -------------------------------------------------

    fn cooldown_elapsed(&self, now: f64) -> bool {
        match self.state.last_jump_time {
            Some(last) => now - last > self.config.jump_cooldown as f64,
            None => true,
        }
    }

    fn publish(&mut self) {
        let blend = self.blend.blend();
        if self.published_blend != Some(blend) {
            self.animator.set_float(BLEND, blend);
            self.published_blend = Some(blend);
        }

        let smooth = self.blend.smoothed();
        if self.published_smooth != Some(smooth) {
            self.animator.set_float(SMOOTH_BLEND, smooth);
            self.published_smooth = Some(smooth);
        }
    }
}

//=== LocomotionControllerBuilder =========================================

pub struct LocomotionControllerBuilder<B: CharacterBody, S: AnimationSink> {
    clock: SimulationClock,
    config: LocomotionConfig,
    layers: CollisionLayers,
    body: Option<B>,
    animator: Option<S>,
}

impl<B: CharacterBody, S: AnimationSink> LocomotionControllerBuilder<B, S> {
    pub fn config(mut self, config: LocomotionConfig) -> Self {
        self.config = config;
        self
    }

    /// Layer table used to resolve the ground and platform layer names.
    pub fn layers(mut self, layers: CollisionLayers) -> Self {
        self.layers = layers;
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn animator(mut self, animator: S) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Validates everything and puts the body in its starting pose:
    /// side-on yaw, gravity on, blend 0.
    pub fn build(self) -> Result<LocomotionController<B, S>, ConfigError> {
        self.config.validate()?;
        let ground_mask = self.layers.mask(&[self.config.ground_layer.as_str()])?;
        let platform_mask = self.layers.mask(&[self.config.platform_layer.as_str()])?;

        let mut body = self.body.ok_or(ConfigError::MissingCollaborator("character body"))?;
        let mut animator = self.animator.ok_or(ConfigError::MissingCollaborator("animation sink"))?;

        body.transform_mut().yaw_degrees = SIDE_VIEW_YAW;
        body.set_use_gravity(true);
        animator.set_float(BLEND, blend::IDLE);

        info!(
            target: "locomotion",
            "Locomotion ready (walk {}, run {}, jump {} / {}s)",
            self.config.walk_speed,
            self.config.run_speed,
            self.config.jump_force,
            self.config.jump_cooldown
        );

        Ok(LocomotionController {
            blend: BlendState::new(self.config.blend_smoothing),
            config: self.config,
            body,
            animator,
            clock: self.clock,
            ground_mask,
            platform_mask,
            state: LocomotionState::default(),
            published_blend: Some(blend::IDLE),
            published_smooth: None,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
