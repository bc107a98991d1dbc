//=========================================================================
// Locomotion Config
//=========================================================================
//
// Tunables for the locomotion controller. Loadable from RON; missing
// fields fall back to the defaults below.
//
//   (
//       walk_speed: 5.0,
//       run_speed: 10.0,
//       jump_force: 10.0,
//       jump_cooldown: 0.5,
//   )
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::game::error::ConfigError;
use crate::game::physics::{GROUND_LAYER, MOVING_PLATFORM_LAYER};

//=== LocomotionConfig ====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal speed in units per second.
    pub walk_speed: f32,
    /// Horizontal speed while Run is held.
    pub run_speed: f32,
    /// Upward impulse applied once per accepted jump.
    pub jump_force: f32,
    /// Length of the downward ground and platform probes.
    pub ground_check_distance: f32,
    /// Minimum scaled seconds between accepted jumps.
    pub jump_cooldown: f32,
    /// Lerp factor per fixed tick for the locomotion blend.
    pub blend_smoothing: f32,
    /// |axis| above this counts as moving.
    pub move_threshold: f32,
    pub ground_layer: String,
    pub platform_layer: String,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 10.0,
            jump_force: 10.0,
            ground_check_distance: 0.1,
            jump_cooldown: 0.5,
            blend_smoothing: 0.1,
            move_threshold: 0.01,
            ground_layer: GROUND_LAYER.to_string(),
            platform_layer: MOVING_PLATFORM_LAYER.to_string(),
        }
    }
}

impl LocomotionConfig {
    /// Parses and validates a RON document.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: LocomotionConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("jump_force", self.jump_force),
            ("ground_check_distance", self.ground_check_distance),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("jump_cooldown", self.jump_cooldown),
            ("move_threshold", self.move_threshold),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(self.blend_smoothing > 0.0 && self.blend_smoothing <= 1.0) {
            return Err(ConfigError::SmoothingOutOfRange(self.blend_smoothing));
        }

        Ok(())
    }

    /// Speed for this tick.
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
