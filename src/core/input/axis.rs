//=========================================================================
// Virtual Axis
//=========================================================================
//
// A smoothed [-1, 1] value driven by two digital actions.
//
// Each frame the value moves toward the raw target (+1, -1 or 0):
//   - toward ±1 at `sensitivity` units/second while a direction is held
//   - back to 0 at `gravity` units/second once released
//   - with `snap`, reversing direction jumps through 0 first
//   - magnitudes below `dead_zone` read as exactly 0
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::action::Action;

//=== AxisId ==============================================================

/// Names a virtual axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisId(pub &'static str);

impl AxisId {
    /// Left/right movement axis.
    pub const HORIZONTAL: AxisId = AxisId("Horizontal");
}

//=== AxisSettings ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSettings {
    pub sensitivity: f32,
    pub gravity: f32,
    pub snap: bool,
    pub dead_zone: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
            dead_zone: 0.001,
        }
    }
}

//=== VirtualAxis =========================================================

#[derive(Debug, Clone)]
pub(crate) struct VirtualAxis<A: Action> {
    negative: A,
    positive: A,
    settings: AxisSettings,
    value: f32,
}

impl<A: Action> VirtualAxis<A> {
    pub(crate) fn new(negative: A, positive: A, settings: AxisSettings) -> Self {
        Self { negative, positive, settings, value: 0.0 }
    }

    pub(crate) fn negative(&self) -> A {
        self.negative
    }

    pub(crate) fn positive(&self) -> A {
        self.positive
    }

    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    /// Advances the axis by `dt` seconds given which directions are held.
    pub(crate) fn update(&mut self, negative_held: bool, positive_held: bool, dt: f32) {
        let target = match (negative_held, positive_held) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        if target != 0.0 {
            if self.settings.snap && self.value != 0.0 && self.value.signum() != target {
                self.value = 0.0;
            }
            self.value = move_towards(self.value, target, self.settings.sensitivity * dt);
        } else {
            self.value = move_towards(self.value, 0.0, self.settings.gravity * dt);
        }

        if self.value.abs() < self.settings.dead_zone {
            self.value = 0.0;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.value = 0.0;
    }
}

fn move_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + delta.signum() * max_step
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
