//=========================================================================
// Animation Blend
//=========================================================================
//
// The blend scalar the locomotion controller publishes, and the levels
// it moves between.
//
//   idle 0.0 ── walk 0.2 ── run 0.4 ── jump 0.6 ── attack 0.8
//
// Grounded locomotion eases toward idle/walk/run; jump and attack snap.
//
//=========================================================================

//=== Levels ==============================================================

pub const IDLE: f32 = 0.0;
pub const WALK: f32 = 0.2;
pub const RUN: f32 = 0.4;
pub const JUMP: f32 = 0.6;
pub const ATTACK: f32 = 0.8;

/// Grounded target for this tick's input.
pub fn locomotion_target(moving: bool, running: bool) -> f32 {
    match (moving, running) {
        (false, _) => IDLE,
        (true, false) => WALK,
        (true, true) => RUN,
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

//=== BlendState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BlendState {
    blend: f32,
    smoothed: f32,
    factor: f32,
}

impl BlendState {
    pub(crate) fn new(factor: f32) -> Self {
        Self { blend: IDLE, smoothed: IDLE, factor }
    }

    pub(crate) fn blend(&self) -> f32 {
        self.blend
    }

    pub(crate) fn smoothed(&self) -> f32 {
        self.smoothed
    }

    /// One smoothing step toward `target`; the blend follows the smoothed value.
    pub(crate) fn smooth_toward(&mut self, target: f32) {
        self.smoothed = lerp(self.smoothed, target, self.factor);
        self.blend = self.smoothed;
    }

    /// Sets the blend directly, leaving the smoothed value alone.
    pub(crate) fn snap(&mut self, level: f32) {
        self.blend = level;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
