//=========================================================================
// Fixed Timestep
//=========================================================================
//
// Accumulator that converts variable (scaled) frame time into a whole
// number of fixed physics steps.
//
//   accumulate(scaled_dt) → steps this frame (≤ max_steps)
//
// When a frame would need more than `max_steps`, the surplus is dropped
// instead of carried forward, so a long stall cannot snowball.
//
//=========================================================================

use log::warn;

//=== FixedTimestep =======================================================

#[derive(Debug, Clone)]
pub(crate) struct FixedTimestep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    pub(crate) fn new(step: f32, max_steps: u32) -> Self {
        Self { step, max_steps, accumulator: 0.0 }
    }

    pub(crate) fn step(&self) -> f32 {
        self.step
    }

    /// Adds `scaled_dt` and returns how many fixed steps to run now.
    pub(crate) fn accumulate(&mut self, scaled_dt: f32) -> u32 {
        self.accumulator += scaled_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            warn!(
                target: "timestep",
                "Dropping {:.3}s of simulation backlog after {} steps",
                self.accumulator, steps
            );
            self.accumulator %= self.step;
        }

        steps
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
