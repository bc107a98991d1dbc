//=========================================================================
// Global Systems
//=========================================================================
//
// Engine-level systems that run the frame over GlobalContext data.
//
// Frame pipeline (one call to `update`):
//   1. input.process_frame     raw events → actions, axes (unscaled dt)
//   2. clock.advance           wall dt → scaled dt
//   3. scene update            variable tick
//   4. scene fixed_update × N  N from the fixed-step accumulator
//   5. process_requests        scene loads take effect
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::trace;

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputEvent};
use crate::core::scene::{SceneIndex, SceneManager};
use crate::core::timestep::FixedTimestep;

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
pub struct GlobalSystems<A: Action> {
    /// Scene registration and lifecycle.
    pub scene_manager: SceneManager<A>,

    timestep: FixedTimestep,
    started: bool,
}

impl<A: Action> GlobalSystems<A> {
    pub(crate) fn new(requests: Receiver<SceneIndex>, fixed_delta: f32, max_fixed_steps: u32) -> Self {
        Self {
            scene_manager: SceneManager::new(requests),
            timestep: FixedTimestep::new(fixed_delta, max_fixed_steps),
            started: false,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame of `dt` wall seconds. Returns the fixed steps run.
    ///
    /// The default scene is entered on the first frame.
    pub(crate) fn update(
        &mut self,
        context: &mut GlobalContext<A>,
        batches: &[Vec<InputEvent>],
        dt: f32,
    ) -> u32 {
        if !self.started {
            self.started = true;
            self.scene_manager.start(context);
        }

        // 1. Input
        context.input.process_frame(batches, dt);

        // 2. Time
        context.frame_delta = context.clock.advance(dt);

        // 3. Variable tick
        self.scene_manager.update(context);

        // 4. Fixed ticks
        let steps = self.timestep.accumulate(context.frame_delta);
        let step = self.timestep.step();
        for _ in 0..steps {
            self.scene_manager.fixed_update(context, step);
        }

        // 5. Scene loads
        self.scene_manager.process_requests(context);

        trace!(
            target: "frame",
            "dt={:.4} scaled={:.4} fixed_steps={}",
            dt, context.frame_delta, steps
        );

        steps
    }
}
