//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Runs the frame loop on the logic thread.
//
// Architecture:
//   EventCollector → GlobalSystems::update(context) → pacing sleep
//
// Each frame:
//   1. Drain platform events (exit on close / disconnect)
//   2. Release held input if focus was lost
//   3. Input, variable tick, fixed ticks, scene loads (GlobalSystems)
//   4. Sleep to maintain the target frame rate
//
// The platform thread talks to this loop only through the channel.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;
pub(crate) mod timestep;

//=== Public API ==========================================================

pub use clock::SimulationClock;
pub use globals::{GlobalContext, GlobalSystems};
pub use input::{Action, InputSystem};
pub use scene::{Scene, SceneIndex, SceneLoader, SceneRequests};

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use input::InputEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the engine state that lives on the logic thread.
pub(crate) struct CoreSystemsOrchestrator<A: Action> {
    context: GlobalContext<A>,
    systems: GlobalSystems<A>,
}

impl<A: Action> CoreSystemsOrchestrator<A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(clock: SimulationClock, max_fixed_steps: u32) -> Self {
        let (requests, receiver) = SceneRequests::channel();
        let fixed_delta = clock.fixed_delta();

        Self {
            context: GlobalContext::new(clock, requests),
            systems: GlobalSystems::new(receiver, fixed_delta, max_fixed_steps),
        }
    }

    /// Gives setup code access to bindings, scenes and the clock.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalContext<A>, &mut GlobalSystems<A>),
    {
        init_fn(&mut self.context, &mut self.systems);
    }

    pub(crate) fn context(&self) -> &GlobalContext<A> {
        &self.context
    }

    pub(crate) fn systems(&self) -> &GlobalSystems<A> {
        &self.systems
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame of `dt` wall seconds. Returns the fixed steps run.
    pub(crate) fn tick(&mut self, dt: f32, batches: &[Vec<InputEvent>]) -> u32 {
        self.systems.update(&mut self.context, batches, dt)
    }

    //--- Logic Thread -----------------------------------------------------

    /// Spawns the logic thread, paced at `tps` frames per second.
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut last_frame = Instant::now();

            info!(target: "core", "Logic thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();
                let dt = frame_start.duration_since(last_frame).as_secs_f32();
                last_frame = frame_start;

                //--- Step 1: Gather platform events ----------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(target: "core", "Core thread exiting");
                    break;
                }

                //--- Step 2: Focus loss ----------------------------------
                if collector.focus_lost() {
                    debug!(target: "core", "Focus lost, releasing held input");
                    self.context.input.release_all();
                }

                //--- Step 3: Update systems ------------------------------
                self.tick(dt, collector.batches());

                //--- Step 4: Pacing --------------------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}
