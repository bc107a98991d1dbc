//=========================================================================
// Global Context
//=========================================================================
//
// Shared data scenes read during their ticks:
// - input:  action/axis queries for this frame
// - clock:  time-scale and timestamps
// - scenes: load requests, applied at the tick boundary
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::clock::SimulationClock;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::SceneRequests;

//=== GlobalContext =======================================================

/// Data handed to every scene callback.
///
/// Scenes receive `&GlobalContext`; anything they need to keep (the clock,
/// the request handle) is cheap to clone.
pub struct GlobalContext<A: Action> {
    /// Input for the current frame. Bindings are configured in `Engine::init`.
    pub input: InputSystem<A>,

    /// Shared simulation clock.
    pub clock: SimulationClock,

    /// Scene-load request handle.
    pub scenes: SceneRequests,

    /// Scaled duration of the current frame in seconds.
    pub frame_delta: f32,
}

impl<A: Action> GlobalContext<A> {
    pub(crate) fn new(clock: SimulationClock, scenes: SceneRequests) -> Self {
        Self {
            input: InputSystem::new(),
            clock,
            scenes,
            frame_delta: 0.0,
        }
    }
}
