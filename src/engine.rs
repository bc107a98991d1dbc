//=========================================================================
// Sidescroll Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init()   bindings, scenes
//         ├─ with_fixed_timestep()   ├─ tick()   headless frame
//         └─ with_title() ...        └─ run()    window + logic thread
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::clock::{SimulationClock, DEFAULT_FIXED_DELTA};
use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformError;
use crate::core::{Action, CoreSystemsOrchestrator, GlobalContext, GlobalSystems};
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic frames per second)
/// - **Channel capacity**: 128 events
/// - **Fixed timestep**: 0.02 s
/// - **Max fixed steps per frame**: 5
///
/// ```no_run
/// use sidescroll_engine::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameAction>::new()
///     .with_tps(120.0)
///     .with_fixed_timestep(1.0 / 60.0)
///     .build()
///     .init(|context, _systems| {
///         context.input.bind_key(KeyCode::Space, GameAction::Jump);
///     })
///     .run()
///     .expect("platform failure");
/// ```
pub struct EngineBuilder<A: Action> {
    tps: f64,
    channel_capacity: usize,
    fixed_delta: f32,
    max_fixed_steps: u32,
    window: WindowConfig,
    _phantom: std::marker::PhantomData<A>,
}

impl<A: Action> EngineBuilder<A> {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            fixed_delta: DEFAULT_FIXED_DELTA,
            max_fixed_steps: 5,
            window: WindowConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Target frames per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Capacity of the platform → logic channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Physics step length in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0.0`.
    pub fn with_fixed_timestep(mut self, step: f32) -> Self {
        assert!(step > 0.0, "Fixed timestep must be positive, got {}", step);
        self.fixed_delta = step;
        self
    }

    /// Upper bound on fixed steps in a single frame.
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0`.
    pub fn with_max_fixed_steps(mut self, steps: u32) -> Self {
        assert!(steps > 0, "Max fixed steps must be positive");
        self.max_fixed_steps = steps;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is 0.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero");
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn build(self) -> Engine<A> {
        info!(
            "Building engine (TPS: {}, channel: {}, fixed step: {}s × {} max)",
            self.tps, self.channel_capacity, self.fixed_delta, self.max_fixed_steps
        );

        let clock = SimulationClock::with_fixed_delta(self.fixed_delta);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(clock.clone(), self.max_fixed_steps),
            clock,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<A: Action> Default for EngineBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → Scene update → Scene fixed_update × N
///   │
///   └─► Platform (winit event loop)
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<A: Action> {
    orchestrator: CoreSystemsOrchestrator<A>,
    clock: SimulationClock,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<A: Action> Engine<A> {
    //--- Initialization ---------------------------------------------------

    /// Configures bindings, axes and scenes before the first frame.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalContext<A>, &mut GlobalSystems<A>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        info!("Engine initialization complete");
        self
    }

    /// Handle to the shared simulation clock.
    pub fn clock(&self) -> SimulationClock {
        self.clock.clone()
    }

    //--- Headless Stepping ------------------------------------------------

    /// Runs one frame without a window. Returns the fixed steps run.
    ///
    /// Tools and tests drive the engine this way; `run()` does the same
    /// from the logic thread.
    pub fn tick(&mut self, dt: f32, batches: &[Vec<InputEvent>]) -> u32 {
        self.orchestrator.tick(dt, batches)
    }

    pub fn context(&self) -> &GlobalContext<A> {
        self.orchestrator.context()
    }

    pub fn systems(&self) -> &GlobalSystems<A> {
        self.orchestrator.systems()
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window, starts the logic thread and blocks until exit.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → logic channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the winit event loop (blocks here)
    /// 4. On close: `WindowClosed` is sent, the logic thread exits and is joined
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or window cannot be created.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx) = bounded(self.channel_capacity);
        info!("Platform channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let result = Platform::new(tx, self.window).run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup ---------------------------------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
