//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sidescroll_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::platform_bridge::PlatformError;

// Global systems and context
pub use crate::core::clock::SimulationClock;
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{
    Action, AxisId, AxisSettings, InputContext, InputEvent, InputSystem, KeyCode, Modifiers,
    MouseButton,
};

// Scene system
pub use crate::core::scene::{
    Scene, SceneIndex, SceneLoader, SceneManager, SceneRequests, MENU_SCENE, RESTART_SCENE,
};

// Platformer
pub use crate::game::{
    install_default_bindings, AnimationSink, AnimatorParameters, CharacterBody, ConfigError,
    ControlAction, ControlInput, LevelScene, LocomotionConfig, LocomotionController, MenuOverlay,
    Overlay, PauseController, PauseState, PhysicsQuery, SandboxBody, SandboxWorld, Vec3,
};
