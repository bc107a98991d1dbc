//=========================================================================
// Game Layer
//=========================================================================
//
// Platformer gameplay on top of the engine core.
//
// Architecture:
//   controls    ControlAction, default bindings, ControlInput view
//   pause       PauseController + MenuOverlay
//   locomotion  LocomotionController (input phase / physics phase)
//   physics     PhysicsQuery / CharacterBody seams, collision layers
//   animation   AnimationSink seam
//   sandbox     minimal physics backend for the demo and tests
//   level       LevelScene wiring it all to the engine
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod controls;
pub mod error;
pub mod level;
pub mod locomotion;
pub mod pause;
pub mod physics;
pub mod sandbox;

//=== Public API ==========================================================

pub use animation::{AnimationSink, AnimatorParameters};
pub use controls::{install_default_bindings, ControlAction, ControlInput};
pub use error::ConfigError;
pub use level::LevelScene;
pub use locomotion::{LocomotionConfig, LocomotionController, LocomotionState};
pub use pause::{MenuOverlay, Overlay, PauseController, PauseState};
pub use physics::{CharacterBody, CollisionLayers, LayerMask, PhysicsQuery, PlatformId, RayHit, Transform, Vec3};
pub use sandbox::{SandboxBody, SandboxWorld};
