//=========================================================================
// Sidescroll Engine — Library Root
//
// A tick-driven host for a 2.5D platformer and the gameplay controllers
// that run in it.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the core systems (clock, input, scenes) for extension
// - Expose the platformer layer (pause menu, locomotion, sandbox)
// - Keep the winit platform layer hidden from users
//
// Typical usage:
// ```no_run
// use sidescroll_engine::prelude::*;
//
// fn main() -> Result<(), PlatformError> {
//     EngineBuilder::<ControlAction>::new()
//         .build()
//         .init(|context, _systems| install_default_bindings(&mut context.input))
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine systems: clock, input, scenes and the frame
// loop. `game` holds the platformer built on top of them.
//
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and OS event loop and is not part of the
// public API surface.
//
// `engine` defines the builder and runtime entry point.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use crate::engine::{Engine, EngineBuilder};
