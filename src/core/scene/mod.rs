//=========================================================================
// Scene System
//=========================================================================
//
// Index-addressed scenes with reload-on-load semantics.
//
// Architecture:
//   SceneManager
//     ├─ factories: HashMap<SceneIndex, SceneFactory>
//     ├─ active:    (SceneIndex, Box<dyn Scene>)
//     └─ requests:  Receiver<SceneIndex>
//
// Flow per frame:
//   update() → fixed_update() × N → process_requests()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Module Declarations =================================================

mod scene_manager;
mod scene_requests;

//=== Public API ==========================================================

pub use scene_manager::{SceneBuildError, SceneFactory, SceneManager};
pub use scene_requests::{SceneIndex, SceneLoader, SceneRequests, MENU_SCENE, RESTART_SCENE};

//=== Scene Trait =========================================================

/// A loaded scene.
///
/// Only `update()` is required:
///
/// ```rust
/// # use sidescroll_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum MenuAction { Start }
/// # impl Action for MenuAction {}
/// struct TitleScreen;
///
/// impl Scene<MenuAction> for TitleScreen {
///     fn update(&mut self, context: &GlobalContext<MenuAction>) {
///         if context.input.action_pressed(MenuAction::Start) {
///             context.scenes.load_scene(SceneIndex(1));
///         }
///     }
/// }
/// ```
pub trait Scene<A: Action>: Send {
    /// Called once after the scene is constructed and becomes active.
    fn on_enter(&mut self, _context: &GlobalContext<A>) {}

    /// Called once before the scene is dropped.
    fn on_exit(&mut self, _context: &GlobalContext<A>) {}

    /// Variable-rate tick, once per frame.
    fn update(&mut self, context: &GlobalContext<A>);

    /// Fixed-rate tick, zero or more times per frame.
    fn fixed_update(&mut self, _context: &GlobalContext<A>, _dt: f32) {}
}
