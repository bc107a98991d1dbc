//=========================================================================
// Scene Requests
//=========================================================================
//
// Scene-load requests issued from gameplay code during a tick.
//
// Architecture:
//   SceneLoader::load_scene(index) → Sender<SceneIndex>
//                                  → SceneManager drains at tick boundary
//
// Requests never take effect mid-tick; the active scene finishes the
// current frame first.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

//=== SceneIndex ==========================================================

/// Build index of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneIndex(pub u32);

/// The main menu.
pub const MENU_SCENE: SceneIndex = SceneIndex(0);

/// The level the pause menu restarts into.
pub const RESTART_SCENE: SceneIndex = SceneIndex(4);

//=== SceneLoader =========================================================

/// Anything that can be asked to load a scene by index.
pub trait SceneLoader {
    fn load_scene(&self, index: SceneIndex);
}

//=== SceneRequests =======================================================

/// Cloneable request handle handed to scenes and controllers.
#[derive(Debug, Clone)]
pub struct SceneRequests {
    sender: Sender<SceneIndex>,
}

impl SceneRequests {
    /// Creates a request handle and the receiver the scene manager drains.
    pub(crate) fn channel() -> (Self, Receiver<SceneIndex>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }
}

impl SceneLoader for SceneRequests {
    fn load_scene(&self, index: SceneIndex) {
        debug!(target: "scene", "Load requested for scene {:?}", index);
        if self.sender.send(index).is_err() {
            warn!(target: "scene", "Scene manager is gone, dropped load of {:?}", index);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
