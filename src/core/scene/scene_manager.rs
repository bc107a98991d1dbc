//=========================================================================
// Scene Manager
//=========================================================================
//
// Registers scene factories by build index and keeps one scene active.
//
// Loading an index always builds a fresh instance, including when that
// index is already active, so a restart really resets the level.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::error::Error;

use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneIndex};
use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== SceneFactory ========================================================

/// Error a scene factory may report; the load is abandoned.
pub type SceneBuildError = Box<dyn Error + Send + Sync>;

/// Builds a fresh scene instance; called on every load of its index.
pub type SceneFactory<A> =
    Box<dyn Fn(&GlobalContext<A>) -> Result<Box<dyn Scene<A>>, SceneBuildError> + Send>;

//=== SceneManager ========================================================

pub struct SceneManager<A: Action> {
    factories: HashMap<SceneIndex, SceneFactory<A>>,
    initial: Option<SceneIndex>,
    active: Option<(SceneIndex, Box<dyn Scene<A>>)>,
    requests: Receiver<SceneIndex>,
}

impl<A: Action> SceneManager<A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(requests: Receiver<SceneIndex>) -> Self {
        Self {
            factories: HashMap::new(),
            initial: None,
            active: None,
            requests,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the factory for a build index.
    ///
    /// ```rust
    /// # use sidescroll_engine::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Act { Go }
    /// # impl Action for Act {}
    /// # struct Menu;
    /// # impl Scene<Act> for Menu { fn update(&mut self, _: &GlobalContext<Act>) {} }
    /// # fn setup(manager: &mut SceneManager<Act>) {
    /// manager.register(MENU_SCENE, |_ctx| Menu);
    /// # }
    /// ```
    pub fn register<T, F>(&mut self, index: SceneIndex, factory: F)
    where
        T: Scene<A> + 'static,
        F: Fn(&GlobalContext<A>) -> T + Send + 'static,
    {
        self.insert_factory(
            index,
            Box::new(move |context| {
                Ok::<_, SceneBuildError>(Box::new(factory(context)) as Box<dyn Scene<A>>)
            }),
        );
    }

    /// Registers a factory that can fail. A failed load is logged and the
    /// current scene stays active.
    pub fn try_register<T, E, F>(&mut self, index: SceneIndex, factory: F)
    where
        T: Scene<A> + 'static,
        E: Error + Send + Sync + 'static,
        F: Fn(&GlobalContext<A>) -> Result<T, E> + Send + 'static,
    {
        self.insert_factory(
            index,
            Box::new(move |context| match factory(context) {
                Ok(scene) => Ok(Box::new(scene) as Box<dyn Scene<A>>),
                Err(e) => Err(Box::new(e) as SceneBuildError),
            }),
        );
    }

    /// Registers a factory and marks it as the scene loaded by `start()`.
    pub fn register_default<T, F>(&mut self, index: SceneIndex, factory: F)
    where
        T: Scene<A> + 'static,
        F: Fn(&GlobalContext<A>) -> T + Send + 'static,
    {
        self.register(index, factory);
        if let Some(previous) = self.initial.replace(index) {
            warn!(target: "scene", "Default scene {:?} replaced by {:?}", previous, index);
        }
    }

    /// Loads the default scene, if one was registered.
    pub fn start(&mut self, context: &GlobalContext<A>) {
        match self.initial {
            Some(index) => {
                debug!(target: "scene", "Starting with scene {:?}", index);
                self.load(index, context);
            }
            None => warn!(target: "scene", "No default scene registered"),
        }
    }

    //--- Ticking ----------------------------------------------------------

    pub fn update(&mut self, context: &GlobalContext<A>) {
        if let Some((_, scene)) = self.active.as_mut() {
            scene.update(context);
        }
    }

    pub fn fixed_update(&mut self, context: &GlobalContext<A>, dt: f32) {
        if let Some((_, scene)) = self.active.as_mut() {
            scene.fixed_update(context, dt);
        }
    }

    /// Applies load requests queued during this tick. The last one wins.
    pub fn process_requests(&mut self, context: &GlobalContext<A>) {
        let mut target = None;
        for index in self.requests.try_iter() {
            if let Some(superseded) = target.replace(index) {
                debug!(target: "scene", "Load of {:?} superseded by {:?}", superseded, index);
            }
        }

        if let Some(index) = target {
            self.load(index, context);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn active_index(&self) -> Option<SceneIndex> {
        self.active.as_ref().map(|(index, _)| *index)
    }

    pub fn is_registered(&self, index: SceneIndex) -> bool {
        self.factories.contains_key(&index)
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert_factory(&mut self, index: SceneIndex, factory: SceneFactory<A>) {
        if self.factories.insert(index, factory).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", index);
        }
    }

    fn load(&mut self, index: SceneIndex, context: &GlobalContext<A>) {
        let Some(factory) = self.factories.get(&index) else {
            warn!(target: "scene", "Attempted to load unregistered scene {:?}", index);
            return;
        };

        let mut scene = match factory(context) {
            Ok(scene) => scene,
            Err(e) => {
                error!(target: "scene", "Scene {:?} failed to build: {}", index, e);
                return;
            }
        };

        if let Some((previous, mut old)) = self.active.take() {
            debug!(target: "scene", "Exiting scene {:?}", previous);
            old.on_exit(context);
        }

        scene.on_enter(context);
        self.active = Some((index, scene));

        info!(target: "scene", "Loaded scene {:?}", index);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
