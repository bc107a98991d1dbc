//=========================================================================
// Platformer Demo
//=========================================================================
//
// Opens a window and runs the sandbox level.
//
//   Scene 0  title screen (Space or click to start)
//   Scene 4  the level
//
// Usage:
//   platformer_demo [locomotion.ron]
//
// Log level follows RUST_LOG (default: info).
//
//=========================================================================

use std::error::Error;

use log::info;
use sidescroll_engine::prelude::*;

//=== Title Screen ========================================================

struct TitleScreen;

impl Scene<ControlAction> for TitleScreen {
    fn on_enter(&mut self, context: &GlobalContext<ControlAction>) {
        // Leaving the level through the pause menu keeps time stopped.
        context.clock.set_time_scale(1.0);
        info!(target: "scene", "Press Space or click to start");
    }

    fn update(&mut self, context: &GlobalContext<ControlAction>) {
        let input = &context.input;
        if input.action_pressed(ControlAction::Jump) || input.action_pressed(ControlAction::Attack) {
            context.scenes.load_scene(RESTART_SCENE);
        }
    }
}

//=== Entry Point =========================================================

fn load_config() -> Result<LocomotionConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading locomotion config from {}", path);
            let source = std::fs::read_to_string(&path)?;
            Ok(LocomotionConfig::from_ron_str(&source)?)
        }
        None => Ok(LocomotionConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let config = load_config()?;

    EngineBuilder::<ControlAction>::new()
        .with_title("Sidescroll Sandbox")
        .build()
        .init(move |context, systems| {
            install_default_bindings(&mut context.input);

            systems.scene_manager.register_default(MENU_SCENE, |_| TitleScreen);
            systems
                .scene_manager
                .try_register(RESTART_SCENE, move |context| LevelScene::new(context, config.clone()));
        })
        .run()?;

    Ok(())
}
