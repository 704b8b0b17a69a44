//=========================================================================
// Preload Stage: Binary
//
// Opens the window and runs the preload scene, followed by a placeholder
// game scene.
//
// Usage:
//   preload_stage [ASSET_ROOT]
//
// ASSET_ROOT defaults to the current directory; the sky image is looked
// up at ASSET_ROOT/../../../public/assets/platform.png.
//
// Logging is configured through RUST_LOG (default: info).
//
//=========================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use preload_stage::prelude::*;
use preload_stage::scenes::{PreloadScene, SceneId};

/// Placeholder for the game proper.
struct GameplayScene;

impl Scene<SceneId> for GameplayScene {
    fn on_create(&mut self, host: &mut dyn SceneHost<SceneId>) {
        info!(target: "scene", "Scene {} is live", host.scene().name());
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let asset_root = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let result = EngineBuilder::<SceneId>::new()
        .with_asset_root(asset_root)
        .with_window_title("Preload")
        .with_window_size(800, 600)
        .build()
        .init(|systems| {
            systems
                .scene_manager
                .register_default(SceneId::Preload, PreloadScene::new());
            systems
                .scene_manager
                .register_scene(SceneId::Game, GameplayScene);
        })
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "engine", "{}", e);
            ExitCode::FAILURE
        }
    }
}
