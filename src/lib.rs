//=========================================================================
// Preload Stage: Library Root
//
// A scene-hosting runtime and the preload scene that runs on it.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the scene, asset, input and render APIs scenes are written
//   against (`core`)
// - Ship the application's scenes (`scenes`)
// - Keep the windowing backend (`platform`) private
//
// Typical usage:
// ```no_run
// use preload_stage::prelude::*;
// use preload_stage::scenes::{PreloadScene, SceneId};
//
// EngineBuilder::<SceneId>::new()
//     .build()
//     .init(|systems| {
//         systems.scene_manager.register_default(SceneId::Preload, PreloadScene::new());
//     })
//     .run()?;
// # Ok::<(), preload_stage::core::error::EngineError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
