//=========================================================================
// Scenes
//=========================================================================
//
// Scene keys and the scenes shipped with the crate.
//
//=========================================================================

mod preload;

pub use preload::PreloadScene;

use crate::core::scene::SceneKey;

/// Keys of every scene the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Loads the sky image and waits for a click.
    Preload,

    /// Main game scene, started from `Preload`.
    Game,
}

impl SceneKey for SceneId {
    fn name(&self) -> &'static str {
        match self {
            Self::Preload => "preload",
            Self::Game => "game",
        }
    }
}
