//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that the host reads/writes on behalf of scenes:
// - assets: image cache and loader
// - display: sprites placed by scenes
// - input: scene-owned input listeners
// - scene_transitions: command queue for scene changes
// - message_bus: per-tick messages (settled loads)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetKey, AssetServer};
use crate::core::input::{InputDispatcher, InputEvent};
use crate::core::message_bus::MessageBus;
use crate::core::render::DisplayList;
use crate::core::scene::{SceneKey, TransitionQueue};

//=== GlobalContext =======================================================

/// Shared context data the host exposes to scenes.
///
/// Scenes never see this directly; they reach it through
/// [`SceneHost`](crate::core::scene::SceneHost), which scopes every call
/// to the scene being served.
pub struct GlobalContext<S: SceneKey> {
    /// Image cache, resolved against the configured asset root.
    pub assets: AssetServer,

    /// Sprites in draw order.
    pub display: DisplayList<S>,

    /// Listeners registered by scenes, keyed by event kind.
    pub input: InputDispatcher<S>,

    /// Transition queue for scene changes.
    ///
    /// Filled by listeners and scene hooks; the scene manager drains it at
    /// tick boundaries.
    pub scene_transitions: TransitionQueue<S>,

    /// Messages for the current tick.
    pub message_bus: MessageBus,

    /// Keys each `Loading` scene still waits on.
    pub(crate) pending_loads: HashMap<S, HashSet<AssetKey>>,

    /// Input events for the current tick, in arrival order.
    ///
    /// Filled by the event collector and consumed by the scene manager's
    /// input stage.
    pub(crate) frame_events: Vec<InputEvent>,
}

impl<S: SceneKey> GlobalContext<S> {
    /// Creates a new context with empty state.
    pub(crate) fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            assets: AssetServer::new(asset_root),
            display: DisplayList::new(),
            input: InputDispatcher::new(),
            scene_transitions: TransitionQueue::new(),
            message_bus: MessageBus::new(),
            pending_loads: HashMap::new(),
            frame_events: Vec::new(),
        }
    }
}
