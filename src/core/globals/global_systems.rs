//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey> {
    /// Manages scene registration, activation, updates, and transitions.
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey> GlobalSystems<S> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Users access systems via [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            scene_manager: SceneManager::new(),
        }
    }

    /// Enters the default scenes. Called once before the first tick.
    pub(crate) fn start(&mut self, context: &mut GlobalContext<S>) {
        self.scene_manager.start(context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Message Reset**: Drops last tick's messages
    /// 2. **Asset Settlement**: Publishes settled loads, creates ready scenes
    /// 3. **Input Dispatch**: Runs listeners for this tick's input
    /// 4. **Scene Update**: Updates all active scenes
    /// 5. **Transition Processing**: Applies queued scene transitions
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S>) {
        context.message_bus.clear_all();
        self.scene_manager.poll_assets(context);
        self.scene_manager.dispatch_input(context);
        self.scene_manager.update(context);
        self.scene_manager.process_transitions(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
