//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle, stack-based scene switching and the host interface
// scenes talk to.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     ├─ phases: HashMap<S, ScenePhase>
//     └─ stack: Vec<S>
//
// Lifecycle (per activation):
//   Uninitialized ─enter─> Loading ─loads settled─> Created
//       ─transition requested─> Transitioning ─shutdown─> Terminal
//
// Scenes only see `&mut dyn SceneHost<S>`; the manager decides when each
// hook runs.
//
//=========================================================================

//=== Module Declarations =================================================

mod control;
mod host;
mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use control::SceneControl;
pub use host::SceneHost;
pub use scene_manager::{SceneKey, SceneManager, ScenePhase, SceneTransition};
pub use transition_queue::TransitionQueue;

pub(crate) use host::SceneHostContext;

//=== Scene Trait =========================================================

/// Scene behavior driven by the host's two-phase lifecycle.
///
/// The host calls [`Scene::on_preload`] when the scene becomes active,
/// waits for every load the scene queued there to settle, and then calls
/// [`Scene::on_create`] exactly once. Only `on_create` is required.
///
/// ```rust
/// # use preload_stage::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Stage { Title }
/// # impl SceneKey for Stage { fn name(&self) -> &'static str { "title" } }
/// struct TitleScene;
///
/// impl Scene<Stage> for TitleScene {
///     fn on_create(&mut self, host: &mut dyn SceneHost<Stage>) {
///         host.add_image(Position::new(0.0, 0.0), &AssetKey::new("logo"));
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Requests the assets this scene needs before it can be created.
    fn on_preload(&mut self, _host: &mut dyn SceneHost<S>) {}

    /// Builds the scene once its assets are resident.
    fn on_create(&mut self, host: &mut dyn SceneHost<S>);

    /// Called every tick while the scene is created and active.
    fn update(&mut self, _host: &mut dyn SceneHost<S>) {}

    /// Called when the scene leaves the stack.
    ///
    /// Listeners and sprites owned by the scene are released by the host
    /// right after this returns.
    fn on_shutdown(&mut self, _host: &mut dyn SceneHost<S>) {}

    /// Whether scenes below this one keep receiving updates.
    fn is_transparent(&self) -> bool {
        false
    }
}
