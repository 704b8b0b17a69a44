//=========================================================================
// Scene Host
//=========================================================================
//
// The capabilities a scene may use, and the engine's implementation of
// them over `GlobalContext`.
//
// Scenes only hold `&mut dyn SceneHost<S>` for the duration of a hook,
// which keeps them testable against a recording stub.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

//=== Internal Dependencies ===============================================

use super::{SceneControl, SceneKey};
use crate::core::assets::AssetKey;
use crate::core::globals::GlobalContext;
use crate::core::input::{InputEventKind, InputListener, ListenMode, ListenerId};
use crate::core::message_bus::MessageBus;
use crate::core::render::{Position, SpriteId};

//=== SceneHost Trait =====================================================

/// Host services available to a scene during its lifecycle hooks.
pub trait SceneHost<S: SceneKey> {
    /// Key of the scene being served.
    fn scene(&self) -> S;

    /// Requests an image be loaded into the cache under `key`.
    ///
    /// Called from `on_preload`, the host holds back `on_create` until the
    /// load settles.
    fn load_image(&mut self, key: AssetKey, path: &Path);

    /// Places the cached image `key` centred on `position`.
    fn add_image(&mut self, position: Position, key: &AssetKey) -> SpriteId;

    /// Registers a listener that fires on every event of `kind`.
    fn on_input(&mut self, kind: InputEventKind, listener: InputListener<S>) -> ListenerId;

    /// Registers a listener that fires on the first event of `kind` only.
    ///
    /// It is not re-armed if the transition it requested is rejected; use
    /// [`on_input`](Self::on_input) for triggers that must survive that.
    fn once_input(&mut self, kind: InputEventKind, listener: InputListener<S>) -> ListenerId;

    /// Requests that this scene be replaced by `target`.
    ///
    /// Queues the same request as [`SceneControl::start`].
    fn start_scene(&mut self, target: S);

    /// Messages published this tick (e.g. settled asset loads).
    fn messages(&self) -> &MessageBus;
}

//=== SceneHostContext ====================================================

/// Engine-side host, scoped to one scene.
pub(crate) struct SceneHostContext<'a, S: SceneKey> {
    scene: S,
    context: &'a mut GlobalContext<S>,
}

impl<'a, S: SceneKey> SceneHostContext<'a, S> {
    pub(crate) fn new(scene: S, context: &'a mut GlobalContext<S>) -> Self {
        Self { scene, context }
    }
}

impl<S: SceneKey> SceneHost<S> for SceneHostContext<'_, S> {
    fn scene(&self) -> S {
        self.scene
    }

    fn load_image(&mut self, key: AssetKey, path: &Path) {
        let status = self.context.assets.request_image(key.clone(), path);
        if status.is_pending() {
            self.context
                .pending_loads
                .entry(self.scene)
                .or_default()
                .insert(key);
        }
    }

    fn add_image(&mut self, position: Position, key: &AssetKey) -> SpriteId {
        let resident = self.context.assets.contains(key);
        self.context
            .display
            .add(self.scene, key.clone(), position, resident)
    }

    fn on_input(&mut self, kind: InputEventKind, listener: InputListener<S>) -> ListenerId {
        self.context
            .input
            .register(self.scene, kind, ListenMode::Repeat, listener)
    }

    fn once_input(&mut self, kind: InputEventKind, listener: InputListener<S>) -> ListenerId {
        self.context
            .input
            .register(self.scene, kind, ListenMode::Once, listener)
    }

    fn start_scene(&mut self, target: S) {
        // SceneControl::start is the only place a Replace is built
        SceneControl::new(self.scene, &mut self.context.scene_transitions).start(target);
    }

    fn messages(&self) -> &MessageBus {
        &self.context.message_bus
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
