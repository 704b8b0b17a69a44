//=========================================================================
// Scene Control
//=========================================================================
//
// Handle passed to input listeners so they can request transitions on
// behalf of the scene that registered them.
//
//=========================================================================

use super::{SceneKey, SceneTransition, TransitionQueue};

/// Transition requests scoped to one scene.
///
/// Requests are queued, never applied immediately.
pub struct SceneControl<'a, S: SceneKey> {
    scene: S,
    transitions: &'a mut TransitionQueue<S>,
}

impl<'a, S: SceneKey> SceneControl<'a, S> {
    pub(crate) fn new(scene: S, transitions: &'a mut TransitionQueue<S>) -> Self {
        Self { scene, transitions }
    }

    /// Key of the scene this control acts for.
    pub fn scene(&self) -> S {
        self.scene
    }

    /// Requests that this scene be shut down and `target` started in its place.
    pub fn start(&mut self, target: S) {
        self.transitions.push(SceneTransition::Replace(self.scene, target));
    }

    /// Requests that this scene be removed from the stack.
    pub fn stop(&mut self) {
        self.transitions.push(SceneTransition::Remove(self.scene));
    }
}
