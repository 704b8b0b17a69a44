//=========================================================================
// Transition Queue
//=========================================================================
//
// Deferred scene transition requests.
//
// Listeners and scene hooks only *request* transitions; the scene manager
// applies them at the tick boundary, after every active scene has run.
// This keeps scene lifecycle hooks from re-entering the manager.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SceneKey, SceneTransition};

//=== Transition Queue ====================================================

/// FIFO of transition requests for the current tick.
#[derive(Debug)]
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition; `Empty` requests are dropped.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        if transition != SceneTransition::Empty {
            self.queue.push(transition);
        }
    }

    /// Returns an iterator over the queued transitions in request order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneTransition<S>> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
