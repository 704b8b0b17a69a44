//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame staging area between the Winit callbacks and the channel.
//
// - `discrete`: presses and releases in arrival order (consecutive
//   duplicates dropped)
// - `continuous`: latest event per class; `InputEvent` equality ignores
//   coordinates, so a newer `PointerMoved` replaces the older one
//
//=========================================================================

use std::collections::HashSet;

use crate::core::input::InputEvent;

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(32),
            continuous: HashSet::with_capacity(4),
        }
    }

    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Takes the frame's events, or `None` if nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}
