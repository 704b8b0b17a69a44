//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Routes input events to listeners registered by scenes.
//
// Architecture:
//   InputEvent → kind() → matching registrations → listener(event, control)
//                                                     ↓
//                                              TransitionQueue
//
// Every registration is owned by a scene key so the host can drop all of
// a scene's listeners when it shuts down. `Once` registrations are removed
// the moment they fire. The caller's owner filter decides which scenes may
// receive input at all; the scene manager admits only `Created` scenes.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, InputEventKind};
use crate::core::scene::{SceneControl, SceneKey, TransitionQueue};

//=== Types ===============================================================

/// Callback invoked for each matching event.
pub type InputListener<S> = Box<dyn FnMut(&InputEvent, &mut SceneControl<'_, S>) + Send>;

/// Boxes a closure as an [`InputListener`].
///
/// The bound pins the closure's argument lifetimes, so plain `|event, control|`
/// closures work without annotations.
pub fn listener<S, F>(f: F) -> InputListener<S>
where
    S: SceneKey,
    F: FnMut(&InputEvent, &mut SceneControl<'_, S>) + Send + 'static,
{
    Box::new(f)
}

/// Handle identifying a single registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// How long a registration stays active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenMode {
    /// Fires on every matching event until removed.
    Repeat,

    /// Fires on the first matching event, then is removed.
    Once,
}

struct Registration<S: SceneKey> {
    id: ListenerId,
    owner: S,
    kind: InputEventKind,
    mode: ListenMode,
    listener: InputListener<S>,
}

//=== InputDispatcher =====================================================

/// Per-class listener registry.
pub struct InputDispatcher<S: SceneKey> {
    registrations: Vec<Registration<S>>,
    next_id: u64,
}

impl<S: SceneKey> InputDispatcher<S> {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 0,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers `listener` for events of `kind` on behalf of `owner`.
    pub fn register(
        &mut self,
        owner: S,
        kind: InputEventKind,
        mode: ListenMode,
        listener: InputListener<S>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        trace!(target: "input", "{} listens for {} ({:?})", owner.name(), kind, mode);
        self.registrations.push(Registration { id, owner, kind, mode, listener });
        id
    }

    /// Removes a single registration. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|reg| reg.id != id);
        self.registrations.len() != before
    }

    /// Removes every registration owned by `owner`, returning how many.
    pub fn remove_owner(&mut self, owner: S) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|reg| reg.owner != owner);
        before - self.registrations.len()
    }

    //--- Queries ----------------------------------------------------------

    /// Number of active registrations for `kind`.
    pub fn listener_count(&self, kind: InputEventKind) -> usize {
        self.registrations.iter().filter(|reg| reg.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers `event` to every listener of its class in registration order.
    ///
    /// Listeners whose owner fails `accepts` are skipped and stay armed.
    /// Returns the number of listeners that fired.
    pub fn dispatch<F>(&mut self, event: &InputEvent, transitions: &mut TransitionQueue<S>, accepts: F) -> usize
    where
        F: Fn(S) -> bool,
    {
        let Some(kind) = event.kind() else {
            return 0;
        };

        let mut fired = 0;
        self.registrations.retain_mut(|reg| {
            if reg.kind != kind || !accepts(reg.owner) {
                return true;
            }

            let mut control = SceneControl::new(reg.owner, transitions);
            (reg.listener)(event, &mut control);
            fired += 1;

            reg.mode == ListenMode::Repeat
        });

        if fired > 0 {
            trace!(target: "input", "{} delivered to {} listener(s)", kind, fired);
        }
        fired
    }
}

impl<S: SceneKey> Default for InputDispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
