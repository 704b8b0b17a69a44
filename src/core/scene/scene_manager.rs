//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and the two-phase
// (preload, then create) lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. Each registered scene carries a `ScenePhase`; only `Created`
// scenes are updated, and `on_create` runs only once every load the scene
// queued during `on_preload` has settled.
//
// Per tick (driven by GlobalSystems):
//   poll_assets() → dispatch_input() → update() → process_transitions()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneHostContext, TransitionQueue};
use crate::core::globals::GlobalContext;

//=== Scene Transition ====================================================

/// Encapsulates scene stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a new scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack by key.
    Remove(K),

    /// Shuts down the first scene and starts the second in its slot.
    Replace(K, K),

    /// Clears all scenes from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Scene identifier.
///
/// Typically implemented by a game-specific enum. `name` is the string
/// key the scene is known by (e.g. `"preload"`), used in logs.
pub trait SceneKey: Copy + Eq + Hash + Debug + Send + 'static {
    fn name(&self) -> &'static str;
}

//=== Scene Phase =========================================================

/// Lifecycle phase of a registered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenePhase {
    /// Registered, never entered.
    Uninitialized,

    /// `on_preload` ran; waiting for its loads to settle.
    Loading,

    /// `on_create` ran; the scene is live.
    Created,

    /// The scene asked to leave; shutdown happens at the tick boundary.
    Transitioning,

    /// Shut down. Entering the scene again restarts at `Loading`.
    Terminal,
}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    phases: HashMap<S, ScenePhase>,
    stack: Vec<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            phases: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before a transition can reach them.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {} was already registered and has been replaced", key.name());
        }
        self.phases.insert(key, ScenePhase::Uninitialized);
    }

    /// Registers a scene and places it on the stack for [`start`](Self::start).
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!(target: "scene", "Scene {} is already in the stack", key.name());
        } else {
            debug!(target: "scene", "Registered scene {} as default", key.name());
            self.stack.push(key);
        }
    }

    /// Enters every scene placed on the stack by `register_default`.
    pub fn start(&mut self, context: &mut GlobalContext<S>) {
        let initial = self.stack.clone();
        if initial.is_empty() {
            warn!(target: "scene", "Starting with an empty scene stack");
        }

        for key in initial {
            debug!(target: "scene", "Starting initial scene {}", key.name());
            self.enter(key, context);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Phase of `key`; unregistered keys report `Uninitialized`.
    pub fn phase(&self, key: S) -> ScenePhase {
        self.phases.get(&key).copied().unwrap_or(ScenePhase::Uninitialized)
    }

    /// Scene keys from bottom to top.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    //--- Tick Stages ------------------------------------------------------

    /// Settles finished loads and creates scenes whose loads are all done.
    ///
    /// Settled loads are published on the message bus as `AssetEvent`s.
    pub fn poll_assets(&mut self, context: &mut GlobalContext<S>) {
        for event in context.assets.poll() {
            for pending in context.pending_loads.values_mut() {
                pending.remove(event.key());
            }
            context.message_bus.push(event);
        }

        let ready: Vec<S> = self
            .stack
            .iter()
            .copied()
            .filter(|&key| self.phase(key) == ScenePhase::Loading)
            .filter(|key| context.pending_loads.get(key).map_or(true, HashSet::is_empty))
            .collect();

        for key in ready {
            self.create(key, context);
        }
    }

    /// Delivers this tick's input to scene listeners.
    ///
    /// Only `Created` scenes receive events. A scene that queues its own
    /// exit is flagged `Transitioning` before the next event, so the rest
    /// of the burst passes it by.
    pub fn dispatch_input(&mut self, context: &mut GlobalContext<S>) {
        let events = std::mem::take(&mut context.frame_events);

        for event in &events {
            let phases = &self.phases;
            context.input.dispatch(event, &mut context.scene_transitions, |owner| {
                phases.get(&owner) == Some(&ScenePhase::Created)
            });
            self.mark_transitioning(&context.scene_transitions);
        }
    }

    /// Updates active scenes.
    ///
    /// Calls update on all transparent scenes and the topmost opaque scene,
    /// skipping any that are not `Created`.
    pub fn update(&mut self, context: &mut GlobalContext<S>) {
        if self.stack.is_empty() {
            return;
        }

        for key in self.collect_active_scenes() {
            if self.phase(key) != ScenePhase::Created {
                continue;
            }
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(&mut SceneHostContext::new(key, context));
            }
        }

        self.mark_transitioning(&context.scene_transitions);
    }

    /// Applies queued transitions in FIFO order.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Lifecycle Helpers ------------------------------------------------

    fn enter(&mut self, key: S, context: &mut GlobalContext<S>) {
        context.pending_loads.remove(&key);
        self.phases.insert(key, ScenePhase::Loading);

        debug!(target: "scene", "Preloading scene {}", key.name());
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_preload(&mut SceneHostContext::new(key, context));
        }

        let waiting = context.pending_loads.get(&key).map_or(0, HashSet::len);
        if waiting == 0 {
            self.create(key, context);
        } else {
            debug!(target: "scene", "Scene {} waiting on {} asset(s)", key.name(), waiting);
        }
    }

    fn create(&mut self, key: S, context: &mut GlobalContext<S>) {
        context.pending_loads.remove(&key);
        self.phases.insert(key, ScenePhase::Created);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_create(&mut SceneHostContext::new(key, context));
        }
        info!(target: "scene", "Scene {} created", key.name());
    }

    fn shutdown(&mut self, key: S, context: &mut GlobalContext<S>) {
        self.phases.insert(key, ScenePhase::Transitioning);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_shutdown(&mut SceneHostContext::new(key, context));
        }

        let listeners = context.input.remove_owner(key);
        let sprites = context.display.remove_owner(key);
        context.pending_loads.remove(&key);
        self.phases.insert(key, ScenePhase::Terminal);

        debug!(
            target: "scene",
            "Scene {} shut down ({} listener(s), {} sprite(s) released)",
            key.name(),
            listeners,
            sprites
        );
    }

    /// Flags `Created` scenes that have a pending exit request.
    fn mark_transitioning(&mut self, transitions: &TransitionQueue<S>) {
        let mut leaving = Vec::new();
        for transition in transitions.iter() {
            match *transition {
                SceneTransition::Remove(key) | SceneTransition::Replace(key, _) => leaving.push(key),
                SceneTransition::Clear => leaving.extend(self.stack.iter().copied()),
                SceneTransition::Push(_) | SceneTransition::Empty => {}
            }
        }

        for key in leaving {
            if self.phase(key) == ScenePhase::Created {
                debug!(target: "scene", "Scene {} is transitioning", key.name());
                self.phases.insert(key, ScenePhase::Transitioning);
            }
        }
    }

    /// Returns a scene flagged by `mark_transitioning` to `Created` when its
    /// request could not be applied.
    fn restore(&mut self, key: S) {
        if self.stack.contains(&key) && self.phase(key) == ScenePhase::Transitioning {
            self.phases.insert(key, ScenePhase::Created);
        }
    }

    //--- Stack Operations -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S>) {
        if self.stack.contains(&key) {
            warn!(target: "scene", "Scene {} is already in the stack, skipping push", key.name());
            return;
        }

        if !self.scenes.contains_key(&key) {
            warn!(target: "scene", "Attempted to push unregistered scene {}", key.name());
            return;
        }

        debug!(target: "scene", "Pushing scene {} onto stack", key.name());
        self.stack.push(key);
        self.enter(key, context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S>) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!(target: "scene", "Removing scene {} from stack at position {}", key.name(), pos);
            self.stack.remove(pos);
            self.shutdown(key, context);
        } else {
            debug!(target: "scene", "Scene {} not found in stack, skipping removal", key.name());
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!(target: "scene", "Scene {} not found in stack, skipping replacement", old_key.name());
            return;
        };

        if self.stack.contains(&new_key) {
            warn!(target: "scene", "Scene {} is already in the stack, skipping replacement", new_key.name());
            self.restore(old_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!(target: "scene", "Attempted to replace with unregistered scene {}", new_key.name());
            self.restore(old_key);
            return;
        }

        info!(target: "scene", "Switching scene {} -> {}", old_key.name(), new_key.name());

        self.shutdown(old_key, context);
        self.stack[pos] = new_key;
        self.enter(new_key, context);
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S>) {
        debug!(target: "scene", "Clearing all scenes from stack");

        for key in std::mem::take(&mut self.stack) {
            self.shutdown(key, context);
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Iterate stack top-down, stop at first opaque scene
        for &key in self.stack.iter().rev() {
            active.insert(0, key);

            if let Some(scene) = self.scenes.get(&key) {
                if !scene.is_transparent() {
                    break;
                }
            }
        }

        active
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{AssetEvent, AssetKey, ImageAsset};
    use crate::core::input::{listener, InputEvent, InputEventKind, Modifiers, MouseButton};
    use crate::core::render::Position;
    use crate::core::scene::SceneHost;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {
        fn name(&self) -> &'static str {
            match self {
                Self::A => "a",
                Self::B => "b",
                Self::C => "c",
            }
        }
    }

    type Log = Arc<Mutex<Vec<String>>>;

    /// Records every hook; optionally loads one image and leaves on a press.
    struct Tracer {
        log: Log,
        load: Option<&'static str>,
        leave_to: Option<TestScene>,
        transparent: bool,
    }

    impl Tracer {
        fn new(log: &Log) -> Self {
            Self {
                log: Arc::clone(log),
                load: None,
                leave_to: None,
                transparent: false,
            }
        }

        fn loading(mut self, path: &'static str) -> Self {
            self.load = Some(path);
            self
        }

        fn leaving_to(mut self, target: TestScene) -> Self {
            self.leave_to = Some(target);
            self
        }

        fn transparent(mut self) -> Self {
            self.transparent = true;
            self
        }

        fn record(&self, host: &dyn SceneHost<TestScene>, hook: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", host.scene().name(), hook));
        }
    }

    impl Scene<TestScene> for Tracer {
        fn on_preload(&mut self, host: &mut dyn SceneHost<TestScene>) {
            self.record(host, "preload");
            if let Some(path) = self.load {
                host.load_image(AssetKey::new("tex"), Path::new(path));
            }
        }

        fn on_create(&mut self, host: &mut dyn SceneHost<TestScene>) {
            self.record(host, "create");
            host.add_image(Position::new(1.0, 2.0), &AssetKey::new("tex"));
            if let Some(target) = self.leave_to {
                host.on_input(
                    InputEventKind::PointerDown,
                    listener(move |_, control| control.start(target)),
                );
            }
        }

        fn update(&mut self, host: &mut dyn SceneHost<TestScene>) {
            self.record(host, "update");
        }

        fn on_shutdown(&mut self, host: &mut dyn SceneHost<TestScene>) {
            self.record(host, "shutdown");
        }

        fn is_transparent(&self) -> bool {
            self.transparent
        }
    }

    fn context() -> (tempfile::TempDir, GlobalContext<TestScene>) {
        let dir = tempfile::tempdir().unwrap();
        let context = GlobalContext::new(dir.path());
        (dir, context)
    }

    fn pointer_down() -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 5.0,
            y: 5.0,
            modifiers: Modifiers::NONE,
        }
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    fn poll_until_created(manager: &mut SceneManager<TestScene>, context: &mut GlobalContext<TestScene>, key: TestScene) {
        for _ in 0..500 {
            manager.poll_assets(context);
            if manager.phase(key) == ScenePhase::Created {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("scene {:?} never reached Created", key);
    }

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- Lifecycle Tests --------------------------------------------------

    #[test]
    fn registered_scene_starts_uninitialized() {
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_scene(TestScene::A, Tracer::new(&log));

        assert!(manager.is_registered(TestScene::A));
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Uninitialized);
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn scene_without_loads_is_created_on_start() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log));

        manager.start(&mut context);

        assert_eq!(manager.phase(TestScene::A), ScenePhase::Created);
        assert_eq!(entries(&log), vec!["a:preload", "a:create"]);
    }

    #[test]
    fn create_waits_for_pending_loads() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).loading("missing.png"));

        manager.start(&mut context);
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Loading);
        assert_eq!(entries(&log), vec!["a:preload"]);

        poll_until_created(&mut manager, &mut context, TestScene::A);

        assert_eq!(entries(&log), vec!["a:preload", "a:create"]);
        let failures: Vec<_> = context
            .message_bus
            .read::<AssetEvent>()
            .iter()
            .filter(|event| matches!(event, AssetEvent::Failed { .. }))
            .collect();
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn cached_asset_does_not_delay_create() {
        let (_dir, mut context) = context();
        context.assets.insert("tex".into(), ImageAsset::new(image::RgbaImage::new(1, 1)));
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).loading("unused.png"));

        manager.start(&mut context);

        assert_eq!(manager.phase(TestScene::A), ScenePhase::Created);
    }

    #[test]
    fn loading_scene_is_not_updated() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).loading("missing.png"));
        manager.start(&mut context);

        manager.update(&mut context);

        assert!(!entries(&log).contains(&"a:update".to_string()));
    }

    //--- Input-Driven Transition Tests ------------------------------------

    #[test]
    fn pointer_down_replaces_scene() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).leaving_to(TestScene::B));
        manager.register_scene(TestScene::B, Tracer::new(&log));
        manager.start(&mut context);
        assert_eq!(context.display.len(), 1);

        context.frame_events = vec![pointer_down(), pointer_down()];
        manager.dispatch_input(&mut context);

        assert_eq!(manager.phase(TestScene::A), ScenePhase::Transitioning);
        assert_eq!(context.scene_transitions.len(), 1);

        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::B]);
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Terminal);
        assert_eq!(manager.phase(TestScene::B), ScenePhase::Created);
        assert_eq!(context.input.listener_count(InputEventKind::PointerDown), 0);
        assert!(context.display.sprites().iter().all(|s| s.owner == TestScene::B));
        assert_eq!(
            entries(&log),
            vec!["a:preload", "a:create", "a:shutdown", "b:preload", "b:create"]
        );
    }

    #[test]
    fn transitioning_scene_skips_update() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).leaving_to(TestScene::B));
        manager.register_scene(TestScene::B, Tracer::new(&log));
        manager.start(&mut context);

        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);
        manager.update(&mut context);

        assert!(!entries(&log).contains(&"a:update".to_string()));
    }

    #[test]
    fn replace_with_unregistered_target_keeps_scene_alive() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).leaving_to(TestScene::C));
        manager.start(&mut context);

        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Created);
        assert_eq!(context.input.listener_count(InputEventKind::PointerDown), 1);

        // The trigger is still live: the next press asks again
        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);

        assert_eq!(
            context.scene_transitions.iter().collect::<Vec<_>>(),
            vec![&SceneTransition::Replace(TestScene::A, TestScene::C)]
        );
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Transitioning);
    }

    #[test]
    fn burst_of_presses_requests_one_exit_per_scene() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log).leaving_to(TestScene::C));
        manager.register_default(TestScene::B, Tracer::new(&log).transparent().leaving_to(TestScene::C));
        manager.start(&mut context);

        context.frame_events = vec![pointer_down(), pointer_down(), pointer_down()];
        manager.dispatch_input(&mut context);

        assert_eq!(context.scene_transitions.len(), 2);
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Transitioning);
        assert_eq!(manager.phase(TestScene::B), ScenePhase::Transitioning);
    }

    #[test]
    fn duplicate_replace_requests_apply_once() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log));
        manager.register_scene(TestScene::B, Tracer::new(&log));
        manager.start(&mut context);

        context.scene_transitions.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        context.scene_transitions.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::B]);
        let b_creates = entries(&log).iter().filter(|e| *e == "b:create").count();
        assert_eq!(b_creates, 1);
    }

    //--- Stack Operation Tests --------------------------------------------

    #[test]
    fn push_remove_and_reenter() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log));
        manager.register_scene(TestScene::B, Tracer::new(&log));
        manager.start(&mut context);

        context.scene_transitions.push(SceneTransition::Push(TestScene::B));
        context.scene_transitions.push(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut context);
        assert_eq!(manager.stack(), &[TestScene::A, TestScene::B]);

        context.scene_transitions.push(SceneTransition::Remove(TestScene::B));
        manager.process_transitions(&mut context);
        assert_eq!(manager.phase(TestScene::B), ScenePhase::Terminal);

        context.scene_transitions.push(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut context);
        assert_eq!(manager.phase(TestScene::B), ScenePhase::Created);
    }

    #[test]
    fn clear_shuts_down_every_scene() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log));
        manager.register_default(TestScene::B, Tracer::new(&log));
        manager.start(&mut context);

        context.scene_transitions.push(SceneTransition::Clear);
        manager.process_transitions(&mut context);

        assert!(manager.stack().is_empty());
        assert_eq!(manager.phase(TestScene::A), ScenePhase::Terminal);
        assert_eq!(manager.phase(TestScene::B), ScenePhase::Terminal);
        assert!(context.display.is_empty());
    }

    #[test]
    fn transparent_scene_lets_lower_scene_update() {
        let (_dir, mut context) = context();
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Tracer::new(&log));
        manager.register_default(TestScene::B, Tracer::new(&log).transparent());
        manager.register_default(TestScene::C, Tracer::new(&log));
        manager.start(&mut context);
        log.lock().unwrap().clear();

        manager.update(&mut context);
        assert_eq!(entries(&log), vec!["c:update"]);

        context.scene_transitions.push(SceneTransition::Remove(TestScene::C));
        manager.process_transitions(&mut context);
        log.lock().unwrap().clear();

        manager.update(&mut context);
        assert_eq!(entries(&log), vec!["a:update", "b:update"]);
    }
}
