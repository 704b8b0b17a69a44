//=========================================================================
// Preload Scene
//=========================================================================
//
// First scene on the stack: queues the sky image, shows it once loaded,
// and hands over to the game scene on the first pointer press.
//
//   on_preload → load "sky"
//   on_create  → place "sky" at (400, 300), listen for "pointerdown"
//   pointerdown → start "game"
//
// The listener stays armed. The host stops delivering input once the
// scene is leaving, so a burst of presses starts the game a single time,
// and a rejected switch leaves the next press free to try again.
//
//=========================================================================

use std::path::Path;

use log::trace;

use super::SceneId;
use crate::core::assets::AssetKey;
use crate::core::input::{listener, InputEventKind};
use crate::core::render::Position;
use crate::core::scene::{Scene, SceneHost};

/// Loading screen shown before the game starts.
#[derive(Debug, Default)]
pub struct PreloadScene;

impl PreloadScene {
    /// Cache key of the background image.
    pub const SKY_KEY: &'static str = "sky";

    /// Image location, relative to the engine's asset root.
    pub const SKY_PATH: &'static str = "../../../public/assets/platform.png";

    /// Centre of an 800×600 window.
    pub const SKY_POSITION: Position = Position::new(400.0, 300.0);

    pub fn new() -> Self {
        Self
    }
}

impl Scene<SceneId> for PreloadScene {
    fn on_preload(&mut self, host: &mut dyn SceneHost<SceneId>) {
        trace!(target: "scene", "preload: requesting {}", Self::SKY_KEY);
        host.load_image(AssetKey::new(Self::SKY_KEY), Path::new(Self::SKY_PATH));
    }

    fn on_create(&mut self, host: &mut dyn SceneHost<SceneId>) {
        host.add_image(Self::SKY_POSITION, &AssetKey::new(Self::SKY_KEY));

        host.on_input(
            InputEventKind::PointerDown,
            listener(|_, control| control.start(SceneId::Game)),
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::ImageAsset;
    use crate::core::globals::GlobalContext;
    use crate::core::input::{
        InputDispatcher, InputEvent, InputListener, ListenMode, ListenerId, Modifiers, MouseButton,
    };
    use crate::core::message_bus::MessageBus;
    use crate::core::render::{SpriteId, Texture};
    use crate::core::scene::{SceneControl, SceneManager, ScenePhase, SceneTransition, TransitionQueue};
    use std::path::PathBuf;
    use std::time::Duration;

    //--- Recording Host ---------------------------------------------------

    #[derive(Debug, PartialEq)]
    enum Call {
        LoadImage(AssetKey, PathBuf),
        AddImage(Position, AssetKey),
        OnInput(InputEventKind),
        OnceInput(InputEventKind),
        StartScene(SceneId),
    }

    /// Records every host call; listeners are kept live so events can be
    /// fed through them afterwards. Like the engine host, it stops feeding
    /// the scene once an exit request is queued.
    struct RecordingHost {
        calls: Vec<Call>,
        input: InputDispatcher<SceneId>,
        transitions: TransitionQueue<SceneId>,
        messages: MessageBus,
        next_sprite: u64,
    }

    impl RecordingHost {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                input: InputDispatcher::new(),
                transitions: TransitionQueue::new(),
                messages: MessageBus::new(),
                next_sprite: 0,
            }
        }

        fn feed(&mut self, event: InputEvent) {
            let leaving = !self.transitions.is_empty();
            self.input.dispatch(&event, &mut self.transitions, |_| !leaving);
        }
    }

    impl SceneHost<SceneId> for RecordingHost {
        fn scene(&self) -> SceneId {
            SceneId::Preload
        }

        fn load_image(&mut self, key: AssetKey, path: &Path) {
            self.calls.push(Call::LoadImage(key, path.to_path_buf()));
        }

        fn add_image(&mut self, position: Position, key: &AssetKey) -> SpriteId {
            self.calls.push(Call::AddImage(position, key.clone()));
            self.next_sprite += 1;
            SpriteId(self.next_sprite)
        }

        fn on_input(&mut self, kind: InputEventKind, listener: InputListener<SceneId>) -> ListenerId {
            self.calls.push(Call::OnInput(kind));
            self.input.register(SceneId::Preload, kind, ListenMode::Repeat, listener)
        }

        fn once_input(&mut self, kind: InputEventKind, listener: InputListener<SceneId>) -> ListenerId {
            self.calls.push(Call::OnceInput(kind));
            self.input.register(SceneId::Preload, kind, ListenMode::Once, listener)
        }

        fn start_scene(&mut self, target: SceneId) {
            self.calls.push(Call::StartScene(target));
            SceneControl::new(SceneId::Preload, &mut self.transitions).start(target);
        }

        fn messages(&self) -> &MessageBus {
            &self.messages
        }
    }

    fn pointer_down() -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 10.0,
            y: 20.0,
            modifiers: Modifiers::NONE,
        }
    }

    fn requested_game() -> Vec<SceneTransition<SceneId>> {
        vec![SceneTransition::Replace(SceneId::Preload, SceneId::Game)]
    }

    //--- Hook Behaviour ---------------------------------------------------

    #[test]
    fn preload_requests_only_the_sky_image() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_preload(&mut host);

        assert_eq!(
            host.calls,
            vec![Call::LoadImage(
                AssetKey::new("sky"),
                PathBuf::from("../../../public/assets/platform.png"),
            )]
        );
    }

    #[test]
    fn create_places_sky_and_arms_pointerdown() {
        let mut scene = PreloadScene::new();
        let mut host = RecordingHost::new();
        scene.on_preload(&mut host);
        host.calls.clear();

        scene.on_create(&mut host);

        assert_eq!(
            host.calls,
            vec![
                Call::AddImage(Position::new(400.0, 300.0), AssetKey::new("sky")),
                Call::OnInput(InputEventKind::PointerDown),
            ]
        );
        assert_eq!(host.input.listener_count(InputEventKind::PointerDown), 1);
    }

    #[test]
    fn create_without_preload_performs_its_two_actions() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_create(&mut host);

        assert_eq!(host.calls.len(), 2);
        assert!(host.transitions.is_empty());
    }

    #[test]
    fn pointerdown_after_create_requests_game() {
        let mut host = RecordingHost::new();
        let mut scene = PreloadScene::new();
        scene.on_preload(&mut host);
        scene.on_create(&mut host);

        host.feed(pointer_down());

        assert_eq!(host.transitions.take(), requested_game());
    }

    #[test]
    fn pointerdown_before_create_requests_nothing() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_preload(&mut host);

        host.feed(pointer_down());

        assert!(host.transitions.is_empty());
    }

    #[test]
    fn repeated_pointerdown_requests_game_once() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_create(&mut host);

        host.feed(pointer_down());
        host.feed(pointer_down());
        host.feed(pointer_down());

        assert_eq!(host.transitions.take(), requested_game());
        assert_eq!(host.input.listener_count(InputEventKind::PointerDown), 1);
    }

    #[test]
    fn pointerdown_after_rejected_switch_requests_game_again() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_create(&mut host);

        host.feed(pointer_down());
        assert_eq!(host.transitions.take(), requested_game());

        host.feed(pointer_down());
        assert_eq!(host.transitions.take(), requested_game());
    }

    #[test]
    fn other_input_does_not_start_game() {
        let mut host = RecordingHost::new();
        PreloadScene::new().on_create(&mut host);

        host.feed(InputEvent::PointerMoved { x: 400.0, y: 300.0 });
        host.feed(InputEvent::PointerUp {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
            modifiers: Modifiers::NONE,
        });

        assert!(host.transitions.is_empty());
    }

    //--- Hosted Lifecycle -------------------------------------------------

    struct GameStub;

    impl Scene<SceneId> for GameStub {
        fn on_create(&mut self, _host: &mut dyn SceneHost<SceneId>) {}
    }

    /// `<tmp>/public/assets/platform.png`, with the asset root three
    /// directories below `<tmp>`.
    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("public").join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        image::RgbaImage::from_pixel(16, 12, image::Rgba([40, 120, 220, 255]))
            .save(assets.join("platform.png"))
            .unwrap();

        let root = dir.path().join("app").join("src").join("scenes");
        std::fs::create_dir_all(&root).unwrap();
        (dir, root)
    }

    #[test]
    fn hosted_preload_shows_sky_then_starts_game() {
        let (_dir, root) = fixture();
        let mut context = GlobalContext::new(root);
        let mut manager = SceneManager::new();
        manager.register_default(SceneId::Preload, PreloadScene::new());
        manager.register_scene(SceneId::Game, GameStub);

        manager.start(&mut context);
        assert_eq!(manager.phase(SceneId::Preload), ScenePhase::Loading);
        assert!(context.display.is_empty());

        for _ in 0..500 {
            manager.poll_assets(&mut context);
            if manager.phase(SceneId::Preload) == ScenePhase::Created {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(manager.phase(SceneId::Preload), ScenePhase::Created);

        let sprite = &context.display.sprites()[0];
        assert_eq!(sprite.texture, Texture::Resident(AssetKey::new("sky")));
        assert_eq!(sprite.position, PreloadScene::SKY_POSITION);
        assert_eq!(context.assets.get(&AssetKey::new("sky")).map(|a| a.width()), Some(16));

        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[SceneId::Game]);
        assert_eq!(manager.phase(SceneId::Preload), ScenePhase::Terminal);
        assert!(context.display.is_empty());
    }

    #[test]
    fn missing_game_scene_leaves_preload_listening() {
        let mut context = GlobalContext::new(".");
        context.assets.insert(
            AssetKey::new("sky"),
            ImageAsset::new(image::RgbaImage::new(4, 4)),
        );
        let mut manager = SceneManager::new();
        manager.register_default(SceneId::Preload, PreloadScene::new());

        manager.start(&mut context);
        assert_eq!(manager.phase(SceneId::Preload), ScenePhase::Created);

        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[SceneId::Preload]);
        assert_eq!(manager.phase(SceneId::Preload), ScenePhase::Created);
        assert_eq!(context.input.listener_count(InputEventKind::PointerDown), 1);
        assert_eq!(context.display.len(), 1);

        context.frame_events = vec![pointer_down()];
        manager.dispatch_input(&mut context);

        assert_eq!(context.scene_transitions.take(), requested_game());
    }
}
