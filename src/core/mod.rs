//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the scene systems and the context they serve to scenes
// - Receive platform events over a bounded crossbeam channel
// - Publish a render `Frame` back to the platform when the display changes
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication with the platform occurs only through message passing,
// so scenes and assets never leave the logic thread.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod error;
pub mod globals;
pub mod input;
pub mod message_bus;
pub mod platform_bridge;
pub mod render;
pub mod scene;

//=== Standard Library Imports ============================================

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

//=== Internal Modules ====================================================

use error::EngineError;
use globals::{GlobalContext, GlobalSystems};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::Frame;
use scene::SceneKey;

//=== CoreSystemsOrchestrator =============================================
//
// Owns the systems/context pair and schedules their updates.
//
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey> {
    systems: GlobalSystems<S>,
    context: GlobalContext<S>,
}

impl<S: SceneKey> CoreSystemsOrchestrator<S> {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(asset_root),
        }
    }

    //--- init_systems() ---------------------------------------------------
    //
    // Hands the systems to user code (scene registration) before running.
    //
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S>),
    {
        init_fn(&mut self.systems);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the main logic thread responsible for ticking all core systems
    // at a fixed update frequency (TPS - ticks per second).
    //
    // Before the first tick the default scenes are entered. Each tick:
    //  1. Collects platform events up to the tick deadline (exits on close
    //     or disconnect); the wait doubles as pacing
    //  2. Updates scene systems with this tick's input
    //  3. Publishes a frame if the display list changed
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        frames: Sender<Frame>,
        tps: f64,
    ) -> Result<thread::JoinHandle<()>, EngineError> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::Builder::new()
            .name("core".into())
            .spawn(move || {
                let Self { mut systems, mut context } = self;
                let mut collector = EventCollector::new(receiver);
                let mut published = None;

                systems.start(&mut context);
                publish_frame(&context, &frames, &mut published);

                let mut deadline = Instant::now() + frame_duration;
                loop {
                    //--- Step 1: Gather platform events --------------------
                    if collector.collect_until(deadline) == TickControl::Exit {
                        info!(target: "engine", "Core thread exiting.");
                        break;
                    }
                    context.frame_events = collector.take_events();

                    //--- Step 2: Update subsystems -------------------------
                    systems.update(&mut context);

                    //--- Step 3: Hand the display to the platform ----------
                    publish_frame(&context, &frames, &mut published);

                    // A slow tick moves the schedule instead of bursting
                    deadline = (deadline + frame_duration).max(Instant::now());
                }
            })
            .map_err(EngineError::CoreThreadSpawn)
    }
}

/// Sends a [`Frame`] when the display list revision differs from the last
/// one sent. A closed channel only means the window is already gone.
fn publish_frame<S: SceneKey>(context: &GlobalContext<S>, frames: &Sender<Frame>, published: &mut Option<u64>) {
    let revision = context.display.revision();
    if *published == Some(revision) {
        return;
    }

    let frame = Frame::capture(&context.display, &context.assets);
    if frames.send(frame).is_err() {
        debug!(target: "render", "Platform gone, frame {} dropped", revision);
    }
    *published = Some(revision);
}

//=========================================================================
// Unit Tests
//=========================================================================
