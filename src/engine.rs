//=========================================================================
// Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): register scenes
//         ├─ with_channel_capacity() └─ run(): spawns core thread,
//         ├─ with_asset_root()                runs platform,
//         ├─ with_window_title()              blocks until exit
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use crossbeam_channel::{bounded, unbounded};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::error::EngineError;
use crate::core::globals::GlobalSystems;
use crate::core::scene::SceneKey;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Asset root**: `.` (image paths are resolved against it)
/// - **Window**: `"Preload"`, 800×600
///
/// # Examples
///
/// ```no_run
/// use preload_stage::EngineBuilder;
/// use preload_stage::scenes::{PreloadScene, SceneId};
///
/// EngineBuilder::<SceneId>::new()
///     .with_tps(120.0)
///     .with_asset_root("app/src/scenes")
///     .build()
///     .init(|systems| {
///         systems.scene_manager.register_default(SceneId::Preload, PreloadScene::new());
///     })
///     .run()
///     .expect("engine failed");
/// ```
pub struct EngineBuilder<S: SceneKey> {
    tps: f64,
    channel_capacity: usize,
    asset_root: PathBuf,
    window: WindowConfig,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: SceneKey> EngineBuilder<S> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            asset_root: PathBuf::from("."),
            window: WindowConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the directory scene image paths are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the window's inner size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S> {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {}, assets: {})",
            self.tps,
            self.channel_capacity,
            self.asset_root.display()
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.asset_root),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime hosting the scene stack.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► SceneManager, AssetServer, InputDispatcher
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded crossbeam channel (PlatformEvent) towards core,
/// unbounded channel (Frame) back to the platform
/// ```
pub struct Engine<S: SceneKey> {
    orchestrator: CoreSystemsOrchestrator<S>,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<S: SceneKey> Engine<S> {
    //--- Initialization ---------------------------------------------------

    /// Gives access to [`GlobalSystems`] for scene registration.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S>),
    {
        info!(target: "engine", "Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!(target: "engine", "Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread (enters default scenes, then ticks)
    /// 3. Runs the platform event loop on this thread
    /// 4. Joins the logic thread
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the logic thread cannot be spawned or
    /// panics, or if the platform fails.
    pub fn run(self) -> Result<(), EngineError> {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        // Frames are only sent when the display changes, so the return
        // channel stays short without a bound
        let (tx, rx) = bounded(self.channel_capacity);
        let (frame_tx, frame_rx) = unbounded();

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, frame_tx, self.tps)?;
        info!(target: "engine", "Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform_result = Platform::new(tx, frame_rx, self.window).run();
        info!(target: "engine", "Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        // The platform's sender is dropped with it, so the core thread sees
        // a disconnect even if WindowClosed was never sent.
        let core_result = core_handle.join();

        if let Err(e) = &platform_result {
            error!(target: "engine", "Platform error: {}", e);
        }
        platform_result?;

        if core_result.is_err() {
            error!(target: "engine", "Core thread panicked");
            return Err(EngineError::CoreThreadPanicked);
        }

        info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
