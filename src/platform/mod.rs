//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  EventCollector  │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   ├─ Tracks modifiers    │    │  InputDispatcher │
//  │   └─ Tracks cursor       │    │  ↓               │
//  │   ↓                      │    │  SceneManager    │
//  │  InputBuffer             │    │                  │
//  │   ├─ discrete: Vec<>     │    └──────────────────┘
//  │   └─ continuous: Set<>   │             ↑
//  │   ↓                      │             │
//  │  RedrawRequested (flush) │             │
//  │   ↓                      │             │
//  │  Channel ────────────────┼─────────────┘
//  │                          │    PlatformEvent
//  │  Presenter  <────────────┼───── Frame (on display change)
//  │   └─ softbuffer surface  │
//  └──────────────────────────┘
// ```
//
// - RedrawRequested is the frame boundary: input is flushed and the latest
//   frame is presented; empty input buffers are not sent
// - Pointer coordinates are logical pixels, matching scene positions
// - If the core thread is gone, events are dropped with a warning and the
//   window stays closable
// - Winit requires the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod presenter;

//=== External Crates =====================================================

use std::rc::Rc;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::Frame;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use presenter::Presenter;

//=== WindowConfig ========================================================

/// Window parameters chosen on the engine builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Preload".into(),
            width: 800,
            height: 600,
        }
    }
}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Not Send; communicates with the core thread only through `event_sender`
/// and `frames`. The window and its presenter are created lazily in
/// `resumed()`.
pub(crate) struct Platform {
    config: WindowConfig,
    window: Option<Rc<Window>>,
    presenter: Option<Presenter>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    frames: Receiver<Frame>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, frames: Receiver<Frame>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            window: None,
            presenter: None,
            buffer: InputBuffer::new(),
            event_sender,
            frames,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the frame's buffered input as one [`PlatformEvent::Inputs`].
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    /// Newest frame sent since the last call; older ones are superseded.
    fn latest_frame(&self) -> Option<Frame> {
        self.frames.try_iter().last()
    }

    fn present(&mut self) {
        let latest = self.latest_frame();
        let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) else {
            return;
        };

        if let Some(frame) = latest {
            presenter.set_frame(frame);
        }
        if let Err(e) = presenter.present(window) {
            error!(target: "render", "{}", e);
        }
    }

    fn notify_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core thread already gone");
        }
    }

    fn logical_cursor(&self, position: PhysicalPosition<f64>) -> (f32, f32) {
        let scale = self.window.as_ref().map_or(1.0, |window| window.scale_factor());
        let logical = position.to_logical::<f32>(scale);
        (logical.x, logical.y)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                let window = Rc::new(window);
                let logical = (self.config.width, self.config.height);
                match Presenter::new(Rc::clone(&window), logical) {
                    Ok(presenter) => self.presenter = Some(presenter),
                    Err(e) => warn!(target: "render", "{}; running without drawing", e),
                }

                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.logical_cursor(position);
                let event = self.input_processor.process_cursor_move(x, y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push_discrete(event),
                    None => trace!(target: "platform", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                self.present();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
