//=========================================================================
// Presenter
//=========================================================================
//
// Puts the latest core `Frame` on screen through a softbuffer surface.
//
//   Frame ─compose(logical size)─> canvas ─resize(physical)─> XRGB ─> surface
//
// Scenes place sprites in logical pixels, so the frame is composed at the
// configured window size and stretched to the surface. The packed pixels
// are cached until the frame or the surface size changes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;
use std::rc::Rc;

use image::imageops::{self, FilterType};
use log::{debug, trace};
use softbuffer::{Context, Surface};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;
use crate::core::render::{to_xrgb, Frame};

//=== Presenter ===========================================================

pub(crate) struct Presenter {
    // Kept alive for the surface's lifetime
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    logical: (u32, u32),
    surface_size: Option<(u32, u32)>,
    frame: Frame,
    cached: Option<((u32, u32), Vec<u32>)>,
}

impl Presenter {
    /// Binds a surface to `window`. `logical` is the canvas size frames are
    /// composed at.
    pub(crate) fn new(window: Rc<Window>, logical: (u32, u32)) -> Result<Self, PlatformError> {
        let context = Context::new(Rc::clone(&window)).map_err(presentation)?;
        let surface = Surface::new(&context, window).map_err(presentation)?;

        debug!(target: "render", "Surface ready, canvas {}x{}", logical.0, logical.1);
        Ok(Self {
            _context: context,
            surface,
            logical,
            surface_size: None,
            frame: Frame::default(),
            cached: None,
        })
    }

    /// Replaces the frame shown by the next [`present`](Self::present).
    pub(crate) fn set_frame(&mut self, frame: Frame) {
        trace!(target: "render", "New frame with {} command(s)", frame.commands().len());
        self.frame = frame;
        self.cached = None;
    }

    /// Draws the current frame at the window's physical size.
    ///
    /// A minimised (zero-sized) window is skipped.
    pub(crate) fn present(&mut self, window: &Window) -> Result<(), PlatformError> {
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        let physical = (size.width, size.height);

        if self.surface_size != Some(physical) {
            self.surface.resize(width, height).map_err(presentation)?;
            self.surface_size = Some(physical);
        }

        if !matches!(&self.cached, Some((cached, _)) if *cached == physical) {
            self.cached = Some((physical, scaled_pixels(&self.frame, self.logical, physical)));
        }
        let Some((_, pixels)) = &self.cached else {
            return Ok(());
        };

        let mut buffer = self.surface.buffer_mut().map_err(presentation)?;
        buffer.copy_from_slice(pixels);
        buffer.present().map_err(presentation)
    }
}

/// Composes `frame` at `logical` size and stretches it to `physical`.
fn scaled_pixels(frame: &Frame, logical: (u32, u32), physical: (u32, u32)) -> Vec<u32> {
    let canvas = frame.compose(logical.0, logical.1);

    if logical == physical {
        to_xrgb(&canvas)
    } else {
        let scaled = imageops::resize(&canvas, physical.0, physical.1, FilterType::Nearest);
        to_xrgb(&scaled)
    }
}

fn presentation(err: softbuffer::SoftBufferError) -> PlatformError {
    PlatformError::Presentation(err.to_string())
}

//=========================================================================
// Unit Tests
//=========================================================================
