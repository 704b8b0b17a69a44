//=========================================================================
// Render State
//=========================================================================
//
// Retained display list of images placed by scenes.
//
// Scenes ask the host to place a cached image at a position; the host
// records a `Sprite` owned by that scene.
//
//   DisplayList + AssetServer ─capture()─> Frame ──channel──> Platform
//                                                              │
//                                          compose() → canvas ─┘→ window
//
// The logic thread captures a `Frame` whenever the list changes; the
// platform thread composes it and presents the result.
//
//=========================================================================

//=== Module Declarations =================================================

mod display_list;
mod frame;

//=== Public API ==========================================================

pub use display_list::{DisplayList, Sprite, SpriteId, Texture};
pub use frame::{to_xrgb, DrawCommand, Frame, BACKGROUND};

//=== Position ============================================================

/// Point in window space (logical pixels, top-left origin).
///
/// Images are centred on their position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
