//=========================================================================
// Asset System
//=========================================================================
//
// Keyed image cache fed by a background loader thread.
//
// Architecture:
// ```text
//  Logic Thread                          Loader Thread
//  ┌──────────────────────────┐         ┌───────────────────┐
//  │ AssetServer              │ request │ LoaderWorker      │
//  │  request_image(key,path) ├────────>│  fs::read         │
//  │                          │         │  image::decode    │
//  │  poll() ── cache insert  │<────────┤  → RGBA8          │
//  │     └─> AssetEvent       │ result  └───────────────────┘
//  └──────────────────────────┘
// ```
//
// The logic thread never blocks on a load: completed results are drained
// once per tick and published as `AssetEvent`s.
//
//=========================================================================

//=== Module Declarations =================================================

mod loader;
mod server;

//=== Public API ==========================================================

pub use server::{AssetEvent, AssetServer, LoadStatus};

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

//=== AssetKey ============================================================

/// Logical name an asset is cached under (e.g. `"sky"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//=== ImageAsset ==========================================================

/// A decoded image, normalized to 8-bit RGBA.
///
/// Pixel storage is shared, so frames handed to the platform thread
/// reference the cached image instead of copying it.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pixels: Arc<RgbaImage>,
}

impl ImageAsset {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels: Arc::new(pixels) }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Another handle to the same pixel storage.
    pub fn shared(&self) -> Arc<RgbaImage> {
        Arc::clone(&self.pixels)
    }
}
