//=========================================================================
// Frame
//=========================================================================
//
// Snapshot of the display list that can cross to the platform thread.
//
// Each command holds a shared handle to the cached pixels, so capturing a
// frame copies no image data. Composition centres every image on its
// position and alpha-blends it over the ones drawn before it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use image::{imageops, Rgba, RgbaImage};
use log::trace;

//=== Internal Dependencies ===============================================

use super::{DisplayList, Position, Texture};
use crate::core::assets::{AssetServer, ImageAsset};
use crate::core::scene::SceneKey;

//=== Constants ===========================================================

/// Canvas colour behind every sprite.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Stand-in drawn for sprites whose texture never loaded.
const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([255, 0, 255, 255]);
const PLACEHOLDER_SIZE: u32 = 32;

//=== DrawCommand =========================================================

#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// `None` draws the placeholder.
    pub image: Option<Arc<RgbaImage>>,
    pub position: Position,
}

//=== Frame ===============================================================

/// Draw commands in display-list order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Resolves every sprite's texture against the asset cache.
    pub fn capture<S: SceneKey>(display: &DisplayList<S>, assets: &AssetServer) -> Self {
        let commands = display
            .sprites()
            .iter()
            .map(|sprite| {
                let image = match &sprite.texture {
                    Texture::Resident(key) => assets.get(key).map(ImageAsset::shared),
                    Texture::Missing(_) => None,
                };
                DrawCommand { image, position: sprite.position }
            })
            .collect();

        Self { commands }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Renders the frame onto a `width`×`height` canvas in logical pixels.
    ///
    /// Images partly outside the canvas are clipped.
    pub fn compose(&self, width: u32, height: u32) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
        let placeholder = RgbaImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_COLOR);

        for command in &self.commands {
            let image = command.image.as_deref().unwrap_or(&placeholder);
            let (x, y) = top_left(command.position, image);
            imageops::overlay(&mut canvas, image, x, y);
        }

        trace!(
            target: "render",
            "Composed {} command(s) onto {}x{}",
            self.commands.len(),
            width,
            height
        );
        canvas
    }
}

/// Packs a canvas into `0x00RRGGBB` words, row-major.
pub fn to_xrgb(canvas: &RgbaImage) -> Vec<u32> {
    canvas
        .pixels()
        .map(|&Rgba([r, g, b, _])| (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
        .collect()
}

fn top_left(position: Position, image: &RgbaImage) -> (i64, i64) {
    let x = position.x - image.width() as f32 / 2.0;
    let y = position.y - image.height() as f32 / 2.0;
    (x.round() as i64, y.round() as i64)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::AssetKey;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Splash,
    }

    impl SceneKey for TestScene {
        fn name(&self) -> &'static str {
            "splash"
        }
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn server_with(key: &str, image: RgbaImage) -> AssetServer {
        let mut assets = AssetServer::new(".");
        assets.insert(AssetKey::new(key), ImageAsset::new(image));
        assets
    }

    #[test]
    fn resident_sprite_lands_centred_on_its_position() {
        let assets = server_with("sky", RgbaImage::from_pixel(4, 4, RED));
        let mut display = DisplayList::new();
        display.add(TestScene::Splash, "sky".into(), Position::new(400.0, 300.0), true);

        let canvas = Frame::capture(&display, &assets).compose(800, 600);

        assert_eq!(canvas.get_pixel(400, 300), &RED);
        assert_eq!(canvas.get_pixel(398, 298), &RED);
        assert_eq!(canvas.get_pixel(401, 301), &RED);
        assert_eq!(canvas.get_pixel(397, 297), &BACKGROUND);
        assert_eq!(canvas.get_pixel(402, 302), &BACKGROUND);
        assert_eq!(canvas.get_pixel(0, 0), &BACKGROUND);
    }

    #[test]
    fn capture_shares_cached_pixels() {
        let assets = server_with("sky", RgbaImage::from_pixel(2, 2, RED));
        let mut display = DisplayList::new();
        display.add(TestScene::Splash, "sky".into(), Position::default(), true);

        let frame = Frame::capture(&display, &assets);
        let cached = assets.get(&"sky".into()).map(ImageAsset::shared);

        let drawn = frame.commands()[0].image.as_ref();
        assert!(matches!((drawn, cached), (Some(a), Some(b)) if Arc::ptr_eq(a, &b)));
    }

    #[test]
    fn missing_texture_draws_placeholder() {
        let assets = AssetServer::new(".");
        let mut display = DisplayList::new();
        display.add(TestScene::Splash, "sky".into(), Position::new(400.0, 300.0), false);

        let frame = Frame::capture(&display, &assets);
        assert!(frame.commands()[0].image.is_none());

        let canvas = frame.compose(800, 600);
        assert_eq!(canvas.get_pixel(400, 300), &PLACEHOLDER_COLOR);
        assert_eq!(canvas.get_pixel(383, 283), &BACKGROUND);
    }

    #[test]
    fn later_sprites_draw_over_earlier_ones() {
        let mut assets = server_with("sky", RgbaImage::from_pixel(10, 10, RED));
        assets.insert("sun".into(), ImageAsset::new(RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]))));
        let mut display = DisplayList::new();
        display.add(TestScene::Splash, "sky".into(), Position::new(50.0, 50.0), true);
        display.add(TestScene::Splash, "sun".into(), Position::new(50.0, 50.0), true);

        let canvas = Frame::capture(&display, &assets).compose(100, 100);

        assert_eq!(canvas.get_pixel(50, 50), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(46, 46), &RED);
    }

    #[test]
    fn sprite_past_the_edge_is_clipped() {
        let assets = server_with("sky", RgbaImage::from_pixel(20, 20, RED));
        let mut display = DisplayList::new();
        display.add(TestScene::Splash, "sky".into(), Position::new(0.0, 0.0), true);

        let canvas = Frame::capture(&display, &assets).compose(16, 16);

        assert_eq!(canvas.get_pixel(0, 0), &RED);
        assert_eq!(canvas.get_pixel(9, 9), &RED);
        assert_eq!(canvas.get_pixel(10, 10), &BACKGROUND);
    }

    #[test]
    fn empty_frame_is_background() {
        let canvas = Frame::default().compose(3, 2);
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn xrgb_packs_channels_and_drops_alpha() {
        let canvas = RgbaImage::from_pixel(2, 1, Rgba([0x12, 0x34, 0x56, 0x00]));
        assert_eq!(to_xrgb(&canvas), vec![0x0012_3456, 0x0012_3456]);
    }
}
