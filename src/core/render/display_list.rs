//=========================================================================
// Display List
//=========================================================================
//
// Ordered sprites, each owned by the scene that placed it.
//
//=========================================================================

use log::{trace, warn};

use super::Position;
use crate::core::assets::AssetKey;
use crate::core::scene::SceneKey;

//=== Sprite ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub(crate) u64);

/// Texture a sprite draws with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Texture {
    /// The key was resident when the sprite was placed.
    Resident(AssetKey),

    /// The key was not in the cache; drawn with a placeholder.
    Missing(AssetKey),
}

impl Texture {
    pub fn key(&self) -> &AssetKey {
        match self {
            Self::Resident(key) | Self::Missing(key) => key,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<S: SceneKey> {
    pub id: SpriteId,
    pub owner: S,
    pub texture: Texture,
    pub position: Position,
}

//=== DisplayList =========================================================

/// Sprites in draw order (first added is drawn first).
pub struct DisplayList<S: SceneKey> {
    sprites: Vec<Sprite<S>>,
    next_id: u64,
    revision: u64,
}

impl<S: SceneKey> DisplayList<S> {
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
            next_id: 0,
            revision: 0,
        }
    }

    /// Appends a sprite. `resident` tells whether `key` is in the cache.
    pub fn add(&mut self, owner: S, key: AssetKey, position: Position, resident: bool) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;

        let texture = if resident {
            Texture::Resident(key)
        } else {
            warn!(target: "render", "{} placed missing texture {}", owner.name(), key);
            Texture::Missing(key)
        };

        trace!(target: "render", "{:?} at ({}, {}) for {}", id, position.x, position.y, owner.name());
        self.sprites.push(Sprite { id, owner, texture, position });
        self.revision += 1;
        id
    }

    /// Removes every sprite owned by `owner`, returning how many.
    pub fn remove_owner(&mut self, owner: S) -> usize {
        let before = self.sprites.len();
        self.sprites.retain(|sprite| sprite.owner != owner);

        let removed = before - self.sprites.len();
        if removed > 0 {
            self.revision += 1;
        }
        removed
    }

    /// Bumped on every change; unchanged lists need not be redrawn.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sprites(&self) -> &[Sprite<S>] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl<S: SceneKey> Default for DisplayList<S> {
    fn default() -> Self {
        Self::new()
    }
}
