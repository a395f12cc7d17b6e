//! Presentation side: drawables and the texture cache they read frames from

use coinburst_core::Vec2;
use std::collections::{HashMap, HashSet};

/// Opaque handle to a texture owned by the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

impl TextureHandle {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Texture name for a frame of a cycle: `<prefix><index zero-padded to 3>`
pub fn frame_texture_name(prefix: &str, index: u32) -> String {
    format!("{prefix}{index:03}")
}

/// Something the host can draw a coin with.
///
/// The simulation only ever writes into a drawable; it never reads state
/// back except for the size, once, to centre the pivot.
pub trait Drawable {
    /// Unscaled size in pixels
    fn size(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn set_scale(&mut self, scale: Vec2);
    fn set_pivot(&mut self, pivot: Vec2);
    fn set_alpha(&mut self, alpha: f32);
    fn set_rotation(&mut self, rotation: f32);
    fn set_texture(&mut self, texture: TextureHandle);
}

/// In-memory drawable used for headless runs
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub scale: Vec2,
    pub pivot: Vec2,
    pub alpha: f32,
    pub rotation: f32,
    pub texture: Option<TextureHandle>,
}

impl Sprite {
    pub fn new(texture: Option<TextureHandle>) -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            pivot: Vec2::ZERO,
            alpha: 1.0,
            rotation: 0.0,
            texture,
        }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Drawable for Sprite {
    fn size(&self) -> Vec2 {
        self.texture.map(|t| t.size()).unwrap_or(Vec2::ZERO)
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }
}

/// Name-keyed texture registry, mirroring the host's loaded-texture cache
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
    /// Missing names already reported, so a gap warns once rather than every frame
    warned: HashSet<String>,
    next_id: u32,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `count` frames named `<prefix>000`, `<prefix>001`, ...
    pub fn with_frames(prefix: &str, count: u32, width: f32, height: f32) -> Self {
        let mut cache = Self::new();
        for i in 0..count {
            cache.insert(&frame_texture_name(prefix, i), width, height);
        }
        cache
    }

    /// Register a texture. Overwrites any existing texture with the same name.
    pub fn insert(&mut self, name: &str, width: f32, height: f32) -> TextureHandle {
        let handle = TextureHandle::new(self.next_id, width, height);
        self.next_id += 1;
        self.textures.insert(name.to_string(), handle);
        self.warned.remove(name);
        handle
    }

    /// Drop a texture, returning it if it was registered
    pub fn remove(&mut self, name: &str) -> Option<TextureHandle> {
        self.textures.remove(name)
    }

    /// Look up a texture without reporting misses
    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).copied()
    }

    /// Look up a texture for display. A miss is logged as a warning the first
    /// time a name is requested.
    pub fn lookup(&mut self, name: &str) -> Option<TextureHandle> {
        let found = self.get(name);
        if found.is_none() {
            if self.warned.insert(name.to_string()) {
                log::warn!("Texture '{name}' doesn't exist");
            } else {
                log::trace!("Texture '{name}' still missing");
            }
        }
        found
    }

    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
