//! Image load bookkeeping.
//!
//! Sprites reference images by key. A key is *requested* when a sprite that
//! needs it is created, then *loaded* (with its natural size) or *failed* once
//! the texture loader has tried it. Failed keys are never retried and sprites
//! using them stay invisible.
//!
//! The catalog carries no GPU handles, so it lives in the ECS as a regular
//! resource and the headless tests can mark images loaded directly. Textures
//! themselves are in [`TextureStore`](super::texturestore::TextureStore).

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Natural size of a loaded image in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

#[derive(Resource, Debug, Default)]
pub struct ImageCatalog {
    pending: Vec<String>,
    loaded: FxHashMap<String, ImageInfo>,
    failed: FxHashSet<String>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `key` to be loaded. Keys already known or queued are ignored.
    pub fn request(&mut self, key: &str) {
        if self.loaded.contains_key(key)
            || self.failed.contains(key)
            || self.pending.iter().any(|k| k == key)
        {
            return;
        }
        self.pending.push(key.to_string());
    }

    /// Take every queued request, oldest first.
    pub fn drain_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub fn mark_loaded(&mut self, key: impl Into<String>, info: ImageInfo) {
        let key = key.into();
        self.pending.retain(|k| *k != key);
        self.failed.remove(&key);
        self.loaded.insert(key, info);
    }

    pub fn mark_failed(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.pending.retain(|k| *k != key);
        self.failed.insert(key);
    }

    pub fn get(&self, key: &str) -> Option<ImageInfo> {
        self.loaded.get(key).copied()
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.iter().any(|k| k == key)
    }

    pub fn has_failed(&self, key: &str) -> bool {
        self.failed.contains(key)
    }
}
