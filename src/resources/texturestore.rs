//! Loaded textures keyed by string IDs.
//!
//! Load failures are logged and leave the key absent. Renderers skip anything
//! whose texture is missing, so a bad asset path draws nothing instead of
//! aborting.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{error, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Texture size in pixels.
    pub fn size(&self, key: impl AsRef<str>) -> Option<Vector2> {
        self.get(key).map(|tex| Vector2 {
            x: tex.width as f32,
            y: tex.height as f32,
        })
    }

    /// Load `path` from disk and store it under `key`.
    ///
    /// Returns false, after logging, if the file could not be loaded.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> bool {
        let key = key.into();
        let path = path.as_ref();
        let Some(path_str) = path.to_str() else {
            error!("Texture path {:?} for '{}' is not valid UTF-8", path, key);
            return false;
        };
        match rl.load_texture(thread, path_str) {
            Ok(texture) => {
                info!(
                    "Loaded texture '{}' from {} ({}x{})",
                    key, path_str, texture.width, texture.height
                );
                self.insert(key, texture);
                true
            }
            Err(e) => {
                error!("Failed to load texture '{}' from {}: {:?}", key, path_str, e);
                false
            }
        }
    }
}
