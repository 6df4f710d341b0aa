//! Asynchronous image loading.
//!
//! Loading is split in two so sprites never block on disk or GPU work:
//!
//! - [`load_pending_textures`] (needs the raylib window) drains the
//!   [`ImageCatalog`] request queue, uploads each image into the
//!   [`TextureStore`] and records its natural size. Failures are logged and
//!   never retried.
//! - [`image_load_system`] notices sprites whose image has become available and
//!   marks them loaded, resolving any unset dimensions. Sprites whose image is
//!   unknown re-request it; a failed image leaves the sprite invisible.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::sprite::Sprite;
use crate::resources::gameconfig::GameConfig;
use crate::resources::imagecatalog::{ImageCatalog, ImageInfo};
use crate::resources::texturestore::TextureStore;

/// Resolve sprites whose image has finished loading.
pub fn image_load_system(
    mut catalog: ResMut<ImageCatalog>,
    mut sprites: Query<(Entity, &mut Sprite)>,
) {
    for (entity, mut sprite) in sprites.iter_mut() {
        if sprite.loaded {
            continue;
        }
        match catalog.get(&sprite.tex_key) {
            Some(info) => {
                sprite.on_image_loaded(info.width, info.height);
                debug!(
                    "{:?} image {} ready at {:?}x{:?}",
                    entity, sprite.tex_key, sprite.width, sprite.height
                );
            }
            None => catalog.request(&sprite.tex_key),
        }
    }
}

/// Load every requested image from the asset directory.
pub fn load_pending_textures(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    mut catalog: ResMut<ImageCatalog>,
    config: Res<GameConfig>,
) {
    for key in catalog.drain_pending() {
        let path = config.asset_dir.join(&key);
        match rl.load_texture(&th, &path.to_string_lossy()) {
            Ok(texture) => {
                let info = ImageInfo {
                    width: texture.width as f32,
                    height: texture.height as f32,
                };
                info!("Loaded image {:?} ({}x{})", path, info.width, info.height);
                textures.insert(key.clone(), texture);
                catalog.mark_loaded(key, info);
            }
            Err(e) => {
                warn!("Failed to load image {:?}, it will not be drawn: {:?}", path, e);
                catalog.mark_failed(key);
            }
        }
    }
}
