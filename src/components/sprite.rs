//! Sprite image component.
//!
//! A [`Sprite`] names the image it displays by texture key and carries the
//! requested draw size. The image loads asynchronously: until
//! [`crate::systems::imageload::image_load_system`] sees the texture in the
//! [`ImageCatalog`](crate::resources::imagecatalog::ImageCatalog), the sprite
//! stays unloaded and is not drawn. Missing dimensions are resolved from the
//! natural image size at that point.

use bevy_ecs::prelude::Component;

/// Image and size of a drawable entity.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    /// Key of the texture currently displayed.
    pub tex_key: String,
    /// Draw width in pixels, `None` until known.
    pub width: Option<f32>,
    /// Draw height in pixels, `None` until known.
    pub height: Option<f32>,
    /// Set once the image behind the original `tex_key` has loaded.
    pub loaded: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: None,
            height: None,
            loaded: false,
        }
    }

    pub fn with_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark the image as loaded and fill in unset dimensions.
    ///
    /// With neither dimension set, the natural size is used. With one set, the
    /// other follows the image's aspect ratio.
    pub fn on_image_loaded(&mut self, natural_width: f32, natural_height: f32) {
        self.loaded = true;
        match (self.width, self.height) {
            (None, None) => {
                self.width = Some(natural_width);
                self.height = Some(natural_height);
            }
            (None, Some(h)) if natural_height > 0.0 => {
                self.width = Some(h / natural_height * natural_width);
            }
            (Some(w), None) if natural_width > 0.0 => {
                self.height = Some(w / natural_width * natural_height);
            }
            _ => {}
        }
    }

    /// Draw size, available only once loaded and fully resolved.
    pub fn size(&self) -> Option<(f32, f32)> {
        if !self.loaded {
            return None;
        }
        Some((self.width?, self.height?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_sprite_has_no_size() {
        let sprite = Sprite::new("ball.png").with_size(Some(20.0), Some(20.0));
        assert!(sprite.size().is_none());
    }

    #[test]
    fn natural_size_when_unset() {
        let mut sprite = Sprite::new("ball.png");
        sprite.on_image_loaded(64.0, 32.0);
        assert_eq!(sprite.size(), Some((64.0, 32.0)));
    }

    #[test]
    fn width_derived_from_height_and_aspect() {
        let mut sprite = Sprite::new("wide.png").with_size(None, Some(10.0));
        sprite.on_image_loaded(200.0, 100.0);
        assert_eq!(sprite.size(), Some((20.0, 10.0)));
    }

    #[test]
    fn height_derived_from_width_and_aspect() {
        let mut sprite = Sprite::new("tall.png").with_size(Some(30.0), None);
        sprite.on_image_loaded(50.0, 100.0);
        assert_eq!(sprite.size(), Some((30.0, 60.0)));
    }

    #[test]
    fn explicit_size_wins_over_natural() {
        let mut sprite = Sprite::new("head.png").with_size(Some(60.0), Some(75.0));
        sprite.on_image_loaded(512.0, 512.0);
        assert_eq!(sprite.size(), Some((60.0, 75.0)));
    }
}
