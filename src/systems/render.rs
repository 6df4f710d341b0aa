//! Canvas rendering.
//!
//! Sprites are drawn in registry order so later entries paint over earlier
//! ones. Each sprite is centered on its position and rotated by its heading;
//! left-facing sprites are mirrored vertically so artwork authored facing right
//! stays upright. Sprites whose image has not loaded are skipped.
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, RaylibDraw, Rectangle, Vector2};

use crate::components::heading::Heading;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::registry::SpriteRegistry;
use crate::resources::texturestore::TextureStore;
use crate::resources::tickclock::TickClock;
use crate::resources::worldtime::WorldTime;

/// Where and how to draw a sprite's texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Destination on screen; `x`/`y` is the sprite position (the pivot).
    pub dest: Rectangle,
    /// Pivot relative to the destination's top-left: the sprite center.
    pub origin: Vector2,
    pub rotation_degrees: f32,
    pub flip_vertical: bool,
}

impl DrawParams {
    /// Source rectangle covering the whole texture, with a negative height
    /// when the sprite is mirrored.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex_width,
            height: if self.flip_vertical {
                -tex_height
            } else {
                tex_height
            },
        }
    }
}

/// Draw placement for a sprite, or `None` while its image is not loaded.
pub fn draw_params(sprite: &Sprite, position: &MapPosition, heading: &Heading) -> Option<DrawParams> {
    let (width, height) = sprite.size()?;
    Some(DrawParams {
        dest: Rectangle {
            x: position.pos.x,
            y: position.pos.y,
            width,
            height,
        },
        origin: Vector2 {
            x: width / 2.0,
            y: height / 2.0,
        },
        rotation_degrees: heading.angle().to_degrees(),
        flip_vertical: heading.faces_left(),
    })
}

/// Clear the window and draw every sprite on the canvas.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    registry: Res<SpriteRegistry>,
    sprites: Query<(&Sprite, &MapPosition, &Heading)>,
    world_time: Res<WorldTime>,
    clock: Res<TickClock>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);

    for entity in registry.iter() {
        let Ok((sprite, position, heading)) = sprites.get(entity) else {
            continue;
        };
        let Some(params) = draw_params(sprite, position, heading) else {
            continue;
        };
        // the launching variant may still be loading
        let Some(texture) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let src = params.source_rect(texture.width as f32, texture.height as f32);
        d.draw_texture_pro(
            texture,
            src,
            params.dest,
            params.origin,
            params.rotation_degrees,
            Color::WHITE,
        );
    }

    if debug_mode.is_some() {
        d.draw_fps(10, 10);
        d.draw_text(
            &format!("Sprites: {}  Textures: {}", registry.len(), textures.len()),
            10,
            30,
            10,
            Color::BLACK,
        );
        d.draw_text(
            &format!(
                "Time: {:.1}s  Frames: {}  Ticks: {}",
                world_time.elapsed, world_time.frame_count, clock.ticks
            ),
            10,
            42,
            10,
            Color::BLACK,
        );
        for entity in registry.iter() {
            let Ok((_, position, heading)) = sprites.get(entity) else {
                continue;
            };
            let (x, y) = (position.pos.x as i32, position.pos.y as i32);
            d.draw_line(x - 5, y, x + 5, y, Color::GREEN);
            d.draw_line(x, y - 5, x, y + 5, Color::GREEN);
            let dir = heading.direction();
            d.draw_line(
                x,
                y,
                x + (dir.x * 20.0) as i32,
                y + (dir.y * 20.0) as i32,
                Color::RED,
            );
        }
    }
}
