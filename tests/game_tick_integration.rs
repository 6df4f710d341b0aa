//! Game tick integration tests: key dispatch, motion, launching, cooldown,
//! projectile expiry and canvas ordering, driven headless through the same
//! schedules and observers the binary uses.

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;
use std::f32::consts::{FRAC_PI_2, PI};

use headlaunch::components::head::Head;
use headlaunch::components::heading::Heading;
use headlaunch::components::mapposition::MapPosition;
use headlaunch::components::motion::Motion;
use headlaunch::components::oncanvas::OnCanvas;
use headlaunch::components::projectile::Projectile;
use headlaunch::components::sprite::Sprite;
use headlaunch::events::input::KeyEvent;
use headlaunch::game::{
    SpriteOptions, add_sprite, create_game, frame_schedule, remove_sprite, run_frame,
    spawn_sprite, tick_schedule,
};
use headlaunch::resources::gameconfig::GameConfig;
use headlaunch::resources::imagecatalog::{ImageCatalog, ImageInfo};
use headlaunch::resources::registry::SpriteRegistry;

const EPSILON: f32 = 1e-3;
const FRAME: f32 = 0.05;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Game {
    world: World,
    frame: Schedule,
    tick: Schedule,
    heads: [Entity; 2],
}

impl Game {
    fn new() -> Self {
        let mut world = World::new();
        let heads = create_game(&mut world, &GameConfig::new());
        Self {
            world,
            frame: frame_schedule(),
            tick: tick_schedule(),
            heads,
        }
    }

    /// Run `n` frames of 50 ms, one tick each.
    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            run_frame(&mut self.world, &mut self.frame, &mut self.tick, FRAME);
        }
    }

    fn press(&mut self, key: KeyboardKey) {
        self.world.trigger(KeyEvent::down(key));
        self.world.flush();
    }

    fn release(&mut self, key: KeyboardKey) {
        self.world.trigger(KeyEvent::up(key));
        self.world.flush();
    }

    fn projectiles(&mut self) -> Vec<Entity> {
        self.world
            .query_filtered::<Entity, With<Projectile>>()
            .iter(&self.world)
            .collect()
    }

    fn registry(&self) -> Vec<Entity> {
        self.world.resource::<SpriteRegistry>().as_slice().to_vec()
    }

    fn pos(&self, entity: Entity) -> (f32, f32) {
        let p = self.world.get::<MapPosition>(entity).unwrap();
        (p.pos.x, p.pos.y)
    }
}

#[test]
fn create_game_puts_both_heads_on_canvas() {
    let game = Game::new();
    let [p1, p2] = game.heads;

    assert_eq!(game.registry(), vec![p1, p2]);
    assert!(game.world.get::<OnCanvas>(p1).is_some());
    assert!(game.world.get::<OnCanvas>(p2).is_some());
    assert_eq!(game.pos(p1), (750.0, 200.0));
    assert_eq!(game.pos(p2), (50.0, 200.0));
    assert!(approx_eq(game.world.get::<Heading>(p1).unwrap().angle(), PI));
    assert_eq!(game.world.get::<Heading>(p2).unwrap().angle(), 0.0);

    let sprite = game.world.get::<Sprite>(p1).unwrap();
    assert_eq!(sprite.tex_key, "head1a.png");
    assert_eq!((sprite.width, sprite.height), (Some(60.0), Some(75.0)));
}

#[test]
fn forward_key_moves_head_one_pixel_per_tick() {
    let mut game = Game::new();
    let p1 = game.heads[0];

    game.press(KeyboardKey::KEY_UP);
    game.frames(1);

    let motion = game.world.get::<Motion>(p1).unwrap();
    assert_eq!(motion.move_speed, Some(1.0));
    let dir = game.world.get::<Heading>(p1).unwrap().direction();
    assert!(approx_eq(dir.x, -1.0));
    assert!(approx_eq(dir.y, 0.0));
    let (x, y) = game.pos(p1);
    assert!(approx_eq(x, 749.0));
    assert!(approx_eq(y, 200.0));
}

#[test]
fn backward_key_reverses_and_release_stops() {
    let mut game = Game::new();
    let p2 = game.heads[1];

    game.press(KeyboardKey::KEY_S);
    game.frames(10);
    assert!(approx_eq(game.pos(p2).0, 40.0));

    game.release(KeyboardKey::KEY_S);
    assert!(!game.world.get::<Motion>(p2).unwrap().is_moving());
    game.frames(10);
    assert!(approx_eq(game.pos(p2).0, 40.0));
}

#[test]
fn keys_only_drive_their_own_head() {
    let mut game = Game::new();
    let [p1, p2] = game.heads;

    game.press(KeyboardKey::KEY_W);
    game.frames(5);

    assert_eq!(game.pos(p1), (750.0, 200.0));
    assert!(approx_eq(game.pos(p2).0, 55.0));
}

#[test]
fn turning_keys_rotate_a_degree_per_tick() {
    let mut game = Game::new();
    let [p1, p2] = game.heads;

    game.press(KeyboardKey::KEY_RIGHT);
    game.press(KeyboardKey::KEY_A);
    game.frames(90);

    let h1 = game.world.get::<Heading>(p1).unwrap();
    assert!(approx_eq(h1.angle(), PI + FRAC_PI_2));
    let h2 = game.world.get::<Heading>(p2).unwrap();
    assert!(approx_eq(h2.angle(), PI + FRAC_PI_2));
    for h in [h1, h2] {
        assert!(approx_eq(h.direction().x, h.angle().cos()));
        assert!(approx_eq(h.direction().y, h.angle().sin()));
    }

    game.release(KeyboardKey::KEY_RIGHT);
    game.frames(10);
    let h1 = game.world.get::<Heading>(p1).unwrap();
    assert!(approx_eq(h1.angle(), PI + FRAC_PI_2));
}

#[test]
fn launch_spawns_projectile_at_head_edge_underneath() {
    let mut game = Game::new();
    let p1 = game.heads[0];

    game.press(KeyboardKey::KEY_M);

    let projectiles = game.projectiles();
    assert_eq!(projectiles.len(), 1);
    let projectile = projectiles[0];
    assert_eq!(game.registry()[0], projectile);
    assert!(game.world.get::<OnCanvas>(projectile).is_some());

    let (x, y) = game.pos(projectile);
    assert!(approx_eq(x, 720.0));
    assert!(approx_eq(y, 200.0));
    assert_eq!(
        game.world.get::<Motion>(projectile).unwrap().move_speed,
        Some(3.0)
    );
    assert!(approx_eq(
        game.world.get::<Heading>(projectile).unwrap().angle(),
        PI
    ));
    let sprite = game.world.get::<Sprite>(projectile).unwrap();
    assert_eq!(sprite.tex_key, "basketball.png");
    assert_eq!(
        game.world.get::<Projectile>(projectile).unwrap().launcher,
        p1
    );

    game.frames(10);
    assert!(approx_eq(game.pos(projectile).0, 690.0));
}

#[test]
fn launch_swaps_image_until_release() {
    let mut game = Game::new();
    let p1 = game.heads[0];

    game.press(KeyboardKey::KEY_M);
    assert_eq!(game.world.get::<Sprite>(p1).unwrap().tex_key, "head1b.png");

    game.release(KeyboardKey::KEY_M);
    assert_eq!(game.world.get::<Sprite>(p1).unwrap().tex_key, "head1a.png");
    // releasing does not end the cooldown
    assert!(!game.world.get::<Head>(p1).unwrap().can_launch);
}

#[test]
fn second_launch_within_cooldown_is_ignored() {
    let mut game = Game::new();

    game.press(KeyboardKey::KEY_M);
    game.release(KeyboardKey::KEY_M);
    game.frames(10);
    game.press(KeyboardKey::KEY_M);
    game.release(KeyboardKey::KEY_M);

    assert_eq!(game.projectiles().len(), 1);

    game.frames(12);
    game.press(KeyboardKey::KEY_M);
    assert_eq!(game.projectiles().len(), 2);
}

#[test]
fn holding_launch_past_cooldown_does_not_relaunch() {
    let mut game = Game::new();
    let p1 = game.heads[0];

    game.press(KeyboardKey::KEY_M);
    game.frames(30);

    assert!(game.world.get::<Head>(p1).unwrap().can_launch);
    assert_eq!(game.projectiles().len(), 1);

    // repeated key-down with no release in between
    game.press(KeyboardKey::KEY_M);
    game.frames(1);
    assert_eq!(game.projectiles().len(), 1);
    assert!(game.world.get::<Head>(p1).unwrap().launch_held);

    game.release(KeyboardKey::KEY_M);
    assert!(!game.world.get::<Head>(p1).unwrap().launch_held);
    game.press(KeyboardKey::KEY_M);
    assert_eq!(game.projectiles().len(), 2);
}

#[test]
fn projectile_is_removed_after_seven_seconds() {
    let mut game = Game::new();

    game.press(KeyboardKey::KEY_Q);
    let projectile = game.projectiles()[0];

    game.frames(139);
    assert!(game.world.get_entity(projectile).is_ok());
    assert_eq!(game.registry().len(), 3);

    game.frames(2);
    assert!(game.world.get_entity(projectile).is_err());
    assert_eq!(game.registry(), game.heads.to_vec());
}

#[test]
fn both_players_launch_independently() {
    let mut game = Game::new();

    game.press(KeyboardKey::KEY_M);
    game.press(KeyboardKey::KEY_Q);

    let projectiles = game.projectiles();
    assert_eq!(projectiles.len(), 2);
    let registry = game.registry();
    assert_eq!(registry.len(), 4);
    // newest projectile is drawn first
    let second = game.world.get::<Sprite>(registry[0]).unwrap();
    assert_eq!(second.tex_key, "laptop.png");
}

#[test]
fn add_sprite_at_front_draws_underneath() {
    let mut game = Game::new();
    let [p1, p2] = game.heads;
    let s = spawn_sprite(&mut game.world, "s.png", SpriteOptions::default());
    let t = spawn_sprite(&mut game.world, "t.png", SpriteOptions::default());

    assert!(game.world.get::<OnCanvas>(s).is_none());
    assert!(add_sprite(&mut game.world, s, Some(0)));
    assert!(add_sprite(&mut game.world, t, None));

    assert_eq!(game.registry(), vec![s, p1, p2, t]);
    assert!(game.world.get::<OnCanvas>(s).is_some());
}

#[test]
fn adding_twice_keeps_one_entry() {
    let mut game = Game::new();
    let p1 = game.heads[0];

    assert!(!add_sprite(&mut game.world, p1, Some(1)));
    assert_eq!(game.registry(), game.heads.to_vec());
}

#[test]
fn removing_absent_sprite_is_a_noop() {
    let mut game = Game::new();
    let loose = spawn_sprite(&mut game.world, "x.png", SpriteOptions::default());

    assert!(!remove_sprite(&mut game.world, loose));
    assert!(game.world.get_entity(loose).is_ok());
    assert_eq!(game.registry().len(), 2);

    let p2 = game.heads[1];
    assert!(remove_sprite(&mut game.world, p2));
    assert!(game.world.get_entity(p2).is_err());
    assert!(!remove_sprite(&mut game.world, p2));
    assert_eq!(game.registry(), vec![game.heads[0]]);
}

#[test]
fn width_follows_aspect_ratio_when_only_height_is_set() {
    let mut game = Game::new();
    let options = SpriteOptions {
        h: Some(30.0),
        ..SpriteOptions::default()
    };
    let s = spawn_sprite(&mut game.world, "wide.png", options);
    add_sprite(&mut game.world, s, None);

    game.frames(1);
    assert!(!game.world.get::<Sprite>(s).unwrap().loaded);

    game.world.resource_mut::<ImageCatalog>().mark_loaded(
        "wide.png",
        ImageInfo {
            width: 200.0,
            height: 100.0,
        },
    );
    game.frames(1);

    let sprite = game.world.get::<Sprite>(s).unwrap();
    assert!(sprite.loaded);
    assert_eq!(sprite.size(), Some((60.0, 30.0)));
}

#[test]
fn failed_image_leaves_head_invisible_but_playable() {
    let mut game = Game::new();
    let p1 = game.heads[0];
    game.world
        .resource_mut::<ImageCatalog>()
        .mark_failed("head1a.png");

    game.press(KeyboardKey::KEY_UP);
    game.frames(5);

    assert!(!game.world.get::<Sprite>(p1).unwrap().loaded);
    assert!(approx_eq(game.pos(p1).0, 745.0));
}

#[test]
fn stopping_a_stopped_head_changes_nothing() {
    let mut game = Game::new();
    let p1 = game.heads[0];
    let before = *game.world.get::<Motion>(p1).unwrap();

    game.release(KeyboardKey::KEY_UP);
    game.release(KeyboardKey::KEY_LEFT);

    assert_eq!(*game.world.get::<Motion>(p1).unwrap(), before);
}
