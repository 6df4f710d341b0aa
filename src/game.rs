//! Game setup and canvas membership.
//!
//! [`create_game`] wires the two heads into a world. [`add_sprite`] and
//! [`remove_sprite`] are the only ways sprites join and leave the
//! [`SpriteRegistry`]; they keep the [`OnCanvas`] back-reference and the
//! entity's lifetime in step with it. [`run_frame`] is one pass of the main
//! loop: wall-clock systems every frame, then as many sprite ticks as are due.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::heading::Heading;
use crate::components::head::{HEAD_HEIGHT, HEAD_WIDTH, Head};
use crate::components::mapposition::MapPosition;
use crate::components::motion::Motion;
use crate::components::oncanvas::OnCanvas;
use crate::components::projectile::{
    PROJECTILE_LIFETIME_SECS, PROJECTILE_SIZE, PROJECTILE_SPEED, Projectile,
};
use crate::components::sprite::Sprite;
use crate::components::ttl::Ttl;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::{GameConfig, PlayerConfig};
use crate::resources::imagecatalog::ImageCatalog;
use crate::resources::input::InputState;
use crate::resources::registry::SpriteRegistry;
use crate::resources::tickclock::TickClock;
use crate::resources::worldtime::WorldTime;
use crate::systems::head::{head_key_observer, launch_ready_observer};
use crate::systems::imageload::image_load_system;
use crate::systems::step::step_system;
use crate::systems::time::update_world_time;
use crate::systems::timer::update_timers;
use crate::systems::ttl::ttl_system;

/// Placement and size of a new sprite. Unset sizes are resolved when the image
/// loads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteOptions {
    pub x: f32,
    pub y: f32,
    pub w: Option<f32>,
    pub h: Option<f32>,
    /// Heading in radians.
    pub angle: f32,
}

/// Components shared by every sprite, standing still.
pub fn sprite_bundle(
    tex_key: &str,
    options: SpriteOptions,
) -> (Sprite, MapPosition, Heading, Motion) {
    (
        Sprite::new(tex_key).with_size(options.w, options.h),
        MapPosition::new(options.x, options.y),
        Heading::new(options.angle),
        Motion::default(),
    )
}

/// Spawn a plain sprite. It is not on the canvas until [`add_sprite`] is called.
pub fn spawn_sprite(world: &mut World, tex_key: &str, options: SpriteOptions) -> Entity {
    world.resource_mut::<ImageCatalog>().request(tex_key);
    world.spawn(sprite_bundle(tex_key, options)).id()
}

/// Spawn a player head from its configuration. Heads are always 60 × 75.
pub fn spawn_head(world: &mut World, player: &PlayerConfig) -> Entity {
    {
        let mut catalog = world.resource_mut::<ImageCatalog>();
        catalog.request(&player.idle_image);
        catalog.request(&player.launching_image);
        catalog.request(&player.projectile_image);
    }
    let options = SpriteOptions {
        x: player.x,
        y: player.y,
        w: Some(HEAD_WIDTH),
        h: Some(HEAD_HEIGHT),
        angle: player.angle,
    };
    let head = Head::new(
        player.idle_image.as_str(),
        player.launching_image.as_str(),
        player.projectile_image.as_str(),
        player.bindings,
    );
    world
        .spawn((sprite_bundle(&player.idle_image, options), head))
        .id()
}

/// Spawn a projectile at the front edge of a head and queue it onto the canvas
/// underneath every other sprite. It travels along the head's heading and
/// expires after [`PROJECTILE_LIFETIME_SECS`].
pub fn spawn_projectile(
    commands: &mut Commands,
    launcher: Entity,
    head: &Head,
    head_width: f32,
    position: &MapPosition,
    heading: &Heading,
) -> Entity {
    let dir = heading.direction();
    let options = SpriteOptions {
        x: position.pos.x + head_width / 2.0 * dir.x,
        y: position.pos.y + head_width / 2.0 * dir.y,
        w: Some(PROJECTILE_SIZE),
        h: Some(PROJECTILE_SIZE),
        angle: heading.angle(),
    };
    let (sprite, position, heading, mut motion) = sprite_bundle(&head.projectile_tex, options);
    motion.start_moving(PROJECTILE_SPEED);

    let projectile = commands
        .spawn((
            sprite,
            position,
            heading,
            motion,
            Projectile { launcher },
            Ttl::new(PROJECTILE_LIFETIME_SECS),
        ))
        .id();
    commands.queue(move |world: &mut World| {
        add_sprite(world, projectile, Some(0));
    });
    projectile
}

/// Put `entity` on the canvas at `index` (append when `None`).
///
/// Returns `false` when the entity does not exist or is already on the canvas;
/// the registry is left unchanged in both cases.
pub fn add_sprite(world: &mut World, entity: Entity, index: Option<usize>) -> bool {
    if world.get_entity(entity).is_err() {
        warn!("Cannot add {:?} to the canvas: no such entity", entity);
        return false;
    }
    if !world
        .resource_mut::<SpriteRegistry>()
        .insert(entity, index)
    {
        warn!("{:?} is already on the canvas", entity);
        return false;
    }
    world.entity_mut(entity).insert(OnCanvas);
    debug!(
        "Added {:?} to the canvas at {:?}",
        entity,
        world.resource::<SpriteRegistry>().position(entity)
    );
    true
}

/// Take `entity` off the canvas and despawn it. Absent sprites are ignored.
pub fn remove_sprite(world: &mut World, entity: Entity) -> bool {
    if !world.resource_mut::<SpriteRegistry>().remove(entity) {
        return false;
    }
    world.despawn(entity);
    debug!("Removed {:?} from the canvas", entity);
    true
}

/// Insert every resource the game needs, keeping any already present.
pub fn init_game_resources(world: &mut World, config: &GameConfig) {
    world.init_resource::<SpriteRegistry>();
    world.init_resource::<ImageCatalog>();
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    if !world.contains_resource::<TickClock>() {
        world.insert_resource(TickClock::from_millis(config.tick_ms));
    }
    if !world.contains_resource::<GameConfig>() {
        world.insert_resource(config.clone());
    }
}

/// Set up a two-player game: resources, observers, and both heads on the
/// canvas. Returns the heads in player order.
pub fn create_game(world: &mut World, config: &GameConfig) -> [Entity; 2] {
    init_game_resources(world, config);

    world.add_observer(head_key_observer);
    world.add_observer(launch_ready_observer);
    world.add_observer(switch_debug_observer);
    world.flush();

    let heads = [
        spawn_head(world, &config.players[0]),
        spawn_head(world, &config.players[1]),
    ];
    for head in heads {
        add_sprite(world, head, None);
    }
    info!("Game created with heads {:?}", heads);
    heads
}

/// Systems that run once per frame on wall-clock time.
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_timers, ttl_system, image_load_system));
    schedule
}

/// Systems that run once per fixed tick.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(step_system);
    schedule
}

/// Advance time by `dt` seconds, run the frame systems, then every tick due.
/// Returns the number of ticks run.
pub fn run_frame(world: &mut World, frame: &mut Schedule, tick: &mut Schedule, dt: f32) -> u32 {
    update_world_time(world, dt);
    frame.run(world);

    let due = world.resource_mut::<TickClock>().advance(dt);
    for _ in 0..due {
        tick.run(world);
    }
    due
}
