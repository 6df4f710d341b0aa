//! Head Launch main entry point.
//!
//! A two-player arcade game: two heads move and turn under keyboard control and
//! launch projectiles at each other. Built on:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entities, resources, schedules and observers
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` (defaults when absent)
//! 2. Open the window and create the game: two heads on the canvas
//! 3. Each frame:
//!    - poll key edges and trigger key events
//!    - load requested images, resolve sprite sizes, run timers and lifetimes
//!    - run every fixed 50 ms tick that is due (sprite motion)
//!    - draw the canvas in registry order
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use headlaunch::game::{create_game, frame_schedule, run_frame, tick_schedule};
use headlaunch::resources::gameconfig::{ConfigError, GameConfig};
use headlaunch::resources::texturestore::TextureStore;
use headlaunch::systems::imageload::{image_load_system, load_pending_textures};
use headlaunch::systems::input::update_input_state;
use headlaunch::systems::render::render_system;
use headlaunch::systems::timer::update_timers;

/// Head Launch: two heads, two keyboards' worth of keys, one screen.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = GameConfig::with_path(&cli.config);

    // Early-exit: write the stock configuration and quit (no window needed)
    if cli.write_default_config {
        if let Err(e) = config.save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    match config.load_from_file() {
        Ok(()) => {}
        Err(e @ ConfigError::Read { .. }) => warn!("{e}; using defaults"),
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);
    info!(
        "Window {}x{} at {} fps, tick every {} ms",
        config.window_width, config.window_height, config.target_fps, config.tick_ms
    );

    // --------------- ECS world + game ---------------
    let mut world = World::new();
    create_game(&mut world, &config);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut frame = frame_schedule();
    frame.add_systems(update_input_state.before(update_timers));
    frame.add_systems(load_pending_textures.before(image_load_system));
    let mut tick = tick_schedule();
    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        run_frame(&mut world, &mut frame, &mut tick, dt);
        render.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    info!("Bye");
}
