//! Game configuration resource.
//!
//! Manages window, tick and player settings loaded from an INI configuration
//! file. Every value has a default matching the stock two-player setup, so a
//! missing file or a missing entry simply keeps the default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 400
//! target_fps = 60
//! title = Head Launch
//!
//! [game]
//! tick_ms = 50
//! asset_dir = ./assets
//!
//! [player1]
//! forward = ArrowUp
//! backward = ArrowDown
//! left_turn = ArrowLeft
//! right_turn = ArrowRight
//! launch = m
//! x = 750
//! y = 200
//! angle_degrees = 180
//! idle_image = head1a.png
//! launching_image = head1b.png
//! projectile_image = basketball.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::KeyboardKey;
use std::path::PathBuf;
use thiserror::Error;

use crate::components::head::KeyBindings;
use crate::resources::input::{key_from_name, key_name};
use crate::resources::tickclock::DEFAULT_TICK_MS;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 400;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Head Launch";
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const PLAYER_SECTIONS: [&str; 2] = ["player1", "player2"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {reason}")]
    Read { path: PathBuf, reason: String },
    #[error("failed to write config file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("[{section}] {field}: unknown key name {name:?}")]
    UnknownKey {
        section: String,
        field: &'static str,
        name: String,
    },
    #[error("[{section}] {field}: {reason}")]
    InvalidValue {
        section: String,
        field: &'static str,
        reason: String,
    },
}

/// Starting pose, images and key bindings of one player's head.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub bindings: KeyBindings,
    pub x: f32,
    pub y: f32,
    /// Starting heading in radians.
    pub angle: f32,
    pub idle_image: String,
    pub launching_image: String,
    pub projectile_image: String,
}

impl PlayerConfig {
    /// Arrow keys plus `m`, on the right side facing left.
    pub fn player_one() -> Self {
        Self {
            bindings: KeyBindings {
                forward: KeyboardKey::KEY_UP,
                backward: KeyboardKey::KEY_DOWN,
                left_turn: KeyboardKey::KEY_LEFT,
                right_turn: KeyboardKey::KEY_RIGHT,
                launch: KeyboardKey::KEY_M,
            },
            x: 750.0,
            y: 200.0,
            angle: std::f32::consts::PI,
            idle_image: "head1a.png".into(),
            launching_image: "head1b.png".into(),
            projectile_image: "basketball.png".into(),
        }
    }

    /// WASD plus `q`, on the left side facing right.
    pub fn player_two() -> Self {
        Self {
            bindings: KeyBindings {
                forward: KeyboardKey::KEY_W,
                backward: KeyboardKey::KEY_S,
                left_turn: KeyboardKey::KEY_A,
                right_turn: KeyboardKey::KEY_D,
                launch: KeyboardKey::KEY_Q,
            },
            x: 50.0,
            y: 200.0,
            angle: 0.0,
            idle_image: "head2a.png".into(),
            launching_image: "head2b.png".into(),
            projectile_image: "laptop.png".into(),
        }
    }

    fn load_section(&mut self, ini: &Ini, section: &str) -> Result<(), ConfigError> {
        let key = |field: &'static str, current: KeyboardKey| -> Result<KeyboardKey, ConfigError> {
            match ini.get(section, field) {
                Some(name) => key_from_name(name.trim()).ok_or_else(|| ConfigError::UnknownKey {
                    section: section.to_string(),
                    field,
                    name,
                }),
                None => Ok(current),
            }
        };
        let b = self.bindings;
        self.bindings = KeyBindings {
            forward: key("forward", b.forward)?,
            backward: key("backward", b.backward)?,
            left_turn: key("left_turn", b.left_turn)?,
            right_turn: key("right_turn", b.right_turn)?,
            launch: key("launch", b.launch)?,
        };

        if let Some(x) = get_float(ini, section, "x")? {
            self.x = x;
        }
        if let Some(y) = get_float(ini, section, "y")? {
            self.y = y;
        }
        if let Some(deg) = get_float(ini, section, "angle_degrees")? {
            self.angle = deg.to_radians();
        }
        if let Some(img) = ini.get(section, "idle_image") {
            self.idle_image = img;
        }
        if let Some(img) = ini.get(section, "launching_image") {
            self.launching_image = img;
        }
        if let Some(img) = ini.get(section, "projectile_image") {
            self.projectile_image = img;
        }
        Ok(())
    }

    fn save_section(&self, ini: &mut Ini, section: &str) {
        let mut set_key = |field: &str, key: KeyboardKey| {
            ini.set(section, field, key_name(key).map(str::to_string));
        };
        set_key("forward", self.bindings.forward);
        set_key("backward", self.bindings.backward);
        set_key("left_turn", self.bindings.left_turn);
        set_key("right_turn", self.bindings.right_turn);
        set_key("launch", self.bindings.launch);
        ini.set(section, "x", Some(self.x.to_string()));
        ini.set(section, "y", Some(self.y.to_string()));
        ini.set(
            section,
            "angle_degrees",
            Some(self.angle.to_degrees().to_string()),
        );
        ini.set(section, "idle_image", Some(self.idle_image.clone()));
        ini.set(section, "launching_image", Some(self.launching_image.clone()));
        ini.set(
            section,
            "projectile_image",
            Some(self.projectile_image.clone()),
        );
    }
}

fn get_float(ini: &Ini, section: &str, field: &'static str) -> Result<Option<f32>, ConfigError> {
    ini.getfloat(section, field)
        .map(|v| v.map(|v| v as f32))
        .map_err(|reason| ConfigError::InvalidValue {
            section: section.to_string(),
            field,
            reason,
        })
}

fn get_uint(ini: &Ini, section: &str, field: &'static str) -> Result<Option<u32>, ConfigError> {
    let value = ini
        .getuint(section, field)
        .map_err(|reason| ConfigError::InvalidValue {
            section: section.to_string(),
            field,
            reason,
        })?;
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| ConfigError::InvalidValue {
                section: section.to_string(),
                field,
                reason: format!("{v} is out of range"),
            })
        })
        .transpose()
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target render frames per second.
    pub target_fps: u32,
    pub title: String,
    /// Sprite tick period in milliseconds.
    pub tick_ms: u32,
    /// Directory image keys are resolved against.
    pub asset_dir: PathBuf,
    /// Player one then player two.
    pub players: [PlayerConfig; 2],
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            tick_ms: DEFAULT_TICK_MS,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            players: [PlayerConfig::player_one(), PlayerConfig::player_two()],
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new_cs();
        ini.load(&self.config_path)
            .map_err(|reason| ConfigError::Read {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&ini)?;

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, tick={}ms, assets={:?}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tick_ms,
            self.asset_dir
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new_cs();
        ini.read(text.to_string())
            .map_err(|reason| ConfigError::Read {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&ini)
    }

    fn apply(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        // [window] section
        if let Some(width) = get_uint(ini, "window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = get_uint(ini, "window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = get_uint(ini, "window", "target_fps")? {
            self.target_fps = fps;
        }
        if let Some(title) = ini.get("window", "title") {
            self.title = title;
        }

        // [game] section
        if let Some(tick_ms) = get_uint(ini, "game", "tick_ms")? {
            if tick_ms == 0 {
                return Err(ConfigError::InvalidValue {
                    section: "game".into(),
                    field: "tick_ms",
                    reason: "must be greater than zero".into(),
                });
            }
            self.tick_ms = tick_ms;
        }
        if let Some(dir) = ini.get("game", "asset_dir") {
            self.asset_dir = PathBuf::from(dir);
        }

        for (player, section) in self.players.iter_mut().zip(PLAYER_SECTIONS) {
            player.load_section(ini, section)?;
        }
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new_cs();

        // [window] section
        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));
        ini.set("window", "title", Some(self.title.clone()));

        // [game] section
        ini.set("game", "tick_ms", Some(self.tick_ms.to_string()));
        ini.set(
            "game",
            "asset_dir",
            Some(self.asset_dir.display().to_string()),
        );

        for (player, section) in self.players.iter().zip(PLAYER_SECTIONS) {
            player.save_section(&mut ini, section);
        }
        ini
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|source| ConfigError::Write {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    /// Render configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }
}
