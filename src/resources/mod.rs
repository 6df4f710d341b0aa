//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window, tick and player settings from `config.ini`
//! - `imagecatalog` – requested, loaded and failed images with natural sizes
//! - `input` – key-name table and global input settings
//! - `registry` – ordered sprite collection, the draw order
//! - `texturestore` – loaded textures keyed by image key (non-send)
//! - `tickclock` – fixed-period tick accumulator
//! - `worldtime` – wall-clock time and frame delta
pub mod debugmode;
pub mod gameconfig;
pub mod imagecatalog;
pub mod input;
pub mod registry;
pub mod texturestore;
pub mod tickclock;
pub mod worldtime;
