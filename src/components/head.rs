//! Player-controlled head component and its key bindings.
//!
//! A head owns two image variants (idle and launching), the image its
//! projectiles use, a launch cooldown flag and a [`KeyBindings`] table mapping
//! five keys to [`HeadAction`]s. Key events are dispatched against that table by
//! [`crate::systems::head::head_key_observer`].

use bevy_ecs::prelude::Component;
use raylib::prelude::KeyboardKey;

/// Fixed draw width of every head, in pixels.
pub const HEAD_WIDTH: f32 = 60.0;
/// Fixed draw height of every head, in pixels.
pub const HEAD_HEIGHT: f32 = 75.0;
/// Seconds a head must wait after a launch before it can launch again.
pub const LAUNCH_COOLDOWN_SECS: f32 = 1.0;

/// Logical actions a head reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadAction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Launch,
}

/// Key-to-action mapping for one head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBindings {
    pub forward: KeyboardKey,
    pub backward: KeyboardKey,
    pub left_turn: KeyboardKey,
    pub right_turn: KeyboardKey,
    pub launch: KeyboardKey,
}

impl KeyBindings {
    /// The bindings as a lookup table, checked in this order.
    pub fn table(&self) -> [(KeyboardKey, HeadAction); 5] {
        [
            (self.forward, HeadAction::Forward),
            (self.backward, HeadAction::Backward),
            (self.right_turn, HeadAction::TurnRight),
            (self.left_turn, HeadAction::TurnLeft),
            (self.launch, HeadAction::Launch),
        ]
    }

    /// Action bound to `key`, if any. The first matching entry wins.
    pub fn action_for(&self, key: KeyboardKey) -> Option<HeadAction> {
        self.table()
            .into_iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| action)
    }

    /// All keys this head listens to.
    pub fn keys(&self) -> [KeyboardKey; 5] {
        self.table().map(|(key, _)| key)
    }
}

/// Player head behavior.
#[derive(Component, Clone, Debug)]
pub struct Head {
    pub idle_tex: String,
    pub launching_tex: String,
    pub projectile_tex: String,
    pub bindings: KeyBindings,
    /// Cleared on launch, set again when the cooldown timer fires.
    pub can_launch: bool,
    /// Launch key is down; another launch needs a release first.
    pub launch_held: bool,
}

impl Head {
    pub fn new(
        idle_tex: impl Into<String>,
        launching_tex: impl Into<String>,
        projectile_tex: impl Into<String>,
        bindings: KeyBindings,
    ) -> Self {
        Self {
            idle_tex: idle_tex.into(),
            launching_tex: launching_tex.into(),
            projectile_tex: projectile_tex.into(),
            bindings,
            can_launch: true,
            launch_held: false,
        }
    }
}
