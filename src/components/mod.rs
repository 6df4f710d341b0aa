//! ECS components for sprites.
//!
//! A sprite is an entity with a [`mapposition::MapPosition`], a
//! [`heading::Heading`], a [`motion::Motion`] and a [`sprite::Sprite`] image.
//! Behavior comes from optional extra components rather than subtypes:
//! [`head::Head`] for player control, [`projectile::Projectile`] plus
//! [`ttl::Ttl`] for launched projectiles.
//!
//! Submodules overview:
//! - [`head`] – player head behavior, key bindings and the action table
//! - [`heading`] – facing angle and unit direction
//! - [`mapposition`] – position (pivot) on the canvas
//! - [`motion`] – optional move and rotate speeds
//! - [`oncanvas`] – back-reference marker for registered sprites
//! - [`projectile`] – marker for launched projectiles
//! - [`sprite`] – image key, size and loaded flag
//! - [`timer`] – countdown timer that triggers an event when finished
//! - [`ttl`] – time-to-live that removes the sprite

pub mod head;
pub mod heading;
pub mod mapposition;
pub mod motion;
pub mod oncanvas;
pub mod projectile;
pub mod sprite;
pub mod timer;
pub mod ttl;
