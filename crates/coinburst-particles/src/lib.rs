//! Coinburst Particles - the coin fountain simulation
//!
//! Provides a fixed pool of coin particles with:
//! - Closed-form per-tick integration of position, gravity, rotation and fade
//! - In-place respawn when a coin drops below the viewport
//! - A texture-frame cycle shared by every coin in the field
//! - An injectable random source for reproducible seeding
//! - `CoinEffect`, which pushes the simulation into host drawables

pub mod config;
pub mod effect;
pub mod field;
pub mod particle;
pub mod rand;
pub mod sprite;

pub use config::{FieldConfig, PRESET_NAMES};
pub use effect::CoinEffect;
pub use field::{frame_index, FieldSummary, ParticleField};
pub use particle::Particle;
pub use rand::{ParticleRng, RandomSource};
pub use sprite::{frame_texture_name, Drawable, Sprite, TextureCache, TextureHandle};
