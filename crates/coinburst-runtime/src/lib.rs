//! Coinburst Runtime - Frame loop infrastructure
//!
//! Provides the pieces that drive an effect from the outside:
//! - `FrameClock` - fixed-rate frame timestamps, wall-clock or simulated
//! - `Effect` / `EffectTime` - the contract a timed effect implements
//! - `EffectScheduler` - dispatches the time triple to every active effect
//! - `RunConfig` - viewport and frame-rate settings for a run

mod clock;
mod config;
mod effect;
mod scheduler;

pub use clock::FrameClock;
pub use config::RunConfig;
pub use effect::{Effect, EffectTime};
pub use scheduler::EffectScheduler;
