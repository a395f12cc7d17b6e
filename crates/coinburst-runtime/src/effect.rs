//! Timed effect trait

use coinburst_core::Result;

/// Time information handed to an effect on each dispatched frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTime {
    /// Progress through the effect window in [0, 1]
    pub normalized: f64,
    /// Milliseconds elapsed since the effect window opened
    pub elapsed: f64,
    /// Raw global clock time in milliseconds
    pub global: f64,
}

/// An effect placed on the scheduler's timeline
///
/// The scheduler calls `tick` once per frame while the local timeline time
/// lies within `[start, start + duration]`. Effects never read the clock
/// themselves.
pub trait Effect {
    /// Offset of the effect window within the timeline, in milliseconds
    fn start(&self) -> f64;

    /// Length of the effect window in milliseconds
    fn duration(&self) -> f64;

    /// Advance the effect by one frame
    fn tick(&mut self, time: EffectTime) -> Result<()>;

    /// Human-readable name for this effect
    fn name(&self) -> &str;
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn start(&self) -> f64 {
        (**self).start()
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn tick(&mut self, time: EffectTime) -> Result<()> {
        (**self).tick(time)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
