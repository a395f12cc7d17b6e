//! Timeline scheduler dispatching frames to registered effects

use crate::effect::{Effect, EffectTime};
use coinburst_core::{CoinburstError, Result};

/// Owns a set of effects laid out on a looping timeline.
///
/// The timeline length is the latest `start + duration` of any registered
/// effect. Local time wraps around it, measured from the first tick.
pub struct EffectScheduler<E: Effect = Box<dyn Effect>> {
    effects: Vec<E>,
    total_duration: f64,
    /// Global time of the first tick
    origin: Option<f64>,
}

impl<E: Effect> EffectScheduler<E> {
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
            total_duration: 0.0,
            origin: None,
        }
    }

    /// Register an effect and extend the timeline to cover its window
    pub fn add_effect(&mut self, effect: E) -> Result<()> {
        let (start, duration) = (effect.start(), effect.duration());
        if !start.is_finite() || start < 0.0 {
            return Err(CoinburstError::SchedulerError(format!(
                "effect '{}' has invalid start {start}",
                effect.name()
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(CoinburstError::SchedulerError(format!(
                "effect '{}' has invalid duration {duration}",
                effect.name()
            )));
        }

        self.total_duration = self.total_duration.max(start + duration);
        log::debug!(
            "registered effect '{}' at {start}ms for {duration}ms (timeline {}ms)",
            effect.name(),
            self.total_duration
        );
        self.effects.push(effect);
        Ok(())
    }

    /// Dispatch one frame at `global_ms`. Returns how many effects were ticked.
    pub fn tick(&mut self, global_ms: f64) -> Result<usize> {
        if self.effects.is_empty() {
            return Ok(0);
        }
        let origin = *self.origin.get_or_insert(global_ms);
        let local = (global_ms - origin).rem_euclid(self.total_duration);

        let mut dispatched = 0;
        for effect in &mut self.effects {
            let start = effect.start();
            let duration = effect.duration();
            if local < start || local > start + duration {
                continue;
            }
            let elapsed = local - start;
            effect.tick(EffectTime {
                normalized: elapsed / duration,
                elapsed,
                global: global_ms,
            })?;
            dispatched += 1;
        }
        Ok(dispatched)
    }

    /// Forget the timeline origin; the next tick restarts local time at zero
    pub fn reset_origin(&mut self) {
        self.origin = None;
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn effects(&self) -> &[E] {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut [E] {
        &mut self.effects
    }
}

impl<E: Effect> Default for EffectScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
