//! The particle field: a fixed pool of coins integrated once per tick

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::rand::{ParticleRng, RandomSource};
use coinburst_core::{Result, Vec2};

/// Texture frame shown at `global_time_ms` for a cycle of `duration_ms`
/// split into `frame_count` frames
pub fn frame_index(global_time_ms: f64, duration_ms: f64, frame_count: u32) -> u32 {
    if frame_count == 0 {
        return 0;
    }
    let phase = global_time_ms.rem_euclid(duration_ms) / duration_ms;
    let index = (phase * frame_count as f64).floor() as u32;
    index.min(frame_count - 1)
}

/// Aggregate view of a field after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub particles: usize,
    /// Particles with some opacity inside the viewport
    pub visible: usize,
    pub mean_alpha: f32,
    pub frame: u32,
    pub respawns: u64,
}

/// A fixed-size pool of coins sharing one configuration and one random source.
///
/// Particles are never created or destroyed after construction; a coin that
/// falls past the bottom of the viewport is reset in place.
pub struct ParticleField<R: RandomSource = ParticleRng> {
    config: FieldConfig,
    particles: Vec<Particle>,
    rng: R,
    frame: u32,
    respawns: u64,
}

impl ParticleField<ParticleRng> {
    /// Build a field driven by the built-in xorshift generator
    pub fn with_seed(config: FieldConfig, seed: u32) -> Result<Self> {
        Self::new(config, ParticleRng::new(seed))
    }
}

impl<R: RandomSource> ParticleField<R> {
    /// Validate the configuration and seed every particle at the spawn point
    pub fn new(config: FieldConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&config, &mut rng))
            .collect::<Vec<_>>();
        log::debug!(
            "seeded {} particle(s) at ({}, {})",
            particles.len(),
            config.start_x,
            config.start_y
        );
        Ok(Self {
            config,
            particles,
            rng,
            frame: 0,
            respawns: 0,
        })
    }

    /// Advance every particle one step and return the shared frame index.
    ///
    /// Particles that end the step below `screen_height` plus the respawn
    /// margin are reset before this returns.
    pub fn tick(&mut self, global_time_ms: f64, screen_height: f32) -> u32 {
        self.frame = self.frame_index(global_time_ms);
        let boundary = screen_height + self.config.respawn_margin;

        for particle in &mut self.particles {
            particle.integrate(&self.config);
            if particle.is_below(boundary) {
                particle.respawn(&self.config, &mut self.rng);
                self.respawns += 1;
            }
        }
        self.frame
    }

    /// Reset one particle to the spawn point with fresh motion
    pub fn reset(&mut self, index: usize) {
        if let Some(particle) = self.particles.get_mut(index) {
            particle.respawn(&self.config, &mut self.rng);
            self.respawns += 1;
        }
    }

    /// Frame index for `global_time_ms` under this field's cycle
    pub fn frame_index(&self, global_time_ms: f64) -> u32 {
        frame_index(
            global_time_ms,
            self.config.duration_ms,
            self.config.frame_count,
        )
    }

    /// Uniform draw in [min, max) from the field's own random source
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.range(min, max)
    }

    pub fn summary(&self, viewport: Vec2) -> FieldSummary {
        let visible = self
            .particles
            .iter()
            .filter(|p| {
                p.alpha > 0.0
                    && (0.0..=viewport.x).contains(&p.position.x)
                    && (0.0..=viewport.y).contains(&p.position.y)
            })
            .count();
        let mean_alpha = if self.particles.is_empty() {
            0.0
        } else {
            self.particles.iter().map(|p| p.alpha).sum::<f32>() / self.particles.len() as f32
        };
        FieldSummary {
            particles: self.particles.len(),
            visible,
            mean_alpha,
            frame: self.frame,
            respawns: self.respawns,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Frame index computed by the latest tick
    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// Total resets since construction
    pub fn respawn_count(&self) -> u64 {
        self.respawns
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
