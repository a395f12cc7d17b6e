//! Particle simulation state, kept apart from the drawable it is shown with

use crate::config::FieldConfig;
use crate::rand::RandomSource;
use crate::sprite::Drawable;
use coinburst_core::Vec2;

/// Simulation state of one coin
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Drawn once at creation, never re-applied
    pub scale: f32,
    pub alpha: f32,
    /// Accumulated angle in radians
    pub rotation: f32,
    pub rotation_speed: f32,
    pub x_velocity: f32,
    /// Signed vertical drive; negative moves the coin up
    pub gravity: f32,
    /// Whether the last launch drew from the upward gravity range
    pub launched_upward: bool,
}

impl Particle {
    /// A fresh, fully transparent coin at the spawn point
    pub fn spawn(config: &FieldConfig, rng: &mut impl RandomSource) -> Self {
        let scale = rng.range(config.min_size, config.max_size);
        let mut particle = Self {
            position: config.spawn_position(),
            scale,
            alpha: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            x_velocity: 0.0,
            gravity: 0.0,
            launched_upward: false,
        };
        particle.launch(config, rng);
        particle
    }

    /// Return to the spawn point with fresh motion. Scale and accumulated
    /// rotation carry over.
    pub fn respawn(&mut self, config: &FieldConfig, rng: &mut impl RandomSource) {
        self.position = config.spawn_position();
        self.alpha = 0.0;
        self.launch(config, rng);
    }

    fn launch(&mut self, config: &FieldConfig, rng: &mut impl RandomSource) {
        self.launched_upward = rng.chance(config.upward_chance);
        self.gravity = if self.launched_upward {
            rng.range(config.min_gravity, 0.0)
        } else {
            rng.range(0.0, config.max_gravity)
        };
        self.x_velocity = rng.range(config.min_x_velocity, config.max_x_velocity);
        self.rotation_speed = rng.range(config.min_rotation, config.max_rotation);
    }

    /// Advance one tick: fade in, move, spin, then accelerate
    pub fn integrate(&mut self, config: &FieldConfig) {
        self.alpha = (self.alpha + config.fade_step()).min(1.0);
        self.position.x += self.x_velocity;
        self.position.y += self.gravity * config.gravity_multiplier;
        self.rotation += self.rotation_speed / config.rotation_damping;
        self.gravity += config.gravity_acceleration;
    }

    /// True once the coin has dropped past `boundary`
    pub fn is_below(&self, boundary: f32) -> bool {
        self.position.y > boundary
    }

    /// Initial presentation: centre pivot from the drawable's size, fixed scale
    pub fn bind<D: Drawable>(&self, drawable: &mut D) {
        let pivot = drawable.size() * 0.5;
        drawable.set_pivot(pivot);
        drawable.set_scale(Vec2::splat(self.scale));
        self.apply(drawable);
    }

    /// Per-tick presentation: only position, alpha and rotation change
    pub fn apply<D: Drawable>(&self, drawable: &mut D) {
        drawable.set_position(self.position);
        drawable.set_alpha(self.alpha);
        drawable.set_rotation(self.rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::ParticleRng;
    use crate::sprite::{Sprite, TextureHandle};

    fn still_particle(gravity: f32, x_velocity: f32) -> Particle {
        Particle {
            position: Vec2::new(400.0, 225.0),
            scale: 0.2,
            alpha: 0.0,
            rotation: 0.0,
            rotation_speed: 0.25,
            x_velocity,
            gravity,
            launched_upward: false,
        }
    }

    #[test]
    fn spawn_within_ranges() {
        let config = FieldConfig::default();
        let mut rng = ParticleRng::new(42);
        for _ in 0..500 {
            let p = Particle::spawn(&config, &mut rng);
            assert_eq!(p.alpha, 0.0);
            assert_eq!(p.rotation, 0.0);
            assert_eq!(p.position, config.spawn_position());
            assert!(p.scale >= config.min_size && p.scale < config.max_size);
            assert!(p.x_velocity >= config.min_x_velocity && p.x_velocity < config.max_x_velocity);
            assert!(p.rotation_speed >= config.min_rotation && p.rotation_speed < config.max_rotation);
            if p.launched_upward {
                assert!(p.gravity >= config.min_gravity && p.gravity <= 0.0);
            } else {
                assert!(p.gravity >= 0.0 && p.gravity < config.max_gravity);
            }
        }
    }

    #[test]
    fn gravity_accelerates_each_tick() {
        let config = FieldConfig::default();
        let mut p = still_particle(1.0, 0.0);
        p.integrate(&config);
        assert!((p.gravity - 1.07).abs() < 1e-5);

        let mut p = still_particle(1.0, 0.0);
        for _ in 0..10 {
            p.integrate(&config);
        }
        assert!((p.gravity - 1.7).abs() < 1e-4);
    }

    #[test]
    fn moves_by_velocity_and_scaled_gravity() {
        let config = FieldConfig::default();
        let mut p = still_particle(-2.0, 2.0);
        p.integrate(&config);
        assert_eq!(p.position.x, 402.0);
        assert!((p.position.y - (225.0 - 7.0)).abs() < 1e-4);
        assert!((p.rotation - 0.01).abs() < 1e-6);
    }

    #[test]
    fn alpha_clamps_at_one() {
        let config = FieldConfig {
            fade_amount: 75.0,
            ..Default::default()
        };
        let mut p = still_particle(0.0, 0.0);
        p.integrate(&config);
        assert!((p.alpha - 0.75).abs() < 1e-6);
        p.integrate(&config);
        assert_eq!(p.alpha, 1.0);
        p.integrate(&config);
        assert_eq!(p.alpha, 1.0);
    }

    #[test]
    fn respawn_keeps_scale_and_rotation() {
        let config = FieldConfig::default();
        let mut rng = ParticleRng::new(9);
        let mut p = still_particle(0.3, 1.0);
        for _ in 0..5 {
            p.integrate(&config);
        }
        let (scale, rotation) = (p.scale, p.rotation);

        p.respawn(&config, &mut rng);
        assert_eq!(p.position, config.spawn_position());
        assert_eq!(p.alpha, 0.0);
        assert_eq!(p.scale, scale);
        assert_eq!(p.rotation, rotation);
    }

    #[test]
    fn bind_centres_pivot_and_scales() {
        let mut sprite = Sprite::new(Some(TextureHandle::new(0, 64.0, 32.0)));
        let p = still_particle(0.0, 0.0);
        p.bind(&mut sprite);
        assert_eq!(sprite.pivot, Vec2::new(32.0, 16.0));
        assert_eq!(sprite.scale, Vec2::splat(0.2));
        assert_eq!(sprite.position, p.position);
        assert_eq!(sprite.alpha, 0.0);
    }
}
