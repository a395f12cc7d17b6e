use coinburst_core::Vec2;
use coinburst_particles::{
    frame_index, CoinEffect, FieldConfig, ParticleField, RandomSource, TextureCache,
};
use coinburst_runtime::{EffectScheduler, FrameClock};

const HEIGHT: f32 = 450.0;

fn field(seed: u32) -> ParticleField {
    ParticleField::with_seed(FieldConfig::default(), seed).unwrap()
}

/// Constant unit draw, for fully predictable seeding
struct Fixed(f32);

impl RandomSource for Fixed {
    fn next_f32(&mut self) -> f32 {
        self.0
    }
}

#[test]
fn construction_respects_ranges() {
    let config = FieldConfig {
        particle_count: 500,
        ..Default::default()
    };
    let field = ParticleField::with_seed(config.clone(), 2024).unwrap();
    assert_eq!(field.len(), 500);

    for p in field.particles() {
        assert_eq!(p.alpha, 0.0);
        assert_eq!(p.position, config.spawn_position());
        assert!(p.scale >= config.min_size && p.scale <= config.max_size);
        assert!(p.x_velocity >= config.min_x_velocity && p.x_velocity <= config.max_x_velocity);
        assert!(p.rotation_speed >= config.min_rotation && p.rotation_speed <= config.max_rotation);
        if p.launched_upward {
            assert!(p.gravity >= config.min_gravity && p.gravity <= 0.0);
        } else {
            assert!(p.gravity >= 0.0 && p.gravity <= config.max_gravity);
        }
    }
}

#[test]
fn injected_random_source_drives_seeding() {
    // 0.5 is not below the 0.4 upward chance, so every coin falls
    let field = ParticleField::new(FieldConfig::default(), Fixed(0.5)).unwrap();
    for p in field.particles() {
        assert!(!p.launched_upward);
        assert!((p.scale - 0.25).abs() < 1e-6);
        assert!((p.gravity - 0.3).abs() < 1e-6);
        assert_eq!(p.x_velocity, 0.0);
        assert_eq!(p.rotation_speed, 0.0);
    }

    let field = ParticleField::new(FieldConfig::default(), Fixed(0.25)).unwrap();
    for p in field.particles() {
        assert!(p.launched_upward);
        assert!((p.gravity - (-2.25)).abs() < 1e-6);
    }
}

#[test]
fn alpha_never_exceeds_one_and_only_drops_on_reset() {
    let config = FieldConfig {
        fade_amount: 30.0,
        ..Default::default()
    };
    let spawn = config.spawn_position();
    let mut field = ParticleField::with_seed(config, 11).unwrap();
    let mut previous: Vec<f32> = field.particles().iter().map(|p| p.alpha).collect();
    let mut drops = 0;

    for i in 0..300 {
        field.tick(i as f64 * 16.0, HEIGHT);

        for (p, prev) in field.particles().iter().zip(&previous) {
            assert!((0.0..=1.0).contains(&p.alpha));
            if p.alpha < *prev {
                // a drop is only allowed for the coin that was just respawned
                assert_eq!(p.alpha, 0.0);
                assert_eq!(p.position, spawn);
                drops += 1;
            }
        }
        previous = field.particles().iter().map(|p| p.alpha).collect();
    }
    assert!(drops > 0);
}

#[test]
fn particle_just_past_boundary_resets_next_tick() {
    let mut field = field(3);
    let spawn = field.config().spawn_position();
    {
        let particles = field.particles_mut();
        particles[0].position = Vec2::new(120.0, HEIGHT + 0.5);
        particles[0].gravity = 0.0;
        particles[0].x_velocity = 0.0;
        particles[0].alpha = 0.8;

        particles[1].position = Vec2::new(120.0, HEIGHT - 1.0);
        particles[1].gravity = 0.0;
        particles[1].x_velocity = 0.0;
    }

    field.tick(0.0, HEIGHT);

    let reset = &field.particles()[0];
    assert_eq!(reset.position, spawn);
    assert_eq!(reset.alpha, 0.0);

    let kept = &field.particles()[1];
    assert_eq!(kept.position, Vec2::new(120.0, HEIGHT - 1.0));
    assert_eq!(field.respawn_count(), 1);
}

#[test]
fn respawn_margin_delays_reset() {
    let config = FieldConfig {
        respawn_margin: 30.0,
        ..Default::default()
    };
    let mut field = ParticleField::with_seed(config, 8).unwrap();
    field.particles_mut()[0].position.y = HEIGHT + 10.0;
    field.particles_mut()[0].gravity = 0.0;

    field.tick(0.0, HEIGHT);
    assert!((field.particles()[0].position.y - (HEIGHT + 10.0)).abs() < 1e-4);
}

#[test]
fn frame_index_is_shared_within_a_tick() {
    let config = FieldConfig {
        particle_count: 1,
        ..Default::default()
    };
    let mut field = ParticleField::with_seed(config, 1).unwrap();
    assert_eq!(field.tick(500.0, HEIGHT), 4);
    assert_eq!(field.current_frame(), 4);
    assert_eq!(frame_index(500.0, 1000.0, 9), 4);

    let mut a = self::field(10);
    let mut b = self::field(99);
    for t in [0.0, 111.0, 480.0, 999.0, 12_345.0] {
        assert_eq!(a.tick(t, HEIGHT), b.tick(t, HEIGHT));
    }
}

#[test]
fn gravity_scenarios() {
    let mut field = field(4);
    field.particles_mut()[0].gravity = 1.0;
    field.tick(0.0, 1.0e9);
    assert!((field.particles()[0].gravity - 1.07).abs() < 1e-5);

    let mut field = self::field(4);
    field.particles_mut()[0].gravity = 1.0;
    for i in 0..10 {
        field.tick(i as f64, 1.0e9);
    }
    assert!((field.particles()[0].gravity - 1.7).abs() < 1e-4);
}

#[test]
fn horizontal_velocity_scenario() {
    let mut field = field(6);
    {
        let p = &mut field.particles_mut()[0];
        p.position.x = 400.0;
        p.x_velocity = 2.0;
        p.gravity = 0.0;
    }
    for i in 0..5 {
        field.tick(i as f64 * 16.0, 1.0e9);
    }
    assert_eq!(field.particles()[0].position.x, 410.0);
    assert_eq!(field.respawn_count(), 0);
}

#[test]
fn reset_direction_follows_upward_chance() {
    let config = FieldConfig {
        particle_count: 1,
        upward_chance: 0.4,
        ..Default::default()
    };
    let mut field = ParticleField::with_seed(config, 0xC0FFEE).unwrap();

    let n = 10_000;
    let mut upward = 0;
    for _ in 0..n {
        field.reset(0);
        if field.particles()[0].gravity < 0.0 {
            upward += 1;
        }
    }
    let fraction = upward as f64 / n as f64;
    // four standard deviations of Binomial(10000, 0.4) is ~0.0196
    assert!((fraction - 0.4).abs() < 0.025, "upward fraction {fraction}");
}

#[test]
fn reset_keeps_scale_and_rotation() {
    let mut field = field(12);
    for i in 0..20 {
        field.tick(i as f64 * 16.0, 1.0e9);
    }
    let before = field.particles()[2].clone();
    field.reset(2);
    let after = &field.particles()[2];
    assert_eq!(after.scale, before.scale);
    assert_eq!(after.rotation, before.rotation);
    assert_eq!(after.alpha, 0.0);
    assert_eq!(after.position, field.config().spawn_position());
}

#[test]
fn scheduler_drives_coin_effect() {
    let config = FieldConfig::gold_coins();
    let textures =
        TextureCache::with_frames(&config.asset_prefix, config.frame_count, 100.0, 100.0);
    let field = ParticleField::with_seed(config, 42).unwrap();
    let effect = CoinEffect::new(field, textures, Vec2::new(800.0, HEIGHT));

    let mut scheduler = EffectScheduler::new();
    scheduler.add_effect(effect).unwrap();

    let mut clock = FrameClock::simulated(60.0, 1_000_000.0);
    for _ in 0..600 {
        let now = clock.tick();
        assert_eq!(scheduler.tick(now).unwrap(), 1);
    }

    let effect = &scheduler.effects()[0];
    let summary = effect.summary();
    assert_eq!(summary.particles, 20);
    assert!(summary.respawns > 0);
    assert!((0.0..=1.0).contains(&summary.mean_alpha));
    for (sprite, particle) in effect.drawables().iter().zip(effect.field().particles()) {
        assert_eq!(sprite.position, particle.position);
        assert!(sprite.texture.is_some());
    }
}
