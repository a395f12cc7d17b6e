//! Simulate command: runs the coin effect through the scheduler headlessly

use anyhow::{Context, Result};
use coinburst_core::Vec2;
use coinburst_particles::{CoinEffect, FieldConfig, ParticleField, ParticleRng, TextureCache};
use coinburst_runtime::{EffectScheduler, FrameClock, RunConfig};

/// Texture size registered for every frame of the headless cache
const FRAME_SIZE: f32 = 100.0;

pub struct SimulateArgs {
    pub config: Option<String>,
    pub preset: String,
    pub frames: u64,
    pub run_config: Option<String>,
    pub fps: Option<f64>,
    pub seed: Option<u32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub report_every: u64,
    pub realtime: bool,
}

/// Run settings from `--run-config` (or the defaults) with any command-line
/// overrides applied on top
fn resolve_run_config(args: &SimulateArgs) -> Result<RunConfig> {
    let mut run_config = match &args.run_config {
        Some(path) => {
            log::info!("loading run settings from {path}");
            RunConfig::load(path)
                .with_context(|| format!("Failed to load run settings {path}"))?
        }
        None => RunConfig::default(),
    };
    if let Some(width) = args.width {
        run_config.width = width;
    }
    if let Some(height) = args.height {
        run_config.height = height;
    }
    if let Some(fps) = args.fps {
        run_config.fps = fps;
    }
    run_config.validate().context("Invalid run settings")?;
    Ok(run_config)
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let run_config = resolve_run_config(&args)?;
    let field_config = match &args.config {
        Some(path) => {
            log::info!("loading field configuration from {path}");
            FieldConfig::load(path)
                .with_context(|| format!("Failed to load configuration {path}"))?
        }
        None => {
            log::info!("using preset '{}'", args.preset);
            FieldConfig::preset(&args.preset)?
        }
    };

    let rng = match args.seed {
        Some(seed) => ParticleRng::new(seed),
        None => {
            log::debug!("no seed given, seeding from the system clock");
            ParticleRng::from_time()
        }
    };
    let textures = TextureCache::with_frames(
        &field_config.asset_prefix,
        field_config.frame_count,
        FRAME_SIZE,
        FRAME_SIZE,
    );
    let field = ParticleField::new(field_config, rng).context("Failed to build particle field")?;
    let effect = CoinEffect::new(
        field,
        textures,
        Vec2::new(run_config.width, run_config.height),
    );

    let mut scheduler = EffectScheduler::new();
    scheduler.add_effect(effect)?;

    let mut clock = if args.realtime {
        FrameClock::wall(run_config.fps)
    } else {
        FrameClock::simulated(run_config.fps, 0.0)
    };

    println!(
        "Simulating {} frame(s) at {} fps in a {}x{} viewport",
        args.frames, run_config.fps, run_config.width, run_config.height
    );
    println!(
        "{:>8}  {:>9}  {:>7}  {:>10}  {:>5}  {:>8}",
        "frame", "time(ms)", "visible", "mean alpha", "tex", "respawns"
    );

    let report_every = args.report_every.max(1);
    let mut started_at = None;
    for frame in 1..=args.frames {
        if args.realtime {
            std::thread::sleep(clock.time_until_next_frame());
        }
        let now = clock.tick();
        let origin = *started_at.get_or_insert(now);
        scheduler.tick(now)?;

        if frame % report_every == 0 || frame == args.frames {
            let summary = scheduler.effects()[0].summary();
            println!(
                "{:>8}  {:>9.1}  {:>7}  {:>10.3}  {:>5}  {:>8}",
                frame,
                now - origin,
                format!("{}/{}", summary.visible, summary.particles),
                summary.mean_alpha,
                summary.frame,
                summary.respawns
            );
        }
    }

    Ok(())
}
