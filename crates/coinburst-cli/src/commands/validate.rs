//! Configuration validation command

use anyhow::{Context, Result};
use coinburst_particles::FieldConfig;

pub fn run(file: &str) -> Result<()> {
    let config = FieldConfig::load(file).with_context(|| format!("Invalid configuration {file}"))?;

    println!("{file}: ok");
    println!("  Particles:   {}", config.particle_count);
    println!("  Cycle:       {}ms over {} frame(s)", config.duration_ms, config.frame_count);
    println!("  Spawn:       ({}, {})", config.start_x, config.start_y);
    println!(
        "  Gravity:     [{}, {}] with {:.0}% upward",
        config.min_gravity,
        config.max_gravity,
        config.upward_chance * 100.0
    );
    println!("  Textures:    {}000..", config.asset_prefix);
    Ok(())
}
