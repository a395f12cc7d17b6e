//! Print a preset configuration

use anyhow::{Context, Result};
use coinburst_particles::FieldConfig;

pub fn run(preset: &str) -> Result<()> {
    let config = FieldConfig::preset(preset)?;
    let text = config
        .to_toml_string()
        .context("Failed to serialize configuration")?;
    println!("# coinburst preset: {preset}");
    print!("{text}");
    Ok(())
}
