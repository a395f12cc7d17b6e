//! Coinburst CLI - run and inspect the coin burst effect headlessly

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, simulate, validate};

#[derive(Parser)]
#[command(name = "coinburst")]
#[command(about = "Headless driver for the coin burst particle effect", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the effect through the scheduler and print periodic summaries
    Simulate {
        /// Path to a field configuration file (TOML)
        #[arg(long, conflicts_with = "preset")]
        config: Option<String>,

        /// Built-in configuration to use
        #[arg(long, default_value = "gold-coins", value_parser = parse_preset)]
        preset: String,

        /// Number of frames to run
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Path to run settings (viewport size, frame rate) as TOML
        #[arg(long)]
        run_config: Option<String>,

        /// Frames per second (overrides the run settings)
        #[arg(long)]
        fps: Option<f64>,

        /// Random seed (defaults to the system clock)
        #[arg(long)]
        seed: Option<u32>,

        /// Viewport width in pixels (overrides the run settings)
        #[arg(long)]
        width: Option<f32>,

        /// Viewport height in pixels (overrides the run settings)
        #[arg(long)]
        height: Option<f32>,

        /// Print a summary every N frames
        #[arg(long, default_value = "60")]
        report_every: u64,

        /// Pace frames against the wall clock instead of simulated time
        #[arg(long)]
        realtime: bool,
    },

    /// Print a preset configuration as TOML
    Config {
        /// Preset name
        #[arg(long, default_value = "gold-coins", value_parser = parse_preset)]
        preset: String,
    },

    /// Load and validate a configuration file
    Validate {
        /// Path to a field configuration file (TOML)
        file: String,
    },
}

fn parse_preset(s: &str) -> Result<String, String> {
    if coinburst_particles::PRESET_NAMES.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown preset '{}'; valid values: {}",
            s,
            coinburst_particles::PRESET_NAMES.join(", ")
        ))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            preset,
            frames,
            run_config,
            fps,
            seed,
            width,
            height,
            report_every,
            realtime,
        } => simulate::run(simulate::SimulateArgs {
            config,
            preset,
            frames,
            run_config,
            fps,
            seed,
            width,
            height,
            report_every,
            realtime,
        }),
        Commands::Config { preset } => config::run(&preset),
        Commands::Validate { file } => validate::run(&file),
    }
}
