//! Field configuration (parsed from TOML) and validation

use coinburst_core::{CoinburstError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names accepted by [`FieldConfig::preset`]
pub const PRESET_NAMES: &[&str] = &["gold-coins", "simple-burst"];

/// Largest frame count whose index still fits the three-digit texture suffix
pub const MAX_FRAME_COUNT: u32 = 1000;

/// Tunable constants for one coin field. Immutable once the field is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of coin particles in the field
    pub particle_count: usize,
    /// Length of one texture-frame cycle in milliseconds
    pub duration_ms: f64,
    pub start_x: f32,
    pub start_y: f32,
    /// Probability that a (re)spawned coin is launched upward
    pub upward_chance: f32,
    /// Lower bound of the upward gravity draw, must be <= 0
    pub min_gravity: f32,
    /// Upper bound of the downward gravity draw, must be >= 0
    pub max_gravity: f32,
    /// Added to every particle's gravity each tick
    pub gravity_acceleration: f32,
    /// Scales gravity into vertical pixels per tick
    pub gravity_multiplier: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Rotation speed range, radians per tick before damping
    pub min_rotation: f32,
    pub max_rotation: f32,
    pub rotation_damping: f32,
    pub min_x_velocity: f32,
    pub max_x_velocity: f32,
    /// Alpha gained per tick is `fade_amount / fade_divider`
    pub fade_amount: f32,
    pub fade_divider: f32,
    /// Number of texture frames in the spin cycle
    pub frame_count: u32,
    /// Texture name prefix; frame names are `<prefix><index:03>`
    pub asset_prefix: String,
    /// Extra distance below the viewport before a coin respawns
    pub respawn_margin: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            duration_ms: 1000.0,
            start_x: 400.0,
            start_y: 225.0,
            upward_chance: 0.4,
            min_gravity: -3.0,
            max_gravity: 0.6,
            gravity_acceleration: 0.07,
            gravity_multiplier: 3.5,
            min_size: 0.15,
            max_size: 0.35,
            min_rotation: -0.4,
            max_rotation: 0.4,
            rotation_damping: 25.0,
            min_x_velocity: -7.0,
            max_x_velocity: 7.0,
            fade_amount: 10.0,
            fade_divider: 100.0,
            frame_count: 9,
            asset_prefix: "CoinsGold".to_string(),
            respawn_margin: 0.0,
        }
    }
}

impl FieldConfig {
    /// The gold coin fountain: nine spin frames and a 40% upward launch chance
    pub fn gold_coins() -> Self {
        Self::default()
    }

    /// The earlier cut of the effect: fixed 40% launch split, eight spin frames,
    /// a softer upward kick and a short margin below the viewport
    pub fn simple_burst() -> Self {
        Self {
            upward_chance: 0.4,
            min_gravity: -2.5,
            max_gravity: 0.5,
            gravity_multiplier: 3.0,
            frame_count: 8,
            respawn_margin: 20.0,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "gold-coins" => Ok(Self::gold_coins()),
            "simple-burst" => Ok(Self::simple_burst()),
            _ => Err(CoinburstError::UnknownPreset {
                value: name.to_string(),
                allowed: PRESET_NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    /// Parse and validate a configuration from TOML text. Missing keys keep
    /// their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Alpha gained per tick
    pub fn fade_step(&self) -> f32 {
        self.fade_amount / self.fade_divider
    }

    /// Reject configurations that would produce inverted ranges, a division
    /// by zero, or a frame index that cannot be computed.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() {
            return Err(non_finite("duration_ms", self.duration_ms));
        }
        let scalars = [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("upward_chance", self.upward_chance),
            ("min_gravity", self.min_gravity),
            ("max_gravity", self.max_gravity),
            ("gravity_acceleration", self.gravity_acceleration),
            ("gravity_multiplier", self.gravity_multiplier),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_rotation", self.min_rotation),
            ("max_rotation", self.max_rotation),
            ("rotation_damping", self.rotation_damping),
            ("min_x_velocity", self.min_x_velocity),
            ("max_x_velocity", self.max_x_velocity),
            ("fade_amount", self.fade_amount),
            ("fade_divider", self.fade_divider),
            ("respawn_margin", self.respawn_margin),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(non_finite(field, value as f64));
            }
        }

        if self.duration_ms <= 0.0 {
            return Err(CoinburstError::InvalidConfig(format!(
                "duration_ms must be positive, got {}",
                self.duration_ms
            )));
        }
        if self.frame_count == 0 || self.frame_count > MAX_FRAME_COUNT {
            return Err(CoinburstError::ValueOutOfRange {
                field: "frame_count".to_string(),
                min: 1.0,
                max: MAX_FRAME_COUNT as f64,
                value: self.frame_count as f64,
            });
        }
        if !(0.0..=1.0).contains(&self.upward_chance) {
            return Err(CoinburstError::ValueOutOfRange {
                field: "upward_chance".to_string(),
                min: 0.0,
                max: 1.0,
                value: self.upward_chance as f64,
            });
        }
        if self.min_gravity > 0.0 {
            return Err(CoinburstError::InvalidConfig(format!(
                "min_gravity bounds the upward draw and must be <= 0, got {}",
                self.min_gravity
            )));
        }
        if self.max_gravity < 0.0 {
            return Err(CoinburstError::InvalidConfig(format!(
                "max_gravity bounds the downward draw and must be >= 0, got {}",
                self.max_gravity
            )));
        }
        if self.min_size < 0.0 {
            return Err(CoinburstError::InvalidConfig(format!(
                "min_size must not be negative, got {}",
                self.min_size
            )));
        }
        check_range("size", self.min_size, self.max_size)?;
        check_range("rotation", self.min_rotation, self.max_rotation)?;
        check_range("x_velocity", self.min_x_velocity, self.max_x_velocity)?;

        if self.rotation_damping == 0.0 {
            return Err(CoinburstError::InvalidConfig(
                "rotation_damping must not be zero".to_string(),
            ));
        }
        if self.fade_divider == 0.0 {
            return Err(CoinburstError::InvalidConfig(
                "fade_divider must not be zero".to_string(),
            ));
        }
        if self.asset_prefix.is_empty() {
            return Err(CoinburstError::InvalidConfig(
                "asset_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_range(field: &str, min: f32, max: f32) -> Result<()> {
    if min > max {
        return Err(CoinburstError::InvalidRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

fn non_finite(field: &str, value: f64) -> CoinburstError {
    CoinburstError::NonFiniteValue {
        field: field.to_string(),
        value,
    }
}
