//! Coinburst Core - Foundational types for the coin burst effect
//!
//! This crate provides the types every other Coinburst crate depends on:
//! - `Vec2` - Screen-space vector for positions, pivots and scales
//! - Error types and Result alias

mod error;
mod types;

pub use error::{CoinburstError, Result};
pub use types::Vec2;
