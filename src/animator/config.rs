//! Animator tuning knobs.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{FeedError, Result};

/// Blocks falling at the same time.
pub const MAX_BLOCKS: usize = 14;

/// Gap between the first spawn of consecutive slots.
pub const SPAWN_STAGGER: Duration = Duration::from_millis(300);

/// Width reserved for one block, in pixels.
pub const BLOCK_WIDTH: f64 = 120.0;

/// Settings for [`Animator`](super::Animator).
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// Number of slots, i.e. blocks visible at once.
    pub max_blocks: usize,

    /// Delay between slot `i` and slot `i + 1` starting.
    pub stagger: Duration,

    /// Block width subtracted from the viewport when placing blocks.
    pub block_width: f64,

    /// How long a block takes to fall.
    pub fall: RangeInclusive<Duration>,

    /// Pause between a block landing and its artist falling again.
    pub respawn_delay: RangeInclusive<Duration>,

    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            max_blocks: MAX_BLOCKS,
            stagger: SPAWN_STAGGER,
            block_width: BLOCK_WIDTH,
            fall: Duration::from_secs(5)..=Duration::from_secs(10),
            respawn_delay: Duration::ZERO..=Duration::from_secs(2),
            seed: None,
        }
    }
}

impl AnimatorConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Check that every range is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.block_width.is_finite() || self.block_width < 0.0 {
            return Err(FeedError::InvalidConfig(format!(
                "block width must be a non-negative number, got {}",
                self.block_width
            )));
        }
        if self.fall.start() > self.fall.end() {
            return Err(FeedError::InvalidConfig(format!(
                "fall range is inverted: {:?}",
                self.fall
            )));
        }
        if self.fall.start().is_zero() {
            return Err(FeedError::InvalidConfig(
                "fall duration must be greater than zero".to_string(),
            ));
        }
        if self.respawn_delay.start() > self.respawn_delay.end() {
            return Err(FeedError::InvalidConfig(format!(
                "respawn delay range is inverted: {:?}",
                self.respawn_delay
            )));
        }
        Ok(())
    }
}
