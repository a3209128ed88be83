//! Tick time for InfinityLib
//!
//! The host simulation advances in fixed ticks while rendering happens at an
//! arbitrary frame rate. `TickClock` turns raw frame deltas into a number of
//! ticks to run plus the partial-tick fraction the renderer samples with.

use serde::{Deserialize, Serialize};

/// Configuration for tick time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Fixed simulation steps per second
    pub ticks_per_second: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 20.0,
            max_delta_time: 0.25,
        }
    }
}

impl TimeConfig {
    /// Length of one tick in seconds
    pub fn tick_length(&self) -> f32 {
        1.0 / self.ticks_per_second
    }

    /// Check the configuration for values the clock cannot run with
    pub fn validate(&self) -> Result<(), TimeConfigError> {
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(TimeConfigError::InvalidTickRate(self.ticks_per_second));
        }
        if !self.max_delta_time.is_finite() || self.max_delta_time <= 0.0 {
            return Err(TimeConfigError::InvalidMaxDelta(self.max_delta_time));
        }
        Ok(())
    }
}

/// Errors for unusable time configurations
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeConfigError {
    #[error("Tick rate must be positive, got {0}")]
    InvalidTickRate(f32),

    #[error("Maximum delta time must be positive, got {0}")]
    InvalidMaxDelta(f32),
}

/// Fixed-step tick tracking
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Configuration
    pub config: TimeConfig,
    /// Ticks run since the clock was created
    pub total_ticks: u64,
    /// Frame counter
    pub frame_count: u64,
    /// Whether ticking is paused
    pub paused: bool,
    /// Time accumulated towards the next tick
    accumulator: f32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            config: TimeConfig::default(),
            total_ticks: 0,
            frame_count: 0,
            paused: false,
            accumulator: 0.0,
        }
    }
}

impl TickClock {
    /// Create a new clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance by the raw delta of the previous frame and return how many
    /// ticks should run this frame
    pub fn advance(&mut self, raw_delta: f32) -> u32 {
        self.frame_count += 1;
        if self.paused {
            return 0;
        }

        self.accumulator += raw_delta.clamp(0.0, self.config.max_delta_time);
        let tick_length = self.config.tick_length();
        let mut ticks = 0;
        while self.accumulator >= tick_length {
            self.accumulator -= tick_length;
            ticks += 1;
        }
        self.total_ticks += ticks as u64;
        ticks
    }

    /// Fraction of the way from the last tick to the next one, in `[0, 1)`
    pub fn partial_tick(&self) -> f32 {
        (self.accumulator / self.config.tick_length()).clamp(0.0, 1.0)
    }

    /// Pause ticking; frames still count
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume ticking
    pub fn resume(&mut self) {
        self.paused = false;
    }
}
