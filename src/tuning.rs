//! Data-driven wave table
//!
//! The default table is baked in; a JSON document with the same shape can
//! replace it at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE;

/// Settings for a single timed wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Seconds between meteor spawns
    pub spawn_interval: f32,
    /// Meteor fall speed range (pixels per tick), max exclusive
    pub min_speed: i32,
    pub max_speed: i32,
    /// Wave length in seconds
    pub duration: f32,
    /// Heart spacing divisor (see `sim::spawner`)
    pub max_collectables: u32,
}

impl WaveConfig {
    pub const fn new(
        spawn_interval: f32,
        min_speed: i32,
        max_speed: i32,
        duration: f32,
        max_collectables: u32,
    ) -> Self {
        Self {
            spawn_interval,
            min_speed,
            max_speed,
            duration,
            max_collectables,
        }
    }
}

/// Waves in play order
pub const DEFAULT_WAVES: [WaveConfig; 4] = [
    WaveConfig::new(0.425, 4, 7, 30.0, 1),
    WaveConfig::new(0.25, 7, 12, 30.0, 2),
    WaveConfig::new(0.175, 10, 15, 30.0, 5),
    WaveConfig::new(0.25, 15, 20, 30.0, 5),
];

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum TuningError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("wave table is empty")]
    NoWaves,

    #[error("tick rate must be positive")]
    ZeroTickRate,

    #[error("wave {wave}: spawn interval must be positive, got {value}")]
    SpawnInterval { wave: usize, value: f32 },

    #[error("wave {wave}: min speed {min} must be below max speed {max}")]
    SpeedRange { wave: usize, min: i32, max: i32 },

    #[error("wave {wave}: duration must be positive, got {value}")]
    Duration { wave: usize, value: f32 },

    #[error("wave {wave}: at least one collectible is required")]
    NoCollectables { wave: usize },
}

/// Complete balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Simulation ticks per second
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    pub waves: Vec<WaveConfig>,
}

fn default_tick_rate() -> u32 {
    TICK_RATE
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            waves: DEFAULT_WAVES.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON wave table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every wave against the table invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.tick_rate == 0 {
            return Err(TuningError::ZeroTickRate);
        }
        if self.waves.is_empty() {
            return Err(TuningError::NoWaves);
        }
        for (wave, cfg) in self.waves.iter().enumerate() {
            if cfg.spawn_interval.is_nan() || cfg.spawn_interval <= 0.0 {
                return Err(TuningError::SpawnInterval {
                    wave,
                    value: cfg.spawn_interval,
                });
            }
            if cfg.min_speed >= cfg.max_speed {
                return Err(TuningError::SpeedRange {
                    wave,
                    min: cfg.min_speed,
                    max: cfg.max_speed,
                });
            }
            if cfg.duration.is_nan() || cfg.duration <= 0.0 {
                return Err(TuningError::Duration {
                    wave,
                    value: cfg.duration,
                });
            }
            if cfg.max_collectables == 0 {
                return Err(TuningError::NoCollectables { wave });
            }
        }
        Ok(())
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    /// Configuration for a wave index; `None` once every wave is done
    pub fn wave(&self, index: usize) -> Option<&WaveConfig> {
        self.waves.get(index)
    }

    /// Fixed tick length in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Convert a tick count into seconds
    pub fn ticks_to_secs(&self, ticks: u32) -> f32 {
        ticks as f32 / self.tick_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.validate(), Ok(()));
        assert_eq!(tuning.wave_count(), 4);
        assert_eq!(tuning.wave(0).map(|w| w.max_collectables), Some(1));
        assert!(tuning.wave(4).is_none());
    }

    #[test]
    fn test_from_json_defaults_tick_rate() {
        let json = r#"{"waves":[{"spawn_interval":0.5,"min_speed":2,"max_speed":4,"duration":10.0,"max_collectables":1}]}"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.tick_rate, 60);
        assert_eq!(tuning.waves[0].duration, 10.0);
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let mut tuning = Tuning::default();
        tuning.waves[2].min_speed = 20;
        assert_eq!(
            tuning.validate(),
            Err(TuningError::SpeedRange {
                wave: 2,
                min: 20,
                max: 15
            })
        );
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        let empty = Tuning {
            tick_rate: 60,
            waves: Vec::new(),
        };
        assert_eq!(empty.validate(), Err(TuningError::NoWaves));
        assert!(matches!(
            Tuning::from_json("{not json"),
            Err(TuningError::Parse(_))
        ));

        let mut zero = Tuning::default();
        zero.waves[1].max_collectables = 0;
        assert_eq!(zero.validate(), Err(TuningError::NoCollectables { wave: 1 }));
    }

    #[test]
    fn test_ticks_to_secs_is_exact_on_whole_seconds() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ticks_to_secs(1800), 30.0);
        assert_eq!(tuning.ticks_to_secs(1980), 33.0);
    }
}
