//! Timed meteor and heart spawning
//!
//! Both clocks advance by one fixed tick per call and are compared against
//! the active wave's settings in seconds.

use glam::Vec2;
use rand::Rng;

use super::state::{EntityKind, FallingEntity, GameState};
use crate::consts::*;
use crate::tuning::WaveConfig;

/// Advance both spawn clocks for the active wave and create whatever is due
pub fn spawn(state: &mut GameState, wave: &WaveConfig) {
    state.clocks.meteor_ticks += 1;
    if state.tuning.ticks_to_secs(state.clocks.meteor_ticks) >= wave.spawn_interval {
        state.clocks.meteor_ticks = 0;
        spawn_meteor(state, wave);
    }

    state.clocks.collectible_ticks += 1;
    let elapsed = state.tuning.ticks_to_secs(state.clocks.collectible_ticks);
    if elapsed >= collectible_spacing(wave) && state.lives < MAX_LIVES {
        state.clocks.collectible_ticks = 0;
        spawn_collectible(state);
    }
}

/// Seconds between heart spawns.
///
/// A single heart arrives at the half-way point. Larger caps spread the
/// hearts evenly over the wave minus its last five seconds. This spaces
/// spawns rather than counting them.
pub fn collectible_spacing(wave: &WaveConfig) -> f32 {
    if wave.max_collectables <= 1 {
        wave.duration / 2.0
    } else {
        (wave.duration - COLLECTIBLE_CUTOFF_SECS) / wave.max_collectables as f32
    }
}

/// Drop a meteor at a random column with random size and speed
pub fn spawn_meteor(state: &mut GameState, wave: &WaveConfig) {
    let x = state.rng.random_range(0..SCREEN_WIDTH as i32) as f32;
    let scale = state.rng.random_range(METEOR_MIN_SCALE..METEOR_MAX_SCALE);
    let speed = state.rng.random_range(wave.min_speed..wave.max_speed) as f32;
    let id = state.next_entity_id();
    state.meteors.push(FallingEntity {
        id,
        kind: EntityKind::Meteor,
        pos: Vec2::new(x, SPAWN_Y),
        fall_speed: speed,
        scale,
    });
}

/// Drop a heart at a random column
pub fn spawn_collectible(state: &mut GameState) {
    let x = state.rng.random_range(0..SCREEN_WIDTH as i32) as f32;
    let id = state.next_entity_id();
    log::debug!("Heart {} spawned at x={}", id, x);
    state.collectibles.push(FallingEntity {
        id,
        kind: EntityKind::Collectible,
        pos: Vec2::new(x, SPAWN_Y),
        fall_speed: COLLECTIBLE_SPEED,
        scale: 1.0,
    });
}
