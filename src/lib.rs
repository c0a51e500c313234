//! Dino Dodge - a single-screen meteor dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (waves, spawning, player, collisions)
//! - `platform`: Render/input engine boundary and frame recording
//! - `ui`: Scene composition (HUD, intermission, end screens)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven wave table
//! - `game`: Top-level controller tying the above together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError, WaveConfig};

/// Game configuration constants
pub mod consts {
    /// Playfield size in pixels (origin top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player sprite footprint
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Horizontal speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Downward acceleration (pixels per tick²)
    pub const GRAVITY: f32 = 1.0;
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Where the dino is placed on restart and after every wave
    pub const PLAYER_SPAWN_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = SCREEN_HEIGHT - 150.0;

    /// Walk cycle
    pub const WALK_FRAMES: f32 = 4.0;
    pub const WALK_FPS: f32 = 12.0;
    pub const IDLE_FRAME: usize = 0;
    pub const JUMP_FRAME: usize = 3;

    /// Ground slab (center + size)
    pub const GROUND_X: f32 = SCREEN_WIDTH / 2.0;
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 50.0;
    pub const GROUND_WIDTH: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Meteors
    pub const METEOR_SIZE: f32 = 60.0;
    pub const METEOR_MIN_SCALE: f32 = 0.4;
    pub const METEOR_MAX_SCALE: f32 = 1.5;

    /// Heart collectibles
    pub const COLLECTIBLE_SIZE: f32 = 32.0;
    pub const COLLECTIBLE_SPEED: f32 = 4.0;

    /// Entities spawn just above the visible area
    pub const SPAWN_Y: f32 = -60.0;
    /// Entities are dropped once they fall this far
    pub const OFFSCREEN_Y: f32 = SCREEN_HEIGHT + 200.0;

    /// Life bookkeeping
    pub const STARTING_LIVES: i32 = 1;
    /// No hearts spawn at or above this many lives (health bar has 9 frames)
    pub const MAX_LIVES: i32 = 9;

    /// Score deltas
    pub const METEOR_PENALTY: i64 = 10;
    pub const COLLECTIBLE_BONUS: i64 = 25;
    pub const WAVE_BONUS: i64 = 100;

    /// Seconds between waves
    pub const INTERMISSION_SECS: f32 = 3.0;
    /// Countdown overlay appears this close to the end of a wave
    pub const COUNTDOWN_SECS: f32 = 3.0;
    /// Seconds left before wave end where heart spawning stops
    pub const COLLECTIBLE_CUTOFF_SECS: f32 = 5.0;
}
