//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::{Tuning, WaveConfig};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    AwaitingStart,
    /// A wave is running
    Playing,
    /// Between-wave countdown (3 seconds)
    Intermission,
    /// Every wave survived
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Phases that accept the restart key
    pub fn accepts_restart(self) -> bool {
        matches!(self, Self::AwaitingStart | Self::Won | Self::Lost)
    }
}

/// Horizontal facing of the dino sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// The player-controlled dinosaur
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite center
    pub pos: Vec2,
    /// Pixels per tick, positive is downward
    pub vertical_velocity: f32,
    pub facing: Facing,
    /// Index into the 4-frame sprite sheet
    pub animation_frame: usize,
    /// Fractional walk-cycle position in frames
    pub walk_phase: f32,
    /// Jump key state on the previous tick (for edge detection)
    pub jump_held: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vertical_velocity: 0.0,
            facing: Facing::Left,
            animation_frame: IDLE_FRAME,
            walk_phase: 0.0,
            jump_held: false,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    /// Back to the spawn point, at rest
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.vertical_velocity = 0.0;
    }
}

/// What a falling entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Meteor,
    /// Heart worth one extra life
    Collectible,
}

/// A meteor or heart falling from the top of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct FallingEntity {
    pub id: u32,
    pub kind: EntityKind,
    /// Sprite center
    pub pos: Vec2,
    /// Pixels per tick
    pub fall_speed: f32,
    /// Sprite scale (always 1.0 for hearts)
    pub scale: f32,
}

impl FallingEntity {
    pub fn bounds(&self) -> Aabb {
        let size = match self.kind {
            EntityKind::Meteor => METEOR_SIZE,
            EntityKind::Collectible => COLLECTIBLE_SIZE,
        };
        Aabb::from_center(self.pos, Vec2::splat(size * self.scale))
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.y >= OFFSCREEN_Y
    }
}

/// Per-wave spawn accumulators, counted in fixed ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnClocks {
    pub meteor_ticks: u32,
    pub collectible_ticks: u32,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    RunStarted,
    MeteorHit { id: u32 },
    LifeCollected { id: u32 },
    IntermissionStarted { wave: usize },
    WaveCleared { wave: usize },
    Won { score: i64 },
    Lost { score: i64 },
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub is_running: bool,
    pub score: i64,
    pub lives: i32,
    /// Current wave (0-based); equals the wave count once the game is won
    pub wave_index: usize,
    /// Fixed ticks elapsed in the current wave
    pub wave_ticks: u32,
    pub player: Player,
    /// Active meteors (ascending id)
    pub meteors: Vec<FallingEntity>,
    /// Active hearts (ascending id)
    pub collectibles: Vec<FallingEntity>,
    pub clocks: SpawnClocks,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the default wave table
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with a custom wave table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::AwaitingStart,
            is_running: false,
            score: 0,
            lives: STARTING_LIVES,
            wave_index: 0,
            wave_ticks: 0,
            player: Player::default(),
            meteors: Vec::new(),
            collectibles: Vec::new(),
            clocks: SpawnClocks::default(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Restore the start-of-run values. Phase and the running flag are left
    /// to the caller.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.wave_index = 0;
        self.wave_ticks = 0;
        self.clear_meteors();
        self.clear_collectibles();
        self.player = Player::default();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn clear_meteors(&mut self) {
        self.meteors.clear();
        self.clocks.meteor_ticks = 0;
    }

    pub fn clear_collectibles(&mut self) {
        self.collectibles.clear();
        self.clocks.collectible_ticks = 0;
    }

    /// Active wave, `None` past the last one
    pub fn current_wave(&self) -> Option<&WaveConfig> {
        self.tuning.wave(self.wave_index)
    }

    pub fn wave_count(&self) -> usize {
        self.tuning.wave_count()
    }

    pub fn is_last_wave(&self) -> bool {
        self.wave_index + 1 >= self.wave_count()
    }

    /// Seconds elapsed in the current wave
    pub fn wave_elapsed(&self) -> f32 {
        self.tuning.ticks_to_secs(self.wave_ticks)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
