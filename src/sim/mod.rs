//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (clocks count whole ticks)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies; collision queries go through
//!   the [`Physics`] trait

pub mod collision;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, AabbPhysics, Physics, SweepReport, sweep};
pub use player::ground_bounds;
pub use state::{
    EntityKind, Facing, FallingEntity, GameEvent, GamePhase, GameState, Player, SpawnClocks,
};
pub use tick::{TickInput, tick};
