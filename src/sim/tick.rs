//! Fixed timestep simulation tick
//!
//! Drives the wave state machine:
//! `AwaitingStart -> Playing -> Intermission -> Playing -> ... -> Won`,
//! with `Lost` reachable from any running phase.

use super::collision::{self, Physics};
use super::player;
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{INTERMISSION_SECS, WAVE_BONUS};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Start a new run (only honored while not running)
    pub restart: bool,
}

/// Advance the game state by one fixed tick
pub fn tick<P: Physics + ?Sized>(state: &mut GameState, input: &TickInput, physics: &P) {
    state.time_ticks += 1;

    if input.restart && state.phase.accepts_restart() {
        start_run(state);
    }

    settle(state);
    if !state.is_running {
        return;
    }

    let dt = state.tuning.dt();
    player::update(&mut state.player, input, physics, dt);
    advance_wave(state, physics);

    settle(state);
}

/// Full reset into the first wave
fn start_run(state: &mut GameState) {
    state.reset();
    state.is_running = true;
    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::RunStarted);
    log::info!("Run started ({} waves)", state.wave_count());
}

/// End the run if it is over. Running out of lives outranks finishing the
/// last wave.
fn settle(state: &mut GameState) {
    if !state.is_running {
        return;
    }
    if state.lives <= 0 {
        state.is_running = false;
        state.phase = GamePhase::Lost;
        state.push_event(GameEvent::Lost { score: state.score });
        log::info!("Run lost on wave {} with score {}", state.wave_index + 1, state.score);
    } else if state.wave_index >= state.wave_count() {
        state.is_running = false;
        state.phase = GamePhase::Won;
        state.push_event(GameEvent::Won { score: state.score });
        log::info!("All waves survived, final score {}", state.score);
    }
}

/// Move the wave clock forward and run whichever part of the wave it lands in
fn advance_wave<P: Physics + ?Sized>(state: &mut GameState, physics: &P) {
    let Some(wave) = state.current_wave().copied() else {
        return;
    };

    state.wave_ticks += 1;
    let elapsed = state.wave_elapsed();

    if elapsed <= wave.duration {
        spawner::spawn(state, &wave);
        collision::sweep(state, physics);
    } else if elapsed <= wave.duration + INTERMISSION_SECS && !state.is_last_wave() {
        if state.phase != GamePhase::Intermission {
            state.phase = GamePhase::Intermission;
            state.push_event(GameEvent::IntermissionStarted {
                wave: state.wave_index,
            });
            log::info!("Wave {} complete, intermission", state.wave_index + 1);
        }
        state.clear_meteors();
        state.clear_collectibles();
    } else {
        complete_wave(state);
    }
}

/// Bank the wave bonus and line up the next wave
fn complete_wave(state: &mut GameState) {
    let cleared = state.wave_index;
    state.score += WAVE_BONUS;
    state.wave_ticks = 0;
    state.wave_index += 1;
    state.player.respawn();
    state.clear_meteors();
    state.clear_collectibles();
    state.push_event(GameEvent::WaveCleared { wave: cleared });

    if state.wave_index < state.wave_count() {
        state.phase = GamePhase::Playing;
        log::info!("Wave {} of {} starting", state.wave_index + 1, state.wave_count());
    }
}
