//! Top-level controller
//!
//! Owns the state and settings and runs one engine frame at a time:
//! poll input, tick, log what happened, draw.

use crate::platform::{Engine, LogicalKey};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui;

impl TickInput {
    /// Sample the engine's logical keys
    pub fn poll<E: Engine + ?Sized>(engine: &E) -> Self {
        Self {
            left: engine.is_pressed(LogicalKey::Left),
            right: engine.is_pressed(LogicalKey::Right),
            jump: engine.is_pressed(LogicalKey::Jump),
            restart: engine.is_pressed(LogicalKey::Start),
        }
    }
}

/// A running game bound to no particular engine
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            settings,
        }
    }

    /// Advance the simulation by one tick using the engine's input
    pub fn update<E: Engine + ?Sized>(&mut self, engine: &E) {
        let input = TickInput::poll(engine);
        tick(&mut self.state, &input, engine);
        for event in self.state.drain_events() {
            log_event(&event);
        }
    }

    /// Draw the current state
    pub fn draw<E: Engine + ?Sized>(&self, engine: &mut E) {
        ui::draw(&self.state, &self.settings, engine);
    }

    /// One tick followed by one draw
    pub fn frame<E: Engine + ?Sized>(&mut self, engine: &mut E) {
        self.update(engine);
        self.draw(engine);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::MeteorHit { id } => log::debug!("meteor {} hit", id),
        GameEvent::LifeCollected { id } => log::debug!("heart {} collected", id),
        GameEvent::Won { score } | GameEvent::Lost { score } => {
            log::info!("{:?} (score {})", event, score)
        }
        _ => log::debug!("{:?}", event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FrameRecorder, LogicalKey};
    use crate::sim::GamePhase;

    #[test]
    fn test_frame_starts_on_enter_and_draws() {
        let mut game = Game::new(5, Tuning::default(), Settings::default());
        let mut engine = FrameRecorder::new();

        game.frame(&mut engine);
        assert_eq!(game.state.phase, GamePhase::AwaitingStart);
        assert!(engine.texts().any(|t| t == "Press [RETURN] To Play"));
        engine.take_commands();

        engine.keyboard.press(LogicalKey::Start);
        game.frame(&mut engine);
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert!(engine.texts().any(|t| t.starts_with("Wave: 1/4")));
    }

    #[test]
    fn test_poll_reads_all_keys() {
        let mut engine = FrameRecorder::new();
        engine.keyboard.press(LogicalKey::Left);
        engine.keyboard.press(LogicalKey::Jump);
        let input = TickInput::poll(&engine);
        assert_eq!(
            input,
            TickInput {
                left: true,
                right: false,
                jump: true,
                restart: false,
            }
        );
    }

    #[test]
    fn test_same_seed_same_run() {
        let script = |game: &mut Game| {
            let mut engine = FrameRecorder::new();
            engine.keyboard.press(LogicalKey::Start);
            game.update(&engine);
            engine.keyboard.release(LogicalKey::Start);
            for i in 0..600 {
                if i % 90 < 45 {
                    engine.keyboard.press(LogicalKey::Right);
                    engine.keyboard.release(LogicalKey::Left);
                } else {
                    engine.keyboard.press(LogicalKey::Left);
                    engine.keyboard.release(LogicalKey::Right);
                }
                game.update(&engine);
            }
        };
        let mut a = Game::new(77, Tuning::default(), Settings::default());
        let mut b = Game::new(77, Tuning::default(), Settings::default());
        script(&mut a);
        script(&mut b);
        assert_eq!(a.state.score, b.state.score);
        assert_eq!(a.state.lives, b.state.lives);
        assert_eq!(a.state.meteors, b.state.meteors);
        assert_eq!(a.state.player, b.state.player);
    }
}
