//! Scene composition
//!
//! Turns the game state into draw calls on an [`Engine`]. Runs after the
//! tick, so it always shows the post-tick phase.

pub mod hud;

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Color, Engine, Sprite, SpriteKind, Text};
use crate::settings::Settings;
use crate::sim::{Facing, GamePhase, GameState};

const CENTER_X: f32 = SCREEN_WIDTH / 2.0;
const CENTER_Y: f32 = SCREEN_HEIGHT / 2.0;
const HEALTH_BAR_Y: f32 = 750.0;

/// Draw one full frame
pub fn draw<E: Engine + ?Sized>(state: &GameState, settings: &Settings, engine: &mut E) {
    engine.draw_sprite(Sprite::new(SpriteKind::Background, Vec2::new(CENTER_X, CENTER_Y)));

    match state.phase {
        GamePhase::Won => draw_won(state, engine),
        GamePhase::Lost => draw_lost(state, engine),
        _ => {}
    }

    if !state.is_running {
        engine.draw_text(Text::new("Press [RETURN] To Play", 50.0, Color::White, CENTER_X, 50.0));
        return;
    }

    if state.phase == GamePhase::Intermission {
        draw_intermission(state, engine);
    } else {
        draw_playfield(state, engine);
        draw_hud(state, settings, engine);
    }
}

fn draw_playfield<E: Engine + ?Sized>(state: &GameState, engine: &mut E) {
    for meteor in &state.meteors {
        engine.draw_sprite(Sprite::new(SpriteKind::Meteor, meteor.pos).scaled(meteor.scale));
    }
    for heart in &state.collectibles {
        engine.draw_sprite(Sprite::new(SpriteKind::Heart, heart.pos));
    }
    engine.draw_sprite(Sprite::new(SpriteKind::Ground, Vec2::new(GROUND_X, GROUND_Y)));

    // The sheet faces left
    let player = &state.player;
    engine.draw_sprite(
        Sprite::new(SpriteKind::Dino { frame: player.animation_frame }, player.pos)
            .flipped(player.facing == Facing::Right),
    );

    if let Some(frame) = hud::life_indicator_frame(state.lives) {
        engine.draw_sprite(Sprite::new(
            SpriteKind::HealthBar { frame },
            Vec2::new(CENTER_X, HEALTH_BAR_Y),
        ));
    }
}

fn draw_hud<E: Engine + ?Sized>(state: &GameState, settings: &Settings, engine: &mut E) {
    let Some(wave) = state.current_wave() else {
        return;
    };
    let elapsed = state.wave_elapsed();

    engine.draw_text(Text::new(
        hud::seconds_left_label(wave.duration - elapsed),
        35.0,
        Color::White,
        CENTER_X,
        80.0,
    ));

    if settings.countdown_overlay {
        if let Some(n) = hud::countdown_overlay(elapsed, wave.duration) {
            engine.draw_text(Text::new(n.to_string(), 150.0, Color::White, CENTER_X, CENTER_Y));
        }
    }

    engine.draw_text(Text::new(
        hud::wave_line(state.wave_index, state.wave_count(), state.score),
        35.0,
        Color::White,
        CENTER_X,
        50.0,
    ));
}

fn draw_intermission<E: Engine + ?Sized>(state: &GameState, engine: &mut E) {
    let duration = state.current_wave().map_or(0.0, |w| w.duration);
    let countdown = hud::intermission_countdown(state.wave_elapsed(), duration);

    engine.clear(Color::Black);
    engine.draw_text(Text::new(
        format!(
            "Wave {} of {} complete!",
            state.wave_index + 1,
            state.wave_count()
        ),
        50.0,
        Color::White,
        CENTER_X,
        150.0,
    ));
    engine.draw_text(Text::new("Next wave starting in:", 50.0, Color::White, CENTER_X, 200.0));
    engine.draw_text(Text::new(countdown.to_string(), 150.0, Color::White, CENTER_X, CENTER_Y));
    engine.draw_text(Text::new(
        format!("+{} pts!", WAVE_BONUS),
        75.0,
        Color::Yellow,
        CENTER_X,
        SCREEN_HEIGHT - 200.0,
    ));
    engine.draw_text(Text::new(
        format!("Score: {}", state.score + WAVE_BONUS),
        50.0,
        Color::Yellow,
        CENTER_X,
        SCREEN_HEIGHT - 150.0,
    ));
}

fn draw_won<E: Engine + ?Sized>(state: &GameState, engine: &mut E) {
    engine.draw_text(Text::new("YOU SURVIVED", 100.0, Color::White, CENTER_X, CENTER_Y));
    engine.draw_text(Text::new(
        format!("+{} pts!", WAVE_BONUS),
        75.0,
        Color::Yellow,
        CENTER_X,
        200.0,
    ));
    draw_final_score(state, engine);
}

fn draw_lost<E: Engine + ?Sized>(state: &GameState, engine: &mut E) {
    engine.draw_text(Text::new("YOU DIED", 100.0, Color::White, CENTER_X, CENTER_Y));
    draw_final_score(state, engine);
}

fn draw_final_score<E: Engine + ?Sized>(state: &GameState, engine: &mut E) {
    engine.draw_text(Text::new(
        format!("Final Score: {}", state.score),
        50.0,
        Color::Yellow,
        CENTER_X,
        CENTER_Y - 150.0,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCommand, FrameRecorder};
    use crate::sim::{AabbPhysics, TickInput, tick};

    fn start() -> TickInput {
        TickInput {
            restart: true,
            ..Default::default()
        }
    }

    fn render(state: &GameState, settings: &Settings) -> FrameRecorder {
        let mut rec = FrameRecorder::new();
        draw(state, settings, &mut rec);
        rec
    }

    #[test]
    fn test_title_screen_prompt() {
        let state = GameState::new(1);
        let rec = render(&state, &Settings::default());
        let texts: Vec<_> = rec.texts().collect();
        assert_eq!(texts, vec!["Press [RETURN] To Play"]);
        assert!(!rec.sprites().any(|s| matches!(s.kind, SpriteKind::Dino { .. })));
    }

    #[test]
    fn test_playing_hud() {
        let mut state = GameState::new(1);
        tick(&mut state, &start(), &AabbPhysics);
        let rec = render(&state, &Settings::default());
        let texts: Vec<_> = rec.texts().collect();
        assert!(texts.contains(&"30 seconds left"));
        assert!(texts.contains(&"Wave: 1/4  |  Score: 0"));
        assert!(
            rec.sprites()
                .any(|s| s.kind == SpriteKind::HealthBar { frame: 0 })
        );
        assert!(rec.sprites().any(|s| matches!(s.kind, SpriteKind::Dino { .. })));
    }

    #[test]
    fn test_countdown_respects_setting() {
        let mut state = GameState::new(1);
        tick(&mut state, &start(), &AabbPhysics);
        state.wave_ticks = 28 * 60;

        let shown = render(&state, &Settings::default());
        assert!(shown.texts().any(|t| t == "2"));

        let settings = Settings {
            countdown_overlay: false,
            ..Settings::default()
        };
        let hidden = render(&state, &settings);
        assert!(!hidden.texts().any(|t| t == "2"));
    }

    #[test]
    fn test_intermission_screen() {
        let mut state = GameState::new(1);
        tick(&mut state, &start(), &AabbPhysics);
        state.phase = GamePhase::Intermission;
        state.wave_ticks = 1801;
        state.score = 40;

        let rec = render(&state, &Settings::default());
        assert!(rec.commands().contains(&DrawCommand::Clear(Color::Black)));
        let texts: Vec<_> = rec.texts().collect();
        assert!(texts.contains(&"Wave 1 of 4 complete!"));
        assert!(texts.contains(&"3"));
        assert!(texts.contains(&"Score: 140"));
        assert!(!rec.sprites().any(|s| s.kind == SpriteKind::Meteor));
    }

    #[test]
    fn test_lost_screen_has_no_health_bar() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Lost;
        state.lives = 0;
        state.score = -10;
        let rec = render(&state, &Settings::default());
        let texts: Vec<_> = rec.texts().collect();
        assert!(texts.contains(&"YOU DIED"));
        assert!(texts.contains(&"Final Score: -10"));
        assert!(texts.contains(&"Press [RETURN] To Play"));
        assert!(
            !rec.sprites()
                .any(|s| matches!(s.kind, SpriteKind::HealthBar { .. }))
        );
    }

    #[test]
    fn test_dino_flips_when_facing_right() {
        let mut state = GameState::new(1);
        tick(&mut state, &start(), &AabbPhysics);
        state.player.facing = Facing::Right;
        let rec = render(&state, &Settings::default());
        let dino = rec
            .sprites()
            .find(|s| matches!(s.kind, SpriteKind::Dino { .. }))
            .copied();
        assert_eq!(dino.map(|d| d.flip_x), Some(true));
    }
}
