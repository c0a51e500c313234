//! HUD text and indicator helpers

use crate::consts::{COUNTDOWN_SECS, INTERMISSION_SECS, MAX_LIVES};

/// "N seconds left", counting whole seconds up so the last second reads 1
pub fn seconds_left_label(remaining: f32) -> String {
    let shown = remaining.max(0.0).trunc() as i32 + 1;
    if shown == 1 {
        "1 second left".to_string()
    } else {
        format!("{} seconds left", shown)
    }
}

/// Big countdown number for the final seconds of a wave
pub fn countdown_overlay(elapsed: f32, duration: f32) -> Option<u32> {
    let left = duration - elapsed.trunc();
    if (0.0..=COUNTDOWN_SECS).contains(&left) {
        Some(left as u32)
    } else {
        None
    }
}

/// Seconds until the next wave while in intermission
pub fn intermission_countdown(elapsed: f32, duration: f32) -> u32 {
    (duration + INTERMISSION_SECS - elapsed.trunc()).max(0.0) as u32
}

/// Health bar frame for a life count. The sheet has one frame per life up
/// to nine; there is nothing to show at zero.
pub fn life_indicator_frame(lives: i32) -> Option<usize> {
    if lives <= 0 {
        None
    } else {
        Some((lives.min(MAX_LIVES) - 1) as usize)
    }
}

pub fn wave_line(wave_index: usize, wave_count: usize, score: i64) -> String {
    format!("Wave: {}/{}  |  Score: {}", wave_index + 1, wave_count, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_left_label() {
        assert_eq!(seconds_left_label(30.0), "31 seconds left");
        assert_eq!(seconds_left_label(29.98), "30 seconds left");
        assert_eq!(seconds_left_label(1.5), "2 seconds left");
        assert_eq!(seconds_left_label(0.4), "1 second left");
        assert_eq!(seconds_left_label(-0.1), "1 second left");
    }

    #[test]
    fn test_countdown_overlay_window() {
        assert_eq!(countdown_overlay(20.0, 30.0), None);
        assert_eq!(countdown_overlay(26.9, 30.0), None);
        assert_eq!(countdown_overlay(27.0, 30.0), Some(3));
        assert_eq!(countdown_overlay(29.5, 30.0), Some(1));
        assert_eq!(countdown_overlay(30.0, 30.0), Some(0));
    }

    #[test]
    fn test_intermission_countdown() {
        assert_eq!(intermission_countdown(30.02, 30.0), 3);
        assert_eq!(intermission_countdown(32.5, 30.0), 1);
        assert_eq!(intermission_countdown(33.0, 30.0), 0);
    }

    #[test]
    fn test_life_indicator_is_guarded() {
        assert_eq!(life_indicator_frame(0), None);
        assert_eq!(life_indicator_frame(-2), None);
        assert_eq!(life_indicator_frame(1), Some(0));
        assert_eq!(life_indicator_frame(9), Some(8));
        assert_eq!(life_indicator_frame(14), Some(8));
    }

    #[test]
    fn test_wave_line() {
        assert_eq!(wave_line(0, 4, -10), "Wave: 1/4  |  Score: -10");
    }
}
