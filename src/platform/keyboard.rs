//! Keyboard state tracking
//!
//! Key names follow `KeyboardEvent.key` so the web shell can forward events
//! as-is.

use std::collections::HashSet;

use super::LogicalKey;

/// Map a `KeyboardEvent.key` value to a logical input
pub fn map_key(key: &str) -> Option<LogicalKey> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(LogicalKey::Left),
        "ArrowRight" | "d" | "D" => Some(LogicalKey::Right),
        " " | "ArrowUp" | "w" | "W" => Some(LogicalKey::Jump),
        "Enter" => Some(LogicalKey::Start),
        _ => None,
    }
}

/// Currently held logical keys
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<LogicalKey>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is one the game uses
    pub fn key_down(&mut self, key: &str) -> bool {
        match map_key(key) {
            Some(k) => {
                self.held.insert(k);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match map_key(key) {
            Some(k) => {
                self.held.remove(&k);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held.contains(&key)
    }

    /// Drop everything (window lost focus, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
