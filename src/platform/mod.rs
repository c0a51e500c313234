//! Platform abstraction layer
//!
//! The render/input engine the game talks to. The simulation only needs
//! [`Physics`]; scene drawing and input polling go through [`Engine`].
//!
//! - `keyboard`: key name to logical input mapping and held-key tracking
//! - `recorder`: an engine that records draw commands for a frame

pub mod keyboard;
pub mod recorder;

pub use keyboard::Keyboard;
pub use recorder::{DrawCommand, FrameRecorder};

use glam::Vec2;

use crate::sim::Physics;

/// Logical inputs the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Jump,
    /// Start / restart
    Start,
}

/// Named colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Black,
}

impl Color {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Yellow => [1.0, 0.85, 0.1, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// CSS color string for canvas text
    pub fn css(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }
}

/// Which picture a sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Sky backdrop covering the playfield
    Background,
    Ground,
    /// Dino sheet frame (0..4)
    Dino { frame: usize },
    Meteor,
    Heart,
    /// Health bar sheet frame (0..9, one per life)
    HealthBar { frame: usize },
}

/// A sprite placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Center in screen pixels
    pub pos: Vec2,
    pub scale: f32,
    /// Mirror horizontally
    pub flip_x: bool,
}

impl Sprite {
    pub fn new(kind: SpriteKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            scale: 1.0,
            flip_x: false,
        }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn flipped(mut self, flip_x: bool) -> Self {
        self.flip_x = flip_x;
        self
    }
}

/// A line of text centered on `pos`
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
    pub pos: Vec2,
}

impl Text {
    pub fn new(content: impl Into<String>, size: f32, color: Color, x: f32, y: f32) -> Self {
        Self {
            content: content.into(),
            size,
            color,
            pos: Vec2::new(x, y),
        }
    }
}

/// Drawing and input capabilities supplied by the host
pub trait Engine: Physics {
    /// Is the logical key currently held
    fn is_pressed(&self, key: LogicalKey) -> bool;

    /// Fill the whole screen
    fn clear(&mut self, color: Color);

    fn draw_sprite(&mut self, sprite: Sprite);

    fn draw_text(&mut self, text: Text);
}
