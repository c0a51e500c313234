//! Frame recording engine
//!
//! Collects the draw calls of one frame so a backend (or a test) can consume
//! them afterwards.

use super::{Color, Engine, Keyboard, LogicalKey, Sprite, Text};
use crate::sim::Physics;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite(Sprite),
    Text(Text),
}

/// An [`Engine`] that records draw calls and reads input from a [`Keyboard`]
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub keyboard: Keyboard,
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand the frame's commands over and start a new frame
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every text line drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s),
            _ => None,
        })
    }
}

impl Physics for FrameRecorder {}

impl Engine for FrameRecorder {
    fn is_pressed(&self, key: LogicalKey) -> bool {
        self.keyboard.is_held(key)
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: Sprite) {
        self.commands.push(DrawCommand::Sprite(sprite));
    }

    fn draw_text(&mut self, text: Text) {
        self.commands.push(DrawCommand::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SpriteKind;
    use glam::Vec2;

    #[test]
    fn test_records_in_order_and_takes() {
        let mut rec = FrameRecorder::new();
        rec.clear(Color::Black);
        rec.draw_sprite(Sprite::new(SpriteKind::Meteor, Vec2::new(1.0, 2.0)).scaled(0.5));
        rec.draw_text(Text::new("hi", 20.0, Color::White, 0.0, 0.0));

        assert_eq!(rec.texts().collect::<Vec<_>>(), vec!["hi"]);
        assert_eq!(rec.sprites().next().map(|s| s.scale), Some(0.5));

        let cmds = rec.take_commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0], DrawCommand::Clear(Color::Black));
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn test_input_from_keyboard() {
        let mut rec = FrameRecorder::new();
        rec.keyboard.key_down("Enter");
        assert!(rec.is_pressed(LogicalKey::Start));
        assert!(!rec.is_pressed(LogicalKey::Left));
    }
}
