//! WebGPU rendering module
//!
//! Recorded draw commands are turned into flat-colored triangles in
//! playfield pixels, then letterboxed onto the surface. Text is left to the
//! host, which draws it on an overlay using the same [`Viewport`].

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use vertex::{Palette, Vertex};

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{DrawCommand, Text};

/// Placement of the fixed-size playfield inside a surface, preserving aspect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Top-left corner of the playfield in surface pixels
    pub offset: Vec2,
    /// Surface pixels per playfield pixel
    pub scale: f32,
}

impl Viewport {
    pub fn fit(width: u32, height: u32) -> Self {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let scale = (w / SCREEN_WIDTH).min(h / SCREEN_HEIGHT);
        let offset = Vec2::new(
            (w - SCREEN_WIDTH * scale) / 2.0,
            (h - SCREEN_HEIGHT * scale) / 2.0,
        );
        Self {
            width: width.max(1),
            height: height.max(1),
            offset,
            scale,
        }
    }

    /// Playfield pixels to surface pixels
    pub fn to_surface(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    /// Playfield pixels to normalized device coordinates (y up)
    pub fn to_ndc(&self, position: [f32; 2]) -> [f32; 2] {
        let s = self.to_surface(Vec2::from(position));
        [
            s.x / self.width as f32 * 2.0 - 1.0,
            1.0 - s.y / self.height as f32 * 2.0,
        ]
    }
}

/// Everything needed to present one frame
#[derive(Debug, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<Text>,
}

/// Convert recorded commands to geometry and text, in draw order.
/// A clear wipes everything drawn before it.
pub fn build_frame(commands: &[DrawCommand], palette: &Palette) -> Frame {
    let mut frame = Frame::default();
    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                frame.vertices.clear();
                frame.texts.clear();
                frame.vertices.extend(shapes::rect(
                    Vec2::ZERO,
                    Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    color.rgba(),
                ));
            }
            DrawCommand::Sprite(sprite) => {
                frame
                    .vertices
                    .extend(shapes::sprite_vertices(sprite, palette));
            }
            DrawCommand::Text(text) => frame.texts.push(text.clone()),
        }
    }
    frame
}
