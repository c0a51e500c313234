//! Shape generation for sprites
//!
//! Every sprite is built from flat-colored triangles in screen pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Palette, Vertex};
use crate::consts::*;
use crate::platform::{Sprite, SpriteKind};

/// Axis-aligned rectangle from two corners
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, max, color, color)
}

/// Rectangle with a vertical color ramp
pub fn gradient_rect(min: Vec2, max: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Two lobes and a point, `size` wide
pub fn heart(center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = size * 0.27;
    let lobe_y = center.y - size * 0.15;
    let mut vertices = circle(Vec2::new(center.x - r, lobe_y), r, color, 12);
    vertices.extend(circle(Vec2::new(center.x + r, lobe_y), r, color, 12));
    vertices.push(Vertex::new(center.x - 2.0 * r, lobe_y + r * 0.3, color));
    vertices.push(Vertex::new(center.x + 2.0 * r, lobe_y + r * 0.3, color));
    vertices.push(Vertex::new(center.x, center.y + size * 0.5, color));
    vertices
}

/// Rock with a glowing core
pub fn meteor(center: Vec2, scale: f32, palette: &Palette) -> Vec<Vertex> {
    let radius = METEOR_SIZE * 0.5 * scale;
    let mut vertices = circle(center, radius, palette.meteor, 16);
    vertices.extend(circle(
        center + Vec2::new(radius * 0.2, radius * 0.25),
        radius * 0.45,
        palette.meteor_core,
        10,
    ));
    vertices
}

/// Dino sheet frame. Frames 0-2 walk, 3 is the jump pose. The unflipped
/// sprite faces left.
pub fn dino(center: Vec2, frame: usize, flip_x: bool, palette: &Palette) -> Vec<Vertex> {
    let w = PLAYER_WIDTH;
    let h = PLAYER_HEIGHT;
    let dir = if flip_x { 1.0 } else { -1.0 };
    // Offsets are given for a right-facing dino and mirrored by `dir`
    let part = |x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 4]| {
        let (a, b) = (center.x + x0 * w * dir, center.x + x1 * w * dir);
        rect(
            Vec2::new(a.min(b), center.y + y0 * h),
            Vec2::new(a.max(b), center.y + y1 * h),
            color,
        )
    };

    let mut vertices = Vec::new();
    // Tail, body, head
    vertices.extend(part(-0.5, -0.05, -0.2, 0.1, palette.dino));
    vertices.extend(part(-0.25, -0.2, 0.2, 0.3, palette.dino));
    vertices.extend(part(0.05, -0.5, 0.5, -0.15, palette.dino));
    vertices.extend(part(0.3, -0.42, 0.38, -0.34, palette.dino_eye));

    // Legs swing with the walk cycle and tuck in mid-air
    let (back, front) = match frame {
        0 => (0.0, 0.0),
        1 => (-0.08, 0.08),
        2 => (0.08, -0.08),
        _ => (0.05, 0.05),
    };
    let leg_bottom = if frame == JUMP_FRAME { 0.4 } else { 0.5 };
    vertices.extend(part(-0.2 + back, 0.3, -0.05 + back, leg_bottom, palette.dino));
    vertices.extend(part(0.0 + front, 0.3, 0.15 + front, leg_bottom, palette.dino));
    vertices
}

/// Nine heart slots, `frame + 1` of them filled
pub fn health_bar(center: Vec2, frame: usize, palette: &Palette) -> Vec<Vertex> {
    let slot = 28.0;
    let left = center.x - slot * 4.0;
    let mut vertices = Vec::new();
    for i in 0..MAX_LIVES as usize {
        let color = if i <= frame {
            palette.heart
        } else {
            palette.bar_empty
        };
        vertices.extend(heart(Vec2::new(left + i as f32 * slot, center.y), 22.0, color));
    }
    vertices
}

/// Geometry for one sprite
pub fn sprite_vertices(sprite: &Sprite, palette: &Palette) -> Vec<Vertex> {
    match sprite.kind {
        SpriteKind::Background => {
            let half = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) * 0.5 * sprite.scale;
            gradient_rect(
                sprite.pos - half,
                sprite.pos + half,
                palette.sky_top,
                palette.sky_bottom,
            )
        }
        SpriteKind::Ground => {
            let half = Vec2::new(GROUND_WIDTH, GROUND_HEIGHT) * 0.5 * sprite.scale;
            let min = sprite.pos - half;
            let max = sprite.pos + half;
            let mut vertices = rect(min, max, palette.ground);
            vertices.extend(rect(min, Vec2::new(max.x, min.y + 12.0), palette.grass));
            vertices
        }
        SpriteKind::Dino { frame } => dino(sprite.pos, frame, sprite.flip_x, palette),
        SpriteKind::Meteor => meteor(sprite.pos, sprite.scale, palette),
        SpriteKind::Heart => heart(sprite.pos, COLLECTIBLE_SIZE * sprite.scale, palette.heart),
        SpriteKind::HealthBar { frame } => health_bar(sprite.pos, frame, palette),
    }
}
