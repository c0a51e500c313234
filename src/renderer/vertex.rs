//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sky_top: [f32; 4],
    pub sky_bottom: [f32; 4],
    pub ground: [f32; 4],
    pub grass: [f32; 4],
    pub dino: [f32; 4],
    pub dino_eye: [f32; 4],
    pub meteor: [f32; 4],
    pub meteor_core: [f32; 4],
    pub heart: [f32; 4],
    pub bar_empty: [f32; 4],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        sky_top: [0.25, 0.45, 0.85, 1.0],
        sky_bottom: [0.75, 0.85, 1.0, 1.0],
        ground: [0.45, 0.3, 0.15, 1.0],
        grass: [0.3, 0.7, 0.25, 1.0],
        dino: [0.35, 0.65, 0.3, 1.0],
        dino_eye: [0.05, 0.05, 0.05, 1.0],
        meteor: [0.55, 0.3, 0.2, 1.0],
        meteor_core: [1.0, 0.55, 0.1, 1.0],
        heart: [0.9, 0.15, 0.25, 1.0],
        bar_empty: [0.2, 0.2, 0.25, 0.6],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        sky_top: [0.0, 0.0, 0.0, 1.0],
        sky_bottom: [0.0, 0.0, 0.0, 1.0],
        ground: [1.0, 1.0, 1.0, 1.0],
        grass: [1.0, 1.0, 1.0, 1.0],
        dino: [0.0, 1.0, 0.0, 1.0],
        dino_eye: [0.0, 0.0, 0.0, 1.0],
        meteor: [1.0, 0.5, 0.0, 1.0],
        meteor_core: [1.0, 1.0, 0.0, 1.0],
        heart: [1.0, 0.0, 0.3, 1.0],
        bar_empty: [0.4, 0.4, 0.4, 1.0],
    };

    pub fn for_settings(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }
}
