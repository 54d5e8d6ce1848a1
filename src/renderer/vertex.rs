//! Vertex type and palette for 2D rendering
//!
//! Positions are in screen pixels (origin top-left, y down) until the
//! pipeline maps them to clip space.

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Palette
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.06, 1.0];
    pub const STAR: [f32; 4] = [0.8, 0.8, 0.9, 0.6];
    pub const PLAYER: [f32; 4] = [0.3, 0.7, 1.0, 1.0];
    pub const PLAYER_WEAPON: [f32; 4] = [1.0, 0.6, 0.2, 1.0];
    pub const SHIELD: [f32; 4] = [0.3, 0.9, 1.0, 0.45];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.4, 1.0];
    pub const ENEMY: [f32; 4] = [0.9, 0.25, 0.25, 1.0];
    pub const BOSS: [f32; 4] = [0.7, 0.2, 0.9, 1.0];
    /// Boss health pips
    pub const BOSS_PIP: [f32; 4] = [1.0, 0.85, 0.9, 1.0];
    pub const POWERUP_WEAPON: [f32; 4] = [1.0, 0.6, 0.2, 1.0];
    pub const POWERUP_SHIELD: [f32; 4] = [0.3, 0.9, 1.0, 1.0];
}
