//! Fixed two-quad scene: an outer green quad and an inner red quad, both
//! centered at the NDC origin. Geometry is uploaded once at renderer
//! construction and never mutated.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Quad corners run top-left, bottom-left, bottom-right, top-right; z stays 0.
pub const SCENE_VERTICES: [Vertex; 8] = [
    // Outer quad, half-extent 0.5.
    Vertex {
        position: [-0.5, 0.5, 0.0],
        color: GREEN,
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: GREEN,
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: GREEN,
    },
    Vertex {
        position: [0.5, 0.5, 0.0],
        color: GREEN,
    },
    // Inner quad, half-extent 0.25.
    Vertex {
        position: [-0.25, 0.25, 0.0],
        color: RED,
    },
    Vertex {
        position: [-0.25, -0.25, 0.0],
        color: RED,
    },
    Vertex {
        position: [0.25, -0.25, 0.0],
        color: RED,
    },
    Vertex {
        position: [0.25, 0.25, 0.0],
        color: RED,
    },
];

/// Two triangles per quad, sharing the TL-BR diagonal.
pub const SCENE_INDICES: [u16; 12] = [
    0, 1, 2, 2, 3, 0, // outer quad
    4, 5, 6, 6, 7, 4, // inner quad
];

pub const INDICES_PER_QUAD: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub first_index: u32,
    pub index_count: u32,
}

impl DrawCall {
    pub fn index_range(&self) -> Range<u32> {
        self.first_index..self.first_index + self.index_count
    }
}

/// The per-frame draw plan: outer quad first, then the inner quad. The order
/// is back-to-front by declaration and must stay that way.
pub fn draw_calls() -> [DrawCall; 2] {
    [
        DrawCall {
            first_index: 0,
            index_count: INDICES_PER_QUAD,
        },
        DrawCall {
            first_index: INDICES_PER_QUAD,
            index_count: INDICES_PER_QUAD,
        },
    ]
}
