//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (NDC), texture coordinate and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv,
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Sprite tint (untinted)
    pub const SPRITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let vertices = [Vertex::new(0.5, -0.5, [0.0, 1.0], colors::PADDLE); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 96);
    }
}
