//! Shape generation for 2D primitives
//!
//! Playfield coordinates are y-down with the origin at the top-left; output
//! vertices are in normalized device coordinates (y-up, -1..1).

use glam::Vec2;

use super::frame::FrameView;
use super::vertex::{Vertex, colors};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::GameMode;

/// Convert a playfield point to NDC
pub fn to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / PLAYFIELD_WIDTH * 2.0 - 1.0,
        1.0 - p.y / PLAYFIELD_HEIGHT * 2.0,
    )
}

/// Two triangles covering an axis-aligned rectangle
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let tl = to_ndc(pos);
    let br = to_ndc(pos + size);

    let v_tl = Vertex::new(tl.x, tl.y, [0.0, 0.0], color);
    let v_tr = Vertex::new(br.x, tl.y, [1.0, 0.0], color);
    let v_bl = Vertex::new(tl.x, br.y, [0.0, 1.0], color);
    let v_br = Vertex::new(br.x, br.y, [1.0, 1.0], color);

    [v_tl, v_bl, v_tr, v_tr, v_bl, v_br]
}

/// Vertex data for one frame, split by pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMesh {
    /// Untextured triangles (paddle)
    pub solid: Vec<Vertex>,
    /// Textured triangles sampling the ball image
    pub sprite: Vec<Vertex>,
}

/// Build the frame's geometry; text overlays are left to the host's font path
pub fn frame_mesh(view: &FrameView, sprite_size: Vec2) -> FrameMesh {
    match view.mode {
        GameMode::Menu => FrameMesh::default(),
        GameMode::Playing => FrameMesh {
            solid: quad(view.paddle_pos, view.paddle_size, colors::PADDLE).to_vec(),
            sprite: quad(view.ball_pos, sprite_size, colors::SPRITE).to_vec(),
        },
    }
}
