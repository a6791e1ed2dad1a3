//! Rendering support
//!
//! The core does not own a GPU backend. It exposes a per-frame view, a draw
//! list the host replays through its `Canvas`, and ready-to-upload vertices.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Canvas, DrawCommand, FrameView, MENU_BANNER, draw_list, render};
pub use shapes::{FrameMesh, frame_mesh};
pub use vertex::Vertex;
