//! Per-frame view of the game and the draw list built from it

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{GameMode, GameState};

/// Title banner shown in the menu
pub const MENU_BANNER: &str = "Bouncing Ball Game\n\nPress SPACE to Start";

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub mode: GameMode,
    /// Ball sprite top-left
    pub ball_pos: Vec2,
    /// Paddle top-left
    pub paddle_pos: Vec2,
    pub paddle_size: Vec2,
    pub lives: u8,
    pub score: u64,
}

impl FrameView {
    /// Read the state after the tick for this frame has returned
    pub fn capture(state: &GameState) -> Self {
        Self {
            mode: state.mode,
            ball_pos: state.ball.pos,
            paddle_pos: Vec2::new(state.paddle.x, PADDLE_Y),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            lives: state.session.lives,
            score: state.session.score,
        }
    }
}

/// A primitive positioned in playfield coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The ball image, top-left at `pos`
    Sprite { pos: Vec2 },
    /// Solid rectangle
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Debug-font text, top-left at `pos`
    Text { text: String, pos: Vec2 },
}

/// Build the draw list for a frame
pub fn draw_list(view: &FrameView) -> Vec<DrawCommand> {
    match view.mode {
        GameMode::Menu => vec![DrawCommand::Text {
            text: MENU_BANNER.to_string(),
            pos: Vec2::ZERO,
        }],
        GameMode::Playing => vec![
            DrawCommand::Sprite { pos: view.ball_pos },
            DrawCommand::FillRect {
                pos: view.paddle_pos,
                size: view.paddle_size,
                color: colors::PADDLE,
            },
            DrawCommand::Text {
                text: format!("Lives: {}", view.lives),
                pos: Vec2::new(10.0, 10.0),
            },
            DrawCommand::Text {
                text: format!("Score: {}", view.score),
                pos: Vec2::new(10.0, 30.0),
            },
        ],
    }
}

/// "Render primitive at position" service provided by the host
pub trait Canvas {
    fn sprite(&mut self, pos: Vec2);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]);
    fn text(&mut self, text: &str, pos: Vec2);
}

/// Replay a draw list onto a canvas
pub fn render(canvas: &mut dyn Canvas, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Sprite { pos } => canvas.sprite(*pos),
            DrawCommand::FillRect { pos, size, color } => canvas.fill_rect(*pos, *size, *color),
            DrawCommand::Text { text, pos } => canvas.text(text, *pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TextCanvas {
        lines: Vec<String>,
    }

    impl Canvas for TextCanvas {
        fn sprite(&mut self, pos: Vec2) {
            self.lines.push(format!("sprite {} {}", pos.x, pos.y));
        }
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, _color: [f32; 4]) {
            self.lines
                .push(format!("rect {} {} {} {}", pos.x, pos.y, size.x, size.y));
        }
        fn text(&mut self, text: &str, pos: Vec2) {
            self.lines.push(format!("text {} {} {}", pos.x, pos.y, text));
        }
    }

    #[test]
    fn test_menu_draws_banner_only() {
        let view = FrameView::capture(&GameState::new());
        let commands = draw_list(&view);
        assert_eq!(
            commands,
            vec![DrawCommand::Text {
                text: MENU_BANNER.to_string(),
                pos: Vec2::ZERO
            }]
        );
    }

    #[test]
    fn test_playing_frame() {
        let mut state = GameState::new();
        state.start_run();
        state.session.score = 30;

        let mut canvas = TextCanvas::default();
        render(&mut canvas, &draw_list(&FrameView::capture(&state)));

        assert_eq!(
            canvas.lines,
            vec![
                "sprite 320 240",
                "rect 280 460 80 20",
                "text 10 10 Lives: 3",
                "text 10 30 Score: 30",
            ]
        );
    }
}
