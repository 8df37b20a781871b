use super::{Frame, RenderView, Renderer, Rgb};
use crate::env::Result;

const BACKGROUND: Rgb = [255, 255, 255];
const BANANA: Rgb = [255, 255, 0];
const AGENT: Rgb = [0, 0, 255];

/// Rasterizes the line onto a square canvas, one cell per position.
///
/// The banana is a yellow cell one row above the bottom, the agent a blue
/// disc in the bottom row.
#[derive(Debug, Clone)]
pub struct RgbArrayRenderer {
    window_size: usize,
}

impl RgbArrayRenderer {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn draw(&self, view: &RenderView) -> Frame {
        let mut canvas = Frame::filled(self.window_size, self.window_size, BACKGROUND);
        let size = view.size as f64;
        let cell = self.window_size as f64 / size;

        canvas.fill_rect(
            view.state.banana as f64 * cell,
            (size - 2.0) * cell,
            cell,
            cell,
            BANANA,
        );
        canvas.fill_circle(
            (view.state.agent as f64 + 0.5) * cell,
            (size - 0.5) * cell,
            cell / 3.0,
            AGENT,
        );
        canvas
    }
}

impl Renderer for RgbArrayRenderer {
    fn render(&mut self, view: &RenderView) -> Result<Option<Frame>> {
        Ok(Some(self.draw(view)))
    }
}
