use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Frame, RenderView, Renderer};
use crate::env::Result;
use crate::line_world::Action;

/// Draws the line in a bordered terminal panel and blocks to hold the frame rate.
pub struct HumanRenderer<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    frame_period: Option<Duration>,
}

impl HumanRenderer<CrosstermBackend<Stdout>> {
    pub fn stdout(render_fps: u32) -> Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()), render_fps)
    }
}

impl<B: Backend> HumanRenderer<B> {
    /// `render_fps == 0` disables pacing.
    pub fn new(backend: B, render_fps: u32) -> Result<Self> {
        let terminal = Terminal::new(backend)?;
        let frame_period =
            (render_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(render_fps)));
        Ok(Self {
            terminal,
            frame_period,
        })
    }
}

fn action_label(action: Option<Action>) -> &'static str {
    match action {
        Some(Action::MoveLeft) => "left",
        Some(Action::MoveRight) => "right",
        Some(Action::Grab) => "grab banana",
        None => "unknown",
    }
}

/// `A` agent, `B` banana, `*` both on the same cell.
pub(crate) fn draw_line(view: &RenderView) -> String {
    (0..view.size)
        .map(|cell| {
            match (cell == view.state.agent, cell == view.state.banana) {
                (true, true) => '*',
                (true, false) => 'A',
                (false, true) => 'B',
                (false, false) => '.',
            }
        })
        .collect()
}

fn styled_line(view: &RenderView) -> Line<'static> {
    let spans: Vec<Span> = draw_line(view)
        .chars()
        .map(|cell| {
            let style = match cell {
                'A' => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                'B' => Style::default().fg(Color::Yellow),
                '*' => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                _ => Style::default().fg(Color::DarkGray),
            };
            Span::styled(cell.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

impl<B: Backend + Send> Renderer for HumanRenderer<B> {
    fn render(&mut self, view: &RenderView) -> Result<Option<Frame>> {
        let line = styled_line(view);
        let title = action_label(view.last_action);
        self.terminal.draw(|frame| {
            let panel = Paragraph::new(line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(title),
                )
                .alignment(Alignment::Center);
            frame.render_widget(panel, frame.area());
        })?;

        if let Some(period) = self.frame_period {
            thread::sleep(period);
        }
        Ok(None)
    }

    fn close(&mut self) -> Result<()> {
        self.terminal.backend_mut().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::line_world::State;

    fn screen_rows(renderer: &HumanRenderer<TestBackend>) -> Vec<String> {
        let buffer = renderer.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_draw_line_markers() {
        let mut view = RenderView {
            size: 5,
            state: State::new(1, 3),
            last_action: None,
        };
        assert_eq!(draw_line(&view), ".A.B.");

        view.state = State::new(2, 2);
        assert_eq!(draw_line(&view), "..*..");
    }

    #[test]
    fn test_render_draws_action_and_line() {
        let mut renderer = HumanRenderer::new(TestBackend::new(20, 3), 0).unwrap();
        let view = RenderView {
            size: 3,
            state: State::new(0, 2),
            last_action: Some(Action::MoveLeft),
        };
        assert!(renderer.render(&view).unwrap().is_none());

        let rows = screen_rows(&renderer);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("left"));
        assert!(rows[1].contains("A.B"));

        let view = RenderView {
            state: State::new(1, 1),
            last_action: Some(Action::Grab),
            ..view
        };
        renderer.render(&view).unwrap();

        let rows = screen_rows(&renderer);
        assert!(rows[0].contains("grab banana"));
        assert!(rows[1].contains(".*."));
        assert!(!rows[0].contains("left"));
        renderer.close().unwrap();
    }

    #[test]
    fn test_unknown_label_before_any_action() {
        let mut renderer = HumanRenderer::new(TestBackend::new(16, 3), 0).unwrap();
        let view = RenderView {
            size: 4,
            state: State::new(3, 0),
            last_action: None,
        };
        renderer.render(&view).unwrap();

        let rows = screen_rows(&renderer);
        assert!(rows[0].contains("unknown"));
        assert!(rows[1].contains("B..A"));
    }
}
