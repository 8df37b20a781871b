//! Presentation collaborators for the line world.
//!
//! Rendering only ever reads the environment: a renderer receives a
//! [`RenderView`] snapshot after `reset`/`step` and never feeds anything back
//! into the decision logic.

mod frame;
mod human;
mod rgb_array;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::{EnvError, Result};
use crate::line_world::{Action, LineWorldConfig, State};

pub use frame::{Frame, Rgb};
pub use human::HumanRenderer;
pub use rgb_array::RgbArrayRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    None,
    /// Draw to the terminal, paced to the configured frame rate.
    Human,
    /// Produce a `(height, width, 3)` pixel buffer on `render()`.
    RgbArray,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::None => "none",
            RenderMode::Human => "human",
            RenderMode::RgbArray => "rgb_array",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(RenderMode::None),
            "human" => Ok(RenderMode::Human),
            "rgb_array" => Ok(RenderMode::RgbArray),
            other => Err(EnvError::UnsupportedRenderMode(other.to_string())),
        }
    }
}

/// Snapshot handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderView {
    pub size: usize,
    pub state: State,
    pub last_action: Option<Action>,
}

pub trait Renderer: Send {
    fn render(&mut self, view: &RenderView) -> Result<Option<Frame>>;

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Picks the renderer matching `config.render_mode`, if any.
pub fn renderer_for(config: &LineWorldConfig) -> Result<Option<Box<dyn Renderer>>> {
    Ok(match config.render_mode {
        RenderMode::None => None,
        RenderMode::Human => Some(Box::new(HumanRenderer::stdout(config.render_fps)?)),
        RenderMode::RgbArray => Some(Box::new(RgbArrayRenderer::new(config.window_size))),
    })
}
