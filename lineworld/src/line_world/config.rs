use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::env::{EnvError, Result};
use crate::render::RenderMode;

/// Largest rgb-array canvas edge accepted from options.
pub const MAX_WINDOW_SIZE: usize = 4096;

/// Construction options for [`LineWorld`](super::LineWorld).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWorldConfig {
    /// Number of cells on the line.
    pub size: usize,
    pub render_mode: RenderMode,
    /// Frame rate the human renderer holds; 0 renders unpaced.
    pub render_fps: u32,
    /// Edge length of the rgb-array canvas in pixels.
    pub window_size: usize,
    /// Reward for grabbing the banana while standing on it.
    pub grab_reward: f32,
    /// Reward for every other step.
    pub step_reward: f32,
    /// Seed for the environment's generator; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for LineWorldConfig {
    fn default() -> Self {
        Self {
            size: 5,
            render_mode: RenderMode::None,
            render_fps: 4,
            window_size: 512,
            grab_reward: 10.0,
            step_reward: -1.0,
            seed: None,
        }
    }
}

impl LineWorldConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads a config from a JSON options object; `null` yields the defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        let config: Self = match value {
            Value::Null => Self::default(),
            other => serde_json::from_value(other.clone())?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(EnvError::InvalidSize(self.size));
        }
        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(EnvError::InvalidWindowSize {
                size: self.window_size,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LineWorldConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.render_mode, RenderMode::None);
        assert_eq!(config.render_fps, 4);
        assert_eq!(config.grab_reward, 10.0);
        assert_eq!(config.step_reward, -1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LineWorldConfig::from_json(r#"{ "size": 9, "render_mode": "human" }"#).unwrap();
        assert_eq!(config.size, 9);
        assert_eq!(config.render_mode, RenderMode::Human);
        assert_eq!(config.window_size, 512);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            LineWorldConfig::with_size(0).validate(),
            Err(EnvError::InvalidSize(0))
        ));
        assert!(matches!(
            LineWorldConfig::from_json(r#"{ "size": 0 }"#),
            Err(EnvError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_window_size_is_bounded() {
        for size in [0, MAX_WINDOW_SIZE + 1, usize::MAX] {
            let config = LineWorldConfig {
                window_size: size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(EnvError::InvalidWindowSize { max: MAX_WINDOW_SIZE, .. })
            ));
        }
        assert!(matches!(
            LineWorldConfig::from_json(r#"{ "render_mode": "rgb_array", "window_size": 1000000000 }"#),
            Err(EnvError::InvalidWindowSize { size: 1_000_000_000, .. })
        ));

        let largest = LineWorldConfig {
            window_size: MAX_WINDOW_SIZE,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_negative_size_is_a_config_error() {
        assert!(matches!(
            LineWorldConfig::from_json(r#"{ "size": -3 }"#),
            Err(EnvError::Config(_))
        ));
    }
}
