//! LineWorld - a tiny Markov decision process for tabular reinforcement learning.
//!
//! An agent on a line of `size` cells walks left or right and tries to grab a
//! banana. The crate provides:
//! - generic environment contracts (`env`): `Env`, `TabularEnv`, `VecEnv` and a registry
//! - the line world itself (`line_world`) with a pure transition model
//! - optional rendering to a pixel buffer or the terminal (`render`)
//! - an episode driver for policies (`rollout`)

pub mod env;
pub mod line_world;
pub mod render;
pub mod rollout;

pub use env::{Env, EnvError, Result, Step, TabularEnv, Transition, make};
pub use line_world::{Action, Info, LineWorld, LineWorldConfig, Observation, ResetOptions, State};
pub use render::RenderMode;
