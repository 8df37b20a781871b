//! The banana-on-a-line Markov decision process.
//!
//! Dynamics live in [`LineModel`] and are pure; [`LineWorld`] wraps them with
//! the per-episode state, a seeded generator and an optional renderer.

mod action;
mod config;
mod env;
mod model;
mod state;

pub use action::Action;
pub use config::LineWorldConfig;
pub use env::{LineWorld, ResetOptions};
pub use model::LineModel;
pub use state::{Info, Observation, State};
