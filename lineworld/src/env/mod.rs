mod errors;
pub mod registry;
mod traits;
mod types;
mod vec_env;

pub use errors::{EnvError, Result};
pub use registry::{LINE_WORLD_ID, Registry, default_registry, make};
pub use traits::{Env, TabularEnv};
pub use types::{Sample, Step, Trajectory, Transition};
pub use vec_env::VecEnv;
