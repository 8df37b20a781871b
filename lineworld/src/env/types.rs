use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the environment hands back from one `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<O, I> {
    pub obs: O,
    pub rew: f32,
    pub terminated: bool,
    /// Always false for environments without a horizon; drivers may set it at a step cap.
    pub truncated: bool,
    pub info: I,
}

impl<O, I> Step<O, I> {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Outcome of applying an action to a state, independent of any live episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition<S> {
    pub next: S,
    pub rew: f32,
    pub terminated: bool,
}

/// One recorded step: `act` taken from `obs` led to `next_obs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample<O, A, I> {
    pub obs: O,
    pub act: A,
    pub rew: f32,
    pub next_obs: O,
    pub terminated: bool,
    pub truncated: bool,
    pub info: I,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<O, A, I> {
    pub id: Uuid,
    pub samples: Vec<Sample<O, A, I>>,
}

impl<O, A, I> Default for Trajectory<O, A, I> {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            samples: Vec::new(),
        }
    }
}

impl<O, A, I> Trajectory<O, A, I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn total_reward(&self) -> f32 {
        self.samples.iter().map(|s| s.rew).sum()
    }

    pub fn terminated(&self) -> bool {
        self.samples.last().is_some_and(|s| s.terminated)
    }

    pub fn truncated(&self) -> bool {
        self.samples.last().is_some_and(|s| s.truncated)
    }
}
