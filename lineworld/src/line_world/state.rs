use serde::{Deserialize, Serialize};

/// Agent and banana positions on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    pub agent: usize,
    pub banana: usize,
}

impl State {
    pub fn new(agent: usize, banana: usize) -> Self {
        Self { agent, banana }
    }

    pub fn distance(&self) -> usize {
        self.agent.abs_diff(self.banana)
    }

    pub fn is_within(&self, size: usize) -> bool {
        self.agent < size && self.banana < size
    }

    pub fn with_agent(self, agent: usize) -> Self {
        Self { agent, ..self }
    }
}

impl From<(usize, usize)> for State {
    fn from((agent, banana): (usize, usize)) -> Self {
        Self { agent, banana }
    }
}

impl From<State> for (usize, usize) {
    fn from(state: State) -> Self {
        (state.agent, state.banana)
    }
}

/// What a policy sees after `reset`/`step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub agent: usize,
    pub banana: usize,
}

impl Observation {
    pub fn flatten(&self) -> State {
        State::new(self.agent, self.banana)
    }
}

impl From<State> for Observation {
    fn from(state: State) -> Self {
        Self {
            agent: state.agent,
            banana: state.banana,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub distance: usize,
}

impl From<State> for Info {
    fn from(state: State) -> Self {
        Self {
            distance: state.distance(),
        }
    }
}
