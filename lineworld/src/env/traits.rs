use crate::env::errors::Result;
use crate::env::types::{Step, Transition};
use crate::render::Frame;

/// Gymnasium-shaped environment contract.
pub trait Env: Send {
    type Obs: Send + Clone + 'static;
    type Act: Send + Clone + 'static;
    type Info: Send + Clone + 'static;
    type Options: Default;

    /// Starts a new episode. A `Some` seed re-seeds the environment's generator,
    /// `None` keeps drawing from the current one.
    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Self::Options,
    ) -> Result<(Self::Obs, Self::Info)>;

    fn step(&mut self, act: Self::Act) -> Result<Step<Self::Obs, Self::Info>>;

    fn render(&mut self) -> Result<Option<Frame>> {
        Ok(None)
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// An environment whose full model can be enumerated, as needed by
/// dynamic-programming solvers (policy and value iteration).
///
/// Every method takes `&self`: querying the model never disturbs the
/// episode currently in progress.
pub trait TabularEnv: Env {
    type State: Send + Clone + 'static;

    fn all_states(&self) -> Vec<Self::State>;

    fn possible_actions(&self, state: &Self::State) -> Result<Vec<Self::Act>>;

    fn transition(&self, state: &Self::State, act: Self::Act) -> Result<Transition<Self::State>>;

    fn state_of(obs: &Self::Obs) -> Self::State;

    /// Every legal `(state, action)` pair together with its outcome.
    fn transition_table(&self) -> Result<Vec<(Self::State, Self::Act, Transition<Self::State>)>> {
        let mut table = Vec::new();
        for state in self.all_states() {
            for act in self.possible_actions(&state)? {
                let outcome = self.transition(&state, act.clone())?;
                table.push((state.clone(), act, outcome));
            }
        }
        Ok(table)
    }
}
