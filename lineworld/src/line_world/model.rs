use rand::Rng;

use super::{Action, LineWorldConfig, State};
use crate::env::{EnvError, Result, Transition};

/// The line world's dynamics, free of any episode state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    size: usize,
    grab_reward: f32,
    step_reward: f32,
}

impl LineModel {
    pub fn new(size: usize) -> Result<Self> {
        Self::from_config(&LineWorldConfig::with_size(size))
    }

    pub fn from_config(config: &LineWorldConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(EnvError::InvalidSize(config.size));
        }
        Ok(Self {
            size: config.size,
            grab_reward: config.grab_reward,
            step_reward: config.step_reward,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn check(&self, state: &State) -> Result<()> {
        if state.is_within(self.size) {
            Ok(())
        } else {
            Err(EnvError::InvalidState {
                agent: state.agent,
                banana: state.banana,
                size: self.size,
            })
        }
    }

    /// Legal actions depend on the agent's position only; `Grab` is always legal.
    pub fn possible_actions(&self, state: &State) -> Result<Vec<Action>> {
        self.check(state)?;

        Ok(Action::ALL
            .into_iter()
            .filter(|action| match action {
                Action::MoveLeft => state.agent > 0,
                Action::MoveRight => state.agent < self.size - 1,
                Action::Grab => true,
            })
            .collect())
    }

    /// Every `(agent, banana)` pair, agent-major.
    pub fn all_states(&self) -> Vec<State> {
        (0..self.size)
            .flat_map(|agent| (0..self.size).map(move |banana| State::new(agent, banana)))
            .collect()
    }

    pub fn transition(&self, state: &State, action: Action) -> Result<Transition<State>> {
        self.check(state)?;

        let outcome = match action {
            Action::MoveLeft | Action::MoveRight => {
                let agent = state
                    .agent
                    .saturating_add_signed(action.delta())
                    .min(self.size - 1);
                Transition {
                    next: state.with_agent(agent),
                    rew: self.step_reward,
                    terminated: false,
                }
            }
            Action::Grab if state.agent == state.banana => Transition {
                next: *state,
                rew: self.grab_reward,
                terminated: true,
            },
            Action::Grab => Transition {
                next: *state,
                rew: self.step_reward,
                terminated: false,
            },
        };
        Ok(outcome)
    }

    /// Agent and banana drawn independently and uniformly; they may coincide.
    pub fn sample_state<R: Rng>(&self, rng: &mut R) -> State {
        let agent = rng.gen_range(0..self.size);
        let banana = rng.gen_range(0..self.size);
        State::new(agent, banana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn model() -> LineModel {
        LineModel::new(5).unwrap()
    }

    #[test]
    fn test_move_right() {
        let t = model().transition(&State::new(2, 0), Action::MoveRight).unwrap();
        assert_eq!(t.next, State::new(3, 0));
        assert_eq!(t.rew, -1.0);
        assert!(!t.terminated);
    }

    #[test]
    fn test_moves_clamp_at_bounds() {
        let m = model();
        let left = m.transition(&State::new(0, 2), Action::MoveLeft).unwrap();
        assert_eq!(left.next, State::new(0, 2));
        assert_eq!(left.rew, -1.0);

        let right = m.transition(&State::new(4, 2), Action::MoveRight).unwrap();
        assert_eq!(right.next, State::new(4, 2));
        assert!(!right.terminated);
    }

    #[test]
    fn test_grab_on_banana_terminates() {
        let t = model().transition(&State::new(3, 3), Action::Grab).unwrap();
        assert_eq!(t.next, State::new(3, 3));
        assert_eq!(t.rew, 10.0);
        assert!(t.terminated);
    }

    #[test]
    fn test_grab_elsewhere_costs_a_step() {
        let t = model().transition(&State::new(3, 4), Action::Grab).unwrap();
        assert_eq!(t.next, State::new(3, 4));
        assert_eq!(t.rew, -1.0);
        assert!(!t.terminated);
    }

    #[test]
    fn test_possible_actions_at_bounds() {
        let m = model();
        assert_eq!(
            m.possible_actions(&State::new(0, 3)).unwrap(),
            vec![Action::MoveRight, Action::Grab]
        );
        assert_eq!(
            m.possible_actions(&State::new(4, 3)).unwrap(),
            vec![Action::MoveLeft, Action::Grab]
        );
        assert_eq!(
            m.possible_actions(&State::new(2, 3)).unwrap(),
            Action::ALL.to_vec()
        );
    }

    #[test]
    fn test_single_cell_line_only_allows_grab() {
        let m = LineModel::new(1).unwrap();
        assert_eq!(
            m.possible_actions(&State::new(0, 0)).unwrap(),
            vec![Action::Grab]
        );
        assert_eq!(m.all_states(), vec![State::new(0, 0)]);
    }

    #[test]
    fn test_all_states_order_and_count() {
        let states = model().all_states();
        assert_eq!(states.len(), 25);
        assert_eq!(states[0], State::new(0, 0));
        assert_eq!(states[1], State::new(0, 1));
        assert_eq!(states[5], State::new(1, 0));
        assert_eq!(states[24], State::new(4, 4));
        assert_eq!(states.iter().collect::<HashSet<_>>().len(), 25);
    }

    #[test]
    fn test_out_of_range_state() {
        assert!(matches!(
            model().transition(&State::new(5, 0), Action::Grab),
            Err(EnvError::InvalidState { agent: 5, banana: 0, size: 5 })
        ));
    }

    #[test]
    fn test_possible_actions_reject_states_off_the_line() {
        let m = model();
        assert!(matches!(
            m.possible_actions(&State::new(9, 0)),
            Err(EnvError::InvalidState { agent: 9, banana: 0, size: 5 })
        ));
        assert!(matches!(
            m.possible_actions(&State::new(usize::MAX, 0)),
            Err(EnvError::InvalidState { .. })
        ));
        assert!(matches!(
            m.possible_actions(&State::new(0, 5)),
            Err(EnvError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(LineModel::new(0), Err(EnvError::InvalidSize(0))));
    }

    #[test]
    fn test_sampled_states_in_bounds() {
        let m = LineModel::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert!(m.sample_state(&mut rng).is_within(3));
        }
    }
}
