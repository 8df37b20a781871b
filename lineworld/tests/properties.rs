use std::collections::HashSet;

use lineworld::env::{LINE_WORLD_ID, VecEnv};
use lineworld::{
    Action, Env, EnvError, LineWorld, LineWorldConfig, ResetOptions, State, TabularEnv, make,
};
use serde_json::json;

fn line(size: usize, seed: u64) -> LineWorld {
    LineWorld::new(LineWorldConfig::with_size(size).seed(seed)).unwrap()
}

#[test]
fn reset_positions_stay_on_the_line() {
    for size in 1..=12 {
        let mut env = line(size, size as u64);
        for seed in 0..50 {
            let (obs, info) = env.reset(Some(seed), ResetOptions::default()).unwrap();
            assert!(obs.agent < size, "agent {} off a line of {size}", obs.agent);
            assert!(obs.banana < size, "banana {} off a line of {size}", obs.banana);
            assert_eq!(info.distance, obs.agent.abs_diff(obs.banana));
        }
    }
}

#[test]
fn possible_actions_respect_boundaries() {
    for size in 1..=8 {
        let env = line(size, 0);
        for state in env.all_states() {
            let actions = env.possible_actions(&state).unwrap();
            assert!(actions.contains(&Action::Grab));
            if state.agent == 0 {
                assert!(!actions.contains(&Action::MoveLeft));
            }
            if state.agent == size - 1 {
                assert!(!actions.contains(&Action::MoveRight));
            }
        }
    }
}

#[test]
fn all_states_is_the_full_product() {
    for size in 1..=10 {
        let states = line(size, 0).all_states();
        assert_eq!(states.len(), size * size);
        assert_eq!(states.iter().collect::<HashSet<_>>().len(), size * size);
    }
}

#[test]
fn positions_never_leave_the_line_while_stepping() {
    let mut env = line(4, 17);
    env.reset(None, ResetOptions::default()).unwrap();
    let script = [0i64, 0, 0, 0, 1, 1, 1, 1, 1, 2, 0, 1, 2];
    for raw in script.iter().cycle().take(100) {
        let step = env.step_index(*raw).unwrap();
        assert!(step.obs.agent < 4);
        assert!(step.obs.banana < 4);
        if step.terminated {
            env.reset(None, ResetOptions::default()).unwrap();
        }
    }
}

#[test]
fn banana_stays_put_within_an_episode() {
    let mut env = line(6, 2);
    let (start, _) = env.reset(None, ResetOptions::default()).unwrap();
    for act in [Action::MoveLeft, Action::MoveRight, Action::MoveRight, Action::Grab] {
        let step = env.step(act).unwrap();
        assert_eq!(step.obs.banana, start.banana);
    }
}

#[test]
fn live_steps_agree_with_the_transition_table() {
    let mut env = line(5, 0);
    let table = env.transition_table().unwrap();
    for (state, act, expected) in table {
        env.set_state(state).unwrap();
        let step = env.step(act).unwrap();
        assert_eq!(step.obs.flatten(), expected.next);
        assert_eq!(step.rew, expected.rew);
        assert_eq!(step.terminated, expected.terminated);
        assert!(!step.truncated);
    }
}

#[test]
fn scenarios_on_a_line_of_five() {
    let mut env = line(5, 0);

    env.reset(None, ResetOptions::at(2, 0)).unwrap();
    let step = env.step(Action::MoveRight).unwrap();
    assert_eq!((step.obs.agent, step.rew, step.terminated), (3, -1.0, false));

    env.reset(None, ResetOptions::at(0, 4)).unwrap();
    let step = env.step(Action::MoveLeft).unwrap();
    assert_eq!((step.obs.agent, step.rew), (0, -1.0));

    env.reset(None, ResetOptions::at(3, 3)).unwrap();
    let step = env.step(Action::Grab).unwrap();
    assert_eq!((step.rew, step.terminated), (10.0, true));

    env.reset(None, ResetOptions::at(3, 4)).unwrap();
    let step = env.step(Action::Grab).unwrap();
    assert_eq!((step.obs.agent, step.rew, step.terminated), (3, -1.0, false));
}

#[test]
fn precondition_violations_fail_fast() {
    assert!(matches!(
        LineWorld::new(LineWorldConfig::with_size(0)),
        Err(EnvError::InvalidSize(0))
    ));
    assert!(matches!(
        "window".parse::<lineworld::RenderMode>(),
        Err(EnvError::UnsupportedRenderMode(_))
    ));

    let mut env = line(3, 0);
    assert!(matches!(env.step(Action::Grab), Err(EnvError::ResetNeeded)));
    env.reset(None, ResetOptions::default()).unwrap();
    assert!(matches!(env.step_index(3), Err(EnvError::InvalidAction(3))));
    assert!(matches!(
        env.transition(&State::new(0, 3), Action::Grab),
        Err(EnvError::InvalidState { .. })
    ));
    assert!(matches!(
        env.possible_actions(&State::new(9, 0)),
        Err(EnvError::InvalidState { agent: 9, .. })
    ));
    assert!(matches!(
        env.possible_actions(&State::new(usize::MAX, 0)),
        Err(EnvError::InvalidState { .. })
    ));
}

#[test]
fn registry_builds_vectorized_envs() {
    let mut envs = VecEnv::try_new(|| make(LINE_WORLD_ID, &json!({ "size": 3 })), 4).unwrap();
    let starts = envs.reset(Some(0)).unwrap();
    assert_eq!(starts.len(), 4);
    assert!(envs.envs().iter().all(|env| env.size() == 3));

    let steps = envs.step(vec![Action::Grab; 4]).unwrap();
    for ((obs, _), step) in starts.iter().zip(&steps) {
        assert_eq!(step.terminated, obs.agent == obs.banana);
    }
}
