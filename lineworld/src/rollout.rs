// lineworld/src/rollout.rs
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::env::{Env, EnvError, Result, Sample, TabularEnv, Trajectory};

/// Chooses the next action from the current observation.
pub trait Policy<E: Env> {
    fn act(&mut self, env: &E, obs: &E::Obs) -> Result<E::Act>;
}

/// Picks uniformly among the legal actions of the observed state.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<E: TabularEnv> Policy<E> for RandomPolicy {
    fn act(&mut self, env: &E, obs: &E::Obs) -> Result<E::Act> {
        let actions = env.possible_actions(&E::state_of(obs))?;
        actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EnvError::NoLegalAction)
    }
}

/// Adapts a closure into a [`Policy`].
pub struct FnPolicy<F>(pub F);

impl<E, F> Policy<E> for FnPolicy<F>
where
    E: Env,
    F: FnMut(&E::Obs) -> E::Act,
{
    fn act(&mut self, _env: &E, obs: &E::Obs) -> Result<E::Act> {
        Ok((self.0)(obs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    /// Step cap; the step that hits it is marked truncated.
    pub max_steps: Option<u64>,
    /// Reset seed for the first episode; episode `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(100),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub length: usize,
    pub total_reward: f32,
    pub solved: bool,
    pub truncated: bool,
}

impl<O, A, I> From<&Trajectory<O, A, I>> for EpisodeStats {
    fn from(trajectory: &Trajectory<O, A, I>) -> Self {
        Self {
            length: trajectory.len(),
            total_reward: trajectory.total_reward(),
            solved: trajectory.terminated(),
            truncated: trajectory.truncated(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RolloutStats {
    pub episodes: Vec<EpisodeStats>,
    pub total_steps: u64,
    pub elapsed: Duration,
}

impl RolloutStats {
    pub fn mean_return(&self) -> f32 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.episodes.iter().map(|e| e.total_reward).sum();
        sum / self.episodes.len() as f32
    }

    pub fn solved(&self) -> usize {
        self.episodes.iter().filter(|e| e.solved).count()
    }
}

// The basic RL loop
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    cfg: &RolloutConfig,
) -> Result<Trajectory<E::Obs, E::Act, E::Info>>
where
    E: Env,
    P: Policy<E>,
{
    let (mut obs, _info) = env.reset(cfg.seed, E::Options::default())?;
    let mut trajectory = Trajectory::new();

    loop {
        if cfg
            .max_steps
            .is_some_and(|max| trajectory.len() as u64 >= max)
        {
            if let Some(last) = trajectory.samples.last_mut() {
                last.truncated = true;
            }
            debug!(id = %trajectory.id, steps = trajectory.len(), "episode hit step cap");
            break;
        }

        let act = policy.act(env, &obs)?;
        let step = env.step(act.clone())?;
        let done = step.done();
        trajectory.samples.push(Sample {
            obs,
            act,
            rew: step.rew,
            next_obs: step.obs.clone(),
            terminated: step.terminated,
            truncated: step.truncated,
            info: step.info,
        });

        if done {
            break;
        }
        obs = step.obs;
    }

    info!(
        id = %trajectory.id,
        steps = trajectory.len(),
        total_reward = trajectory.total_reward(),
        terminated = trajectory.terminated(),
        "episode finished"
    );
    Ok(trajectory)
}

pub fn run_episodes<E, P>(
    env: &mut E,
    policy: &mut P,
    cfg: &RolloutConfig,
    episodes: usize,
) -> Result<RolloutStats>
where
    E: Env,
    P: Policy<E>,
{
    let started = Instant::now();
    let mut stats = Vec::with_capacity(episodes);
    let mut total_steps = 0;

    for i in 0..episodes {
        let episode_cfg = RolloutConfig {
            seed: cfg.seed.map(|s| s.wrapping_add(i as u64)),
            ..cfg.clone()
        };
        let trajectory = run_episode(env, policy, &episode_cfg)?;
        total_steps += trajectory.len() as u64;
        stats.push(EpisodeStats::from(&trajectory));
    }

    Ok(RolloutStats {
        episodes: stats,
        total_steps,
        elapsed: started.elapsed(),
    })
}
