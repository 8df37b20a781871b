use super::{Env, EnvError, Result, Step};
use tracing::debug;

/// Steps a batch of independent environments in lockstep.
pub struct VecEnv<E> {
    envs: Vec<E>,
}

impl<E: Env> VecEnv<E> {
    pub fn try_new<F>(make_env: F, num_envs: usize) -> Result<Self>
    where
        F: Fn() -> Result<E>,
    {
        let envs = (0..num_envs).map(|_| make_env()).collect::<Result<_>>()?;
        Ok(Self { envs })
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    pub fn envs(&self) -> &[E] {
        &self.envs
    }

    /// Resets every environment; with a seed, environment `i` gets `seed + i`.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Vec<(E::Obs, E::Info)>> {
        debug!(num_envs = self.envs.len(), ?seed, "resetting vectorized env");
        self.envs
            .iter_mut()
            .enumerate()
            .map(|(i, env)| env.reset(seed.map(|s| s.wrapping_add(i as u64)), E::Options::default()))
            .collect()
    }

    pub fn step(&mut self, actions: Vec<E::Act>) -> Result<Vec<Step<E::Obs, E::Info>>> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::ActionCountMismatch {
                expected: self.envs.len(),
                got: actions.len(),
            });
        }

        self.envs
            .iter_mut()
            .zip(actions)
            .map(|(env, action)| env.step(action))
            .collect()
    }

    pub fn close(&mut self) -> Result<()> {
        for env in &mut self.envs {
            env.close()?;
        }
        Ok(())
    }
}
