use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Action, Info, LineModel, LineWorldConfig, Observation, State};
use crate::env::{Env, EnvError, Result, Step, TabularEnv, Transition};
use crate::render::{Frame, RenderMode, RenderView, Renderer, renderer_for};

/// Pins for the start of an episode; unpinned positions are drawn at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetOptions {
    pub agent: Option<usize>,
    pub banana: Option<usize>,
}

impl ResetOptions {
    pub fn at(agent: usize, banana: usize) -> Self {
        Self {
            agent: Some(agent),
            banana: Some(banana),
        }
    }
}

/// An agent on a line that has to walk to a banana and grab it.
pub struct LineWorld {
    config: LineWorldConfig,
    model: LineModel,
    rng: StdRng,
    state: Option<State>,
    last_action: Option<Action>,
    terminated: bool,
    renderer: Option<Box<dyn Renderer>>,
}

impl fmt::Debug for LineWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWorld")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("last_action", &self.last_action)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

impl LineWorld {
    pub fn new(config: LineWorldConfig) -> Result<Self> {
        config.validate()?;
        let model = LineModel::from_config(&config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let renderer = renderer_for(&config)?;
        info!(size = config.size, render_mode = %config.render_mode, "created line world");

        Ok(Self {
            config,
            model,
            rng,
            state: None,
            last_action: None,
            terminated: false,
            renderer,
        })
    }

    pub fn size(&self) -> usize {
        self.model.size()
    }

    pub fn config(&self) -> &LineWorldConfig {
        &self.config
    }

    /// Current state, `None` until the first reset.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Replaces the live state, e.g. to replay a solver's start state.
    pub fn set_state(&mut self, state: State) -> Result<()> {
        self.model.check(&state)?;
        self.state = Some(state);
        self.terminated = false;
        Ok(())
    }

    /// Steps with a raw action index as received over an untyped boundary.
    pub fn step_index(&mut self, action: i64) -> Result<Step<Observation, Info>> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    fn render_frame(&mut self) -> Result<Option<Frame>> {
        let (Some(renderer), Some(state)) = (self.renderer.as_mut(), self.state) else {
            return Ok(None);
        };
        let view = RenderView {
            size: self.model.size(),
            state,
            last_action: self.last_action,
        };
        renderer.render(&view)
    }
}

impl Env for LineWorld {
    type Obs = Observation;
    type Act = Action;
    type Info = Info;
    type Options = ResetOptions;

    fn reset(&mut self, seed: Option<u64>, options: ResetOptions) -> Result<(Observation, Info)> {
        // a rejected reset leaves the generator untouched
        let size = self.model.size();
        if options.agent.is_some_and(|a| a >= size) || options.banana.is_some_and(|b| b >= size) {
            return Err(EnvError::InvalidState {
                agent: options.agent.unwrap_or_default(),
                banana: options.banana.unwrap_or_default(),
                size,
            });
        }

        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let mut state = self.model.sample_state(&mut self.rng);
        if let Some(agent) = options.agent {
            state.agent = agent;
        }
        if let Some(banana) = options.banana {
            state.banana = banana;
        }

        self.state = Some(state);
        self.last_action = None;
        self.terminated = false;
        info!(agent = state.agent, banana = state.banana, ?seed, "reset line world");

        if self.config.render_mode == RenderMode::Human {
            self.render_frame()?;
        }
        Ok((state.into(), state.into()))
    }

    fn step(&mut self, act: Action) -> Result<Step<Observation, Info>> {
        let state = self.state.ok_or(EnvError::ResetNeeded)?;
        if self.terminated {
            warn!(?act, "stepping a line world whose episode already terminated");
        }

        let outcome = self.model.transition(&state, act)?;
        self.state = Some(outcome.next);
        self.last_action = Some(act);
        self.terminated = outcome.terminated;
        debug!(
            ?act,
            agent = outcome.next.agent,
            banana = outcome.next.banana,
            rew = outcome.rew,
            terminated = outcome.terminated,
            "step"
        );

        if self.config.render_mode == RenderMode::Human {
            self.render_frame()?;
        }
        Ok(Step {
            obs: outcome.next.into(),
            rew: outcome.rew,
            terminated: outcome.terminated,
            truncated: false,
            info: outcome.next.into(),
        })
    }

    fn render(&mut self) -> Result<Option<Frame>> {
        match self.config.render_mode {
            RenderMode::RgbArray => self.render_frame(),
            RenderMode::Human | RenderMode::None => Ok(None),
        }
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.close()?;
        }
        Ok(())
    }
}

impl TabularEnv for LineWorld {
    type State = State;

    fn all_states(&self) -> Vec<State> {
        self.model.all_states()
    }

    fn possible_actions(&self, state: &State) -> Result<Vec<Action>> {
        self.model.possible_actions(state)
    }

    fn transition(&self, state: &State, act: Action) -> Result<Transition<State>> {
        self.model.transition(state, act)
    }

    fn state_of(obs: &Observation) -> State {
        obs.flatten()
    }
}
