use lineworld::env::LINE_WORLD_ID;
use lineworld::{
    Env, EnvError, LineWorld, LineWorldConfig, Observation, RenderMode, ResetOptions, State,
    TabularEnv,
};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};
use tracing::debug;

fn to_py_err(err: EnvError) -> PyErr {
    match &err {
        EnvError::InvalidAction(_)
        | EnvError::InvalidSize(_)
        | EnvError::InvalidWindowSize { .. }
        | EnvError::UnsupportedRenderMode(_)
        | EnvError::InvalidState { .. }
        | EnvError::UnknownEnv(_)
        | EnvError::AlreadyRegistered(_)
        | EnvError::ActionCountMismatch { .. }
        | EnvError::Config(_) => PyValueError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Python's `None` render mode means no rendering.
fn build_config(
    render_mode: Option<&str>,
    size: usize,
    seed: Option<u64>,
) -> Result<LineWorldConfig, EnvError> {
    let render_mode = match render_mode {
        Some(mode) => mode.parse()?,
        None => RenderMode::None,
    };
    let config = LineWorldConfig {
        size,
        render_mode,
        seed,
        ..Default::default()
    };
    config.validate()?;
    Ok(config)
}

fn obs_dict<'py>(py: Python<'py>, obs: &Observation) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("agent", obs.agent)?;
    dict.set_item("banana", obs.banana)?;
    Ok(dict)
}

fn info_dict<'py>(py: Python<'py>, distance: usize) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("distance", distance)?;
    Ok(dict)
}

fn optional_usize(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<usize>> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// The line world behind Gymnasium-style `reset`/`step`/`render` calls.
#[pyclass(name = "SimpleLineWorldEnv", module = "lineworld_py", unsendable)]
pub struct PyLineWorld {
    inner: LineWorld,
}

#[pymethods]
impl PyLineWorld {
    #[new]
    #[pyo3(signature = (render_mode=None, size=5, seed=None))]
    fn new(render_mode: Option<String>, size: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = build_config(render_mode.as_deref(), size, seed).map_err(to_py_err)?;
        let inner = LineWorld::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn size(&self) -> usize {
        self.inner.size()
    }

    #[getter]
    fn render_mode(&self) -> Option<&'static str> {
        match self.inner.config().render_mode {
            RenderMode::None => None,
            mode => Some(mode.as_str()),
        }
    }

    /// `options` may pin the start with `{"agent": int, "banana": int}`.
    #[pyo3(signature = (seed=None, options=None))]
    fn reset<'py>(
        &mut self,
        py: Python<'py>,
        seed: Option<u64>,
        options: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<(Bound<'py, PyDict>, Bound<'py, PyDict>)> {
        let options = match options {
            Some(dict) => ResetOptions {
                agent: optional_usize(dict, "agent")?,
                banana: optional_usize(dict, "banana")?,
            },
            None => ResetOptions::default(),
        };
        let (obs, info) = self.inner.reset(seed, options).map_err(to_py_err)?;
        Ok((obs_dict(py, &obs)?, info_dict(py, info.distance)?))
    }

    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(Bound<'py, PyDict>, f32, bool, bool, Bound<'py, PyDict>)> {
        let step = self.inner.step_index(action).map_err(to_py_err)?;
        Ok((
            obs_dict(py, &step.obs)?,
            step.rew,
            step.terminated,
            step.truncated,
            info_dict(py, step.info.distance)?,
        ))
    }

    fn get_possible_actions(&self, state: (usize, usize)) -> PyResult<Vec<u8>> {
        let actions = self
            .inner
            .possible_actions(&State::from(state))
            .map_err(to_py_err)?;
        Ok(actions.into_iter().map(u8::from).collect())
    }

    fn get_all_states(&self) -> Vec<(usize, usize)> {
        self.inner.all_states().into_iter().map(Into::into).collect()
    }

    fn flatten_obs(&self, obs: &Bound<'_, PyDict>) -> PyResult<(usize, usize)> {
        let agent = optional_usize(obs, "agent")?;
        let banana = optional_usize(obs, "banana")?;
        match (agent, banana) {
            (Some(agent), Some(banana)) => Ok((agent, banana)),
            _ => Err(PyValueError::new_err(
                "observation needs integer 'agent' and 'banana' keys",
            )),
        }
    }

    /// `(pixels, (height, width, 3))` in rgb_array mode, otherwise `None`.
    fn render<'py>(
        &mut self,
        py: Python<'py>,
    ) -> PyResult<Option<(Bound<'py, PyBytes>, (usize, usize, usize))>> {
        let frame = self.inner.render().map_err(to_py_err)?;
        Ok(frame.map(|frame| (PyBytes::new(py, &frame.to_vec()), frame.shape())))
    }

    fn close(&mut self) -> PyResult<()> {
        self.inner.close().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "SimpleLineWorldEnv(size={}, render_mode={:?}, state={:?})",
            self.inner.size(),
            self.inner.config().render_mode.as_str(),
            self.inner.state().map(<(usize, usize)>::from)
        )
    }
}

/// Builds a registered environment by id, mirroring `gymnasium.make`.
#[pyfunction]
#[pyo3(name = "make", signature = (id, size=5, render_mode=None, seed=None))]
fn make_env(
    id: &str,
    size: usize,
    render_mode: Option<String>,
    seed: Option<u64>,
) -> PyResult<PyLineWorld> {
    let config = build_config(render_mode.as_deref(), size, seed).map_err(to_py_err)?;
    let options =
        serde_json::to_value(&config).map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    debug!(%id, size, "making environment from python");
    let inner = lineworld::make(id, &options).map_err(to_py_err)?;
    Ok(PyLineWorld { inner })
}

/// A Python module implemented in Rust.
/// The name of this function must match the lib.name in Cargo.toml
#[pymodule]
fn lineworld_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLineWorld>()?;
    m.add_function(wrap_pyfunction!(make_env, m)?)?;
    m.add("LINE_WORLD_ID", LINE_WORLD_ID)?;
    Ok(())
}
