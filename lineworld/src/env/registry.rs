use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::debug;

use crate::env::errors::{EnvError, Result};
use crate::line_world::{LineWorld, LineWorldConfig};

/// Id the line world is discoverable under.
pub const LINE_WORLD_ID: &str = "SimpleLineWorld-v0";

pub type EnvConstructor<E> = Box<dyn Fn(&Value) -> Result<E> + Send + Sync>;

/// Maps environment ids to constructors taking a JSON options object.
pub struct Registry<E> {
    entries: HashMap<String, EnvConstructor<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, id: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn(&Value) -> Result<E> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(EnvError::AlreadyRegistered(id));
        }
        debug!(%id, "registering environment");
        self.entries.insert(id, Box::new(constructor));
        Ok(())
    }

    pub fn make(&self, id: &str, options: &Value) -> Result<E> {
        let constructor = self
            .entries
            .get(id)
            .ok_or_else(|| EnvError::UnknownEnv(id.to_string()))?;
        constructor(options)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

static DEFAULT_REGISTRY: OnceLock<Registry<LineWorld>> = OnceLock::new();

/// Process-wide registry holding the built-in environments.
pub fn default_registry() -> &'static Registry<LineWorld> {
    DEFAULT_REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        registry.entries.insert(
            LINE_WORLD_ID.to_string(),
            Box::new(|options: &Value| LineWorld::new(LineWorldConfig::from_value(options)?)),
        );
        registry
    })
}

/// Builds a registered environment, e.g. `make("SimpleLineWorld-v0", &json!({"size": 7}))`.
pub fn make(id: &str, options: &Value) -> Result<LineWorld> {
    default_registry().make(id, options)
}
