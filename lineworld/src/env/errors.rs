use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid action: {0}")]
    InvalidAction(i64),

    #[error("invalid size {0}: the line must hold at least one cell")]
    InvalidSize(usize),

    #[error("unsupported render mode: {0:?}")]
    UnsupportedRenderMode(String),

    #[error("state (agent={agent}, banana={banana}) is outside a line of size {size}")]
    InvalidState {
        agent: usize,
        banana: usize,
        size: usize,
    },

    #[error("step called before reset")]
    ResetNeeded,

    #[error("action count {got} doesn't match environment count {expected}")]
    ActionCountMismatch { expected: usize, got: usize },

    #[error("no environment registered as {0:?}")]
    UnknownEnv(String),

    #[error("environment {0:?} is already registered")]
    AlreadyRegistered(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("render error: {0}")]
    Render(#[from] std::io::Error),

    #[error("window size {size} is outside 1..={max} pixels")]
    InvalidWindowSize { size: usize, max: usize },

    #[error("no legal action in the observed state")]
    NoLegalAction,
}

pub type Result<T> = std::result::Result<T, EnvError>;
