use serde::{Deserialize, Serialize};

use crate::env::EnvError;

/// Discrete actions, numbered as the environment's action space exposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Action {
    MoveLeft = 0,
    MoveRight = 1,
    Grab = 2,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Grab];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Signed displacement along the line; zero for `Grab`.
    pub fn delta(self) -> isize {
        match self {
            Action::MoveLeft => -1,
            Action::MoveRight => 1,
            Action::Grab => 0,
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::MoveLeft),
            1 => Ok(Action::MoveRight),
            2 => Ok(Action::Grab),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Action::try_from(i64::from(value))
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.index()
    }
}
