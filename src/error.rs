use thiserror::Error;

use crate::Float;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: Float },

    #[error("bodies `{first}` and `{second}` are both flagged as the primary")]
    MultiplePrimaries { first: String, second: String },

    #[error("bodies `{first}` and `{second}` start at the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("window error: {0}")]
    Window(String),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
