use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesError {
    /// Invalid construction parameters or a call the configuration cannot serve.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{what} must be {expected} bits long, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("round {round} is out of range for a key schedule with {rounds} rounds")]
    RoundOutOfRange { round: usize, rounds: usize },
}

impl DesError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        DesError::Configuration(message.into())
    }
}
