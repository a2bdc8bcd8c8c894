// Shell error taxonomy
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("entry index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("feature '{0}' is not enabled for this shell")]
    FeatureDisabled(&'static str),

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("action '{action}' requires field '{field}'")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    #[error("invalid shell configuration: {0}")]
    InvalidConfig(String),
}
