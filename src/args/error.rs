use thiserror::Error;

/// Errors raised while declaring arguments or parsing an argument vector.
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("argument '{name}' is already registered")]
    Duplicate { name: String },

    #[error("argument names must be non-empty")]
    InvalidName,

    #[error("cannot register '{name}': registry is locked after parsing")]
    RegistryLocked { name: String },

    #[error("unrecognized argument '{token}'")]
    Unrecognized { token: String },

    #[error("'{flag}' expects {expected} value(s), {available} available")]
    InsufficientArguments {
        flag: String,
        expected: usize,
        available: usize,
    },

    #[error("'{flag}' failed: {source}")]
    ActionFailure {
        flag: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ArgError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ArgError::Unrecognized { .. } => 2,
            ArgError::InsufficientArguments { .. } => 3,
            ArgError::ActionFailure { .. } => 4,
            ArgError::Duplicate { .. } | ArgError::InvalidName => 5,
            ArgError::RegistryLocked { .. } => 6,
        }
    }
}
