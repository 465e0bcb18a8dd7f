use thiserror::Error;

/// Errors raised while loading a configuration.  Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is empty: expected a lawn header \"<width> <height>\"")]
    MissingLawn,

    #[error("line {line}: invalid lawn header {text:?}: {reason}")]
    InvalidLawn {
        line:   usize,
        text:   String,
        reason: String,
    },

    #[error("line {line}: invalid mower {text:?}: {reason}")]
    InvalidMower {
        line:   usize,
        text:   String,
        reason: String,
    },

    #[error("line {line}: illegal instruction {symbol:?}: expected one of L, R, F, B")]
    InvalidInstruction { line: usize, symbol: char },

    #[error("line {line}: mower has no instruction line")]
    MissingInstructions { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
