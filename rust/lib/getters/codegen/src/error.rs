use thiserror::Error;

/// Failures outside a generation pass proper: reading inputs, loading
/// configuration, writing outputs. Malformed annotations are diagnostics,
/// never errors.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid forest: {0}")]
    Forest(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
