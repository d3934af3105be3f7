use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClonalgError {
    #[error("Antigen space of {antigen_space} symbols cannot hold a sequence of length {sequence_length}")]
    Range {
        antigen_space: usize,
        sequence_length: usize,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClonalgError>;
