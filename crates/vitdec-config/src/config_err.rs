use thiserror::Error;

/// Errors that can occur while loading a decoder configuration.
#[derive(Debug, Error)]
pub enum ConfigErr {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unrecognized config_version: {found}, expect {expected}")]
    Version { found: String, expected: &'static str },

    #[error("unrecognized fields in {section}: {fields:?}")]
    UnknownFields { section: &'static str, fields: Vec<String> },

    #[error("invalid trellis description: {0}")]
    Trellis(&'static str),
}
