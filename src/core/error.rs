use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid arc sweep: {0}° (magnitude must be below 360°)")]
    InvalidArc(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Rasterization unavailable: {0}")]
    RasterUnavailable(String),

    #[error("Rasterization failed: {0}")]
    RasterFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
