use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirfoilError>;

#[derive(Debug, Error)]
pub enum AirfoilError {
    /// A shape, grid, or configuration value is outside of its domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The geometry has no extent along the axis an operation needs to interpolate on
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("malformed data on line {line}: {reason}")]
    MalformedData { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl AirfoilError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AirfoilError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
