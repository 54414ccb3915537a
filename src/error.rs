use thiserror::Error;

/// Rejected rocket construction. The only domain error: nothing is created
/// and nothing is logged when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("launch angle {angle}° is outside [0, 90]")]
    InvalidAngle { angle: f64 },

    #[error("launch velocity {velocity} must be positive and at most {max}")]
    InvalidVelocity { velocity: f64, max: f64 },
}

/// Failure while reading or writing persisted launch parameters.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rocket #{index} has invalid launch parameters: {source}")]
    InvalidRocket {
        index: usize,
        #[source]
        source: LaunchError,
    },
}
