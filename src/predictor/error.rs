use crate::artifacts::ArtifactError;
use std::fmt;

/// Represents the different types of errors that can occur in the survival predictor.
#[derive(Debug)]
pub enum PredictorError {
    /// Error occurred while encoding a categorical input value
    EncodingError(String),
    /// Error occurred while arranging a feature row against the feature schema
    SchemaError(String),
    /// Error occurred during the build phase
    BuildError(String),
    /// Error occurred while making predictions
    PredictionError(String),
    /// Error occurred due to invalid input parameters
    ValidationError(String),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            Self::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for PredictorError {}

impl From<ArtifactError> for PredictorError {
    fn from(err: ArtifactError) -> Self {
        PredictorError::BuildError(err.to_string())
    }
}
