use serde::Deserialize;
use std::fmt;

use super::error::PredictorError;

/// A fixed bidirectional mapping between category labels and integer codes.
///
/// The encoder is an opaque artifact produced by the training pipeline; the
/// forward transform must be pure and deterministic so that the same label
/// always maps to the same code.
pub trait CategoryEncoder: fmt::Debug + Send + Sync {
    /// Maps a category label to its integer code.
    ///
    /// Passing a label outside the encoder's known set is a precondition
    /// violation and yields a request-scoped `EncodingError`. The interactive
    /// form cannot produce one; programmatic callers can.
    fn transform(&self, label: &str) -> Result<i64, PredictorError>;

    /// Maps an integer code back to its category label, if the code is known.
    fn inverse_transform(&self, code: i64) -> Option<&str>;

    /// The known labels, in code order.
    fn labels(&self) -> &[String];
}

/// On-disk shape of the serialized encoder artifact.
#[derive(Debug, Deserialize)]
pub(crate) struct LabelEncoderData {
    pub classes: Vec<String>,
}

/// A label encoder mapping each known label to its index.
///
/// Matches the semantics of the training pipeline's encoder object: the
/// artifact stores the labels sorted, and a label's code is its position in
/// that list.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Creates an encoder from its ordered label list.
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The encoder, or a `ValidationError`
    ///   if the list is empty or contains duplicates or empty labels
    pub fn new(classes: Vec<String>) -> Result<Self, PredictorError> {
        if classes.is_empty() {
            return Err(PredictorError::ValidationError(
                "Encoder must define at least one label".into(),
            ));
        }
        if classes.iter().any(|c| c.is_empty()) {
            return Err(PredictorError::ValidationError(
                "Encoder labels cannot be empty".into(),
            ));
        }
        for (i, label) in classes.iter().enumerate() {
            if classes[..i].contains(label) {
                return Err(PredictorError::ValidationError(format!(
                    "Duplicate encoder label '{}'",
                    label
                )));
            }
        }
        Ok(Self { classes })
    }
}

impl TryFrom<LabelEncoderData> for LabelEncoder {
    type Error = PredictorError;

    fn try_from(data: LabelEncoderData) -> Result<Self, Self::Error> {
        Self::new(data.classes)
    }
}

impl CategoryEncoder for LabelEncoder {
    fn transform(&self, label: &str) -> Result<i64, PredictorError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|i| i as i64)
            .ok_or_else(|| {
                PredictorError::EncodingError(format!(
                    "Unknown category label '{}' (known labels: {})",
                    label,
                    self.classes.join(", ")
                ))
            })
    }

    fn inverse_transform(&self, code: i64) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }

    fn labels(&self) -> &[String] {
        &self.classes
    }
}
