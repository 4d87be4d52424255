use ndarray::Array1;
use std::collections::HashMap;

use super::error::PredictorError;

/// Canonical column identifiers for the passenger feature set.
pub const PCLASS: &str = "Pclass";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const SIBSP: &str = "SibSp";
pub const PARCH: &str = "Parch";
pub const FARE: &str = "Fare";

/// The authoritative ordered list of feature names the model was trained on.
///
/// The schema defines both the required input fields and the exact column
/// order the model expects. The model consumes positional values only, so a
/// row that is not arranged through [`FeatureSchema::arrange`] would silently
/// produce a wrong prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Creates a schema from its ordered name list.
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The schema, or a `ValidationError`
    ///   if the list is empty or contains duplicate or empty names
    pub fn new(names: Vec<String>) -> Result<Self, PredictorError> {
        if names.is_empty() {
            return Err(PredictorError::ValidationError(
                "Feature name list cannot be empty".into(),
            ));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(PredictorError::ValidationError(
                "Feature names cannot be empty".into(),
            ));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(PredictorError::ValidationError(format!(
                    "Duplicate feature name '{}'",
                    name
                )));
            }
        }
        Ok(Self { names })
    }

    /// The feature names, in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns in the schema.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Arranges a keyed single-row table into the positional order the model
    /// expects.
    ///
    /// The construction order of `values` is irrelevant; only the schema
    /// order matters. Keys not named by the schema are ignored.
    ///
    /// # Returns
    /// * `Result<Array1<f64>, PredictorError>` - The ordered row, or a
    ///   `SchemaError` naming the first missing column
    pub fn arrange(&self, values: &HashMap<String, f64>) -> Result<Array1<f64>, PredictorError> {
        let mut row = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let value = values.get(name).copied().ok_or_else(|| {
                PredictorError::SchemaError(format!("Missing value for feature '{}'", name))
            })?;
            row.push(value);
        }
        Ok(Array1::from(row))
    }
}

/// The six passenger attributes collected per prediction request.
///
/// Exists only for the duration of one prediction call and is never
/// persisted. The sex field carries the raw category label; encoding to the
/// model's integer code happens inside the predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerRecord {
    /// Ticket class, 1-3
    pub pclass: u8,
    /// Category label, e.g. "male" or "female"
    pub sex: String,
    /// Age in years, 0-80
    pub age: u8,
    /// Siblings/spouses aboard
    pub sibsp: u8,
    /// Parents/children aboard
    pub parch: u8,
    /// Ticket fare
    pub fare: f64,
}

impl PassengerRecord {
    pub fn new(
        pclass: u8,
        sex: impl Into<String>,
        age: u8,
        sibsp: u8,
        parch: u8,
        fare: f64,
    ) -> Self {
        Self {
            pclass,
            sex: sex.into(),
            age,
            sibsp,
            parch,
            fare,
        }
    }
}
