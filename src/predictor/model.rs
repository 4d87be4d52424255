use ndarray::Array1;
use serde::Deserialize;
use std::fmt;

use super::error::PredictorError;
use super::utils::sigmoid;

/// Inference capability over an ordered numeric feature row.
///
/// The model is an opaque artifact produced by an external training pipeline;
/// this trait is the only contract the predictor relies on. Implementations
/// must be deterministic: the same row always yields the same outputs.
///
/// The row is positional. The model has no field names at inference time, so
/// callers are responsible for arranging values into the order the model was
/// trained on (see [`super::FeatureSchema::arrange`]).
pub trait SurvivalModel: fmt::Debug + Send + Sync {
    /// Class-probability pair for the row, ordered to match [`Self::classes`].
    ///
    /// Both components lie in `[0, 1]` and sum to 1.
    fn predict_proba(&self, row: &Array1<f64>) -> Result<[f64; 2], PredictorError>;

    /// Discrete class label for the row.
    fn predict(&self, row: &Array1<f64>) -> Result<i64, PredictorError>;

    /// The class labels, in probability-pair order.
    fn classes(&self) -> [i64; 2];

    /// Number of values the model expects per row.
    fn n_features(&self) -> usize;

    /// Short human-readable name of the model family.
    fn kind(&self) -> &str;
}

/// On-disk shape of the serialized model artifact.
#[derive(Debug, Deserialize)]
pub(crate) struct LogisticModelData {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<i64>,
}

/// A binary logistic-regression classifier.
///
/// The concrete adapter for the model artifact the training pipeline exports:
/// one coefficient per feature, an intercept, and the two class labels in the
/// order the probability pair is reported.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    weights: Array1<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LogisticModel {
    /// Creates a model from raw parameters.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per feature, in feature-schema order
    /// * `intercept` - The bias term
    /// * `classes` - The two class labels, in probability-pair order
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The model, or a `ValidationError` if
    ///   the coefficients are empty or any parameter is not finite
    pub fn new(
        coefficients: Vec<f64>,
        intercept: f64,
        classes: [i64; 2],
    ) -> Result<Self, PredictorError> {
        if coefficients.is_empty() {
            return Err(PredictorError::ValidationError(
                "Model must have at least one coefficient".into(),
            ));
        }
        if coefficients.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
            return Err(PredictorError::ValidationError(
                "Model coefficients and intercept must be finite".into(),
            ));
        }
        Ok(Self {
            weights: Array1::from(coefficients),
            intercept,
            classes,
        })
    }

    fn margin(&self, row: &Array1<f64>) -> Result<f64, PredictorError> {
        if row.len() != self.weights.len() {
            return Err(PredictorError::PredictionError(format!(
                "Feature row has {} values, model expects {}",
                row.len(),
                self.weights.len()
            )));
        }
        Ok(self.weights.dot(row) + self.intercept)
    }
}

impl TryFrom<LogisticModelData> for LogisticModel {
    type Error = PredictorError;

    fn try_from(data: LogisticModelData) -> Result<Self, Self::Error> {
        let classes: [i64; 2] = data.classes.as_slice().try_into().map_err(|_| {
            PredictorError::ValidationError(format!(
                "Model must define exactly 2 classes, found {}",
                data.classes.len()
            ))
        })?;
        Self::new(data.coefficients, data.intercept, classes)
    }
}

impl SurvivalModel for LogisticModel {
    fn predict_proba(&self, row: &Array1<f64>) -> Result<[f64; 2], PredictorError> {
        let p = sigmoid(self.margin(row)?);
        Ok([1.0 - p, p])
    }

    fn predict(&self, row: &Array1<f64>) -> Result<i64, PredictorError> {
        let probabilities = self.predict_proba(row)?;
        let index = if probabilities[1] >= probabilities[0] { 1 } else { 0 };
        Ok(self.classes[index])
    }

    fn classes(&self) -> [i64; 2] {
        self.classes
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn kind(&self) -> &str {
        "logistic_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn test_model() -> LogisticModel {
        LogisticModel::new(vec![1.0, -1.0], 0.5, [0, 1]).unwrap()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = test_model();
        let probs = model.predict_proba(&array![2.0, 3.0]).unwrap();
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-12);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_label_matches_dominant_probability() {
        let model = test_model();
        let row = array![5.0, 0.0]; // strongly positive margin
        let probs = model.predict_proba(&row).unwrap();
        assert!(probs[1] > 0.5);
        assert_eq!(model.predict(&row).unwrap(), 1);

        let row = array![0.0, 5.0]; // strongly negative margin
        assert_eq!(model.predict(&row).unwrap(), 0);
    }

    #[test]
    fn test_row_length_mismatch() {
        let model = test_model();
        let result = model.predict_proba(&array![1.0]);
        assert!(matches!(result, Err(PredictorError::PredictionError(_))));
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        assert!(LogisticModel::new(vec![], 0.0, [0, 1]).is_err());
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        assert!(LogisticModel::new(vec![f64::NAN], 0.0, [0, 1]).is_err());
        assert!(LogisticModel::new(vec![1.0], f64::INFINITY, [0, 1]).is_err());
    }

    #[test]
    fn test_extreme_margins_stay_in_range() {
        let model = LogisticModel::new(vec![1000.0], 0.0, [0, 1]).unwrap();
        let probs = model.predict_proba(&array![1.0]).unwrap();
        assert!(probs[1] <= 1.0 && probs[1] > 0.999);
        let probs = model.predict_proba(&array![-1.0]).unwrap();
        assert!(probs[1] >= 0.0 && probs[1] < 0.001);
    }
}
