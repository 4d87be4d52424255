use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::encoder::CategoryEncoder;
use super::error::PredictorError;
use super::features::{FeatureSchema, PassengerRecord, AGE, FARE, PARCH, PCLASS, SEX, SIBSP};
use super::model::SurvivalModel;

/// A thread-safe survival predictor over pre-trained model artifacts.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because all of its fields are
/// thread-safe: the model, encoder and schema are immutable once loaded and
/// shared through `Arc`.
///
/// Single-thread usage:
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use lifeboat::{FeatureSchema, LabelEncoder, LogisticModel, PassengerRecord, Predictor};
/// use std::sync::Arc;
///
/// let predictor = Predictor::builder()
///     .with_model(Arc::new(LogisticModel::new(vec![-1.1, -2.6, -0.04, -0.36, -0.06, 0.002], 4.6, [0, 1])?))
///     .with_encoder(Arc::new(LabelEncoder::new(vec!["female".into(), "male".into()])?))
///     .with_schema(Arc::new(FeatureSchema::new(vec![
///         "Pclass".into(), "Sex".into(), "Age".into(),
///         "SibSp".into(), "Parch".into(), "Fare".into(),
///     ])?))
///     .build()?;
///
/// let prediction = predictor.predict(&PassengerRecord::new(3, "male", 25, 0, 0, 7.25))?;
/// assert!((0.0..=1.0).contains(&prediction.probability));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    pub(super) model: Arc<dyn SurvivalModel>,
    pub(super) encoder: Arc<dyn CategoryEncoder>,
    pub(super) schema: Arc<FeatureSchema>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Predictor>();
    }
};

/// The outcome of one prediction request: a survival probability in `[0, 1]`
/// and a discrete class label (0 = did not survive, 1 = survived).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub probability: f64,
    pub label: i64,
}

impl Predictor {
    /// Creates a new PredictorBuilder for fluent construction
    pub fn builder() -> super::builder::PredictorBuilder {
        super::builder::PredictorBuilder::new()
    }

    /// Returns information about the predictor's current state
    pub fn info(&self) -> super::PredictorInfo {
        super::PredictorInfo {
            feature_names: self.schema.names().to_vec(),
            category_labels: self.encoder.labels().to_vec(),
            model_kind: self.model.kind().to_string(),
            n_features: self.model.n_features(),
        }
    }

    /// Makes a prediction for the given passenger record.
    ///
    /// Builds a keyed single-row table from the record, encodes the sex label
    /// through the category encoder, arranges the columns into the order the
    /// model was trained on, and runs the model's probability and class
    /// operations. The reported probability is the "survived" component of
    /// the probability pair.
    pub fn predict(&self, record: &PassengerRecord) -> Result<Prediction, PredictorError> {
        let sex_code = self.encoder.transform(&record.sex)?;

        // Construction order is irrelevant; arrange() restores model order.
        let mut values = HashMap::new();
        values.insert(AGE.to_string(), f64::from(record.age));
        values.insert(SEX.to_string(), sex_code as f64);
        values.insert(PCLASS.to_string(), f64::from(record.pclass));
        values.insert(FARE.to_string(), record.fare);
        values.insert(SIBSP.to_string(), f64::from(record.sibsp));
        values.insert(PARCH.to_string(), f64::from(record.parch));

        let row = self.schema.arrange(&values)?;
        let probabilities = self.model.predict_proba(&row)?;
        let label = self.model.predict(&row)?;

        debug!(
            "Prediction for {:?}: probability={:.6}, label={}",
            record, probabilities[1], label
        );

        Ok(Prediction {
            probability: probabilities[1],
            label,
        })
    }
}
