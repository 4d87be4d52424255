//! A thread-safe Titanic survival predictor serving pre-trained model
//! artifacts, with an interactive terminal form for one-off predictions.
//!
//! The crate is a load-transform-predict-render pipeline: an [`ArtifactStore`]
//! deserializes the trained model, the categorical encoder and the feature
//! name list the training pipeline persisted; a [`Predictor`] encodes and
//! arranges one passenger record into the positional feature row the model
//! expects; the demo binary collects the record from fixed input controls
//! and renders the survival probability and class label.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lifeboat::{FeatureSchema, LabelEncoder, LogisticModel, PassengerRecord, Predictor};
//! use std::sync::Arc;
//!
//! let model = LogisticModel::new(
//!     vec![-1.1, -2.6, -0.04, -0.36, -0.06, 0.002],
//!     4.6,
//!     [0, 1],
//! )?;
//! let encoder = LabelEncoder::new(vec!["female".into(), "male".into()])?;
//! let schema = FeatureSchema::new(vec![
//!     "Pclass".into(), "Sex".into(), "Age".into(),
//!     "SibSp".into(), "Parch".into(), "Fare".into(),
//! ])?;
//!
//! let predictor = Predictor::builder()
//!     .with_model(Arc::new(model))
//!     .with_encoder(Arc::new(encoder))
//!     .with_schema(Arc::new(schema))
//!     .build()?;
//!
//! let prediction = predictor.predict(&PassengerRecord::new(3, "male", 25, 0, 0, 7.25))?;
//! println!("Survival probability: {:.3}", prediction.probability);
//! println!("Predicted class: {}", prediction.label);
//! # Ok(())
//! # }
//! ```
//!
//! # Loading persisted artifacts
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lifeboat::{load_cached, ArtifactStore, Predictor};
//!
//! let store = ArtifactStore::new_default();
//! let artifacts = load_cached(&store)?; // loads at most once per process
//! let predictor = Predictor::builder().with_artifacts(artifacts)?.build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The predictor is immutable once built and can be shared across threads
//! using `Arc`; repeated predictions for the same record are bit-identical.

pub mod artifacts;
pub mod form;
pub mod predictor;

pub use artifacts::{load_cached, ArtifactError, ArtifactStore, Artifacts, DEFAULT_ARTIFACTS_DIR};
pub use form::{ControlError, PassengerForm};
pub use predictor::{
    CategoryEncoder, FeatureSchema, LabelEncoder, LogisticModel, PassengerRecord, Prediction,
    Predictor, PredictorBuilder, PredictorError, PredictorInfo, SurvivalModel,
};

pub fn init_logger() {
    env_logger::init();
}
