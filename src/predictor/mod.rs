pub mod builder;
mod encoder;
mod error;
pub mod features;
mod model;
mod predictor;
mod utils;

pub use builder::PredictorBuilder;
pub use encoder::{CategoryEncoder, LabelEncoder};
pub use error::PredictorError;
pub use features::{FeatureSchema, PassengerRecord};
pub use model::{LogisticModel, SurvivalModel};
pub use predictor::{Prediction, Predictor};

pub(crate) use encoder::LabelEncoderData;
pub(crate) use model::LogisticModelData;

/// Information about the current state and configuration of a predictor
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    /// Feature names in the order the model consumes them
    pub feature_names: Vec<String>,
    /// Category labels the encoder accepts, in code order
    pub category_labels: Vec<String>,
    /// Model family name
    pub model_kind: String,
    /// Number of values the model expects per row
    pub n_features: usize,
}
