use log::info;
use std::sync::Arc;

use super::encoder::CategoryEncoder;
use super::error::PredictorError;
use super::features::FeatureSchema;
use super::model::SurvivalModel;
use super::predictor::Predictor;
use crate::artifacts::{ArtifactStore, Artifacts};

/// A builder for constructing a Predictor with a fluent interface.
///
/// The three parts can come from a loaded artifact bundle
/// ([`PredictorBuilder::with_artifacts`]) or be supplied individually, which
/// keeps the serialization format swappable: anything exposing the model,
/// encoder and schema capabilities can stand in for the on-disk adapters.
#[derive(Default, Debug)]
pub struct PredictorBuilder {
    model: Option<Arc<dyn SurvivalModel>>,
    encoder: Option<Arc<dyn CategoryEncoder>>,
    schema: Option<Arc<FeatureSchema>>,
}

impl PredictorBuilder {
    /// Creates a new empty PredictorBuilder instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model capability.
    pub fn with_model(mut self, model: Arc<dyn SurvivalModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the categorical encoder capability.
    pub fn with_encoder(mut self, encoder: Arc<dyn CategoryEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Sets the feature schema.
    pub fn with_schema(mut self, schema: Arc<FeatureSchema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Takes all three parts from a loaded artifact bundle.
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The builder instance, or a
    ///   `BuildError` if any part was already set
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use lifeboat::{ArtifactStore, Predictor};
    ///
    /// let artifacts = ArtifactStore::new_default().load()?;
    /// let predictor = Predictor::builder()
    ///     .with_artifacts(artifacts)?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_artifacts(mut self, artifacts: Artifacts) -> Result<Self, PredictorError> {
        if self.model.is_some() || self.encoder.is_some() || self.schema.is_some() {
            return Err(PredictorError::BuildError(
                "Model, encoder and schema already set".to_string(),
            ));
        }
        self.model = Some(artifacts.model);
        self.encoder = Some(artifacts.encoder);
        self.schema = Some(artifacts.schema);
        Ok(self)
    }

    /// Loads the artifact files from the given store and takes all three
    /// parts from the result.
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The builder instance, or a
    ///   `BuildError` if any part was already set or an artifact is missing,
    ///   unreadable or malformed
    pub fn with_artifact_store(self, store: &ArtifactStore) -> Result<Self, PredictorError> {
        let artifacts = store.load()?;
        self.with_artifacts(artifacts)
    }

    /// Builds and returns the final Predictor instance
    ///
    /// # Returns
    /// * `Result<Predictor, PredictorError>` - The constructed Predictor, or
    ///   a `BuildError` if:
    ///   - Any of the model, encoder or schema is missing
    ///   - The model's feature count does not match the schema length
    pub fn build(self) -> Result<Predictor, PredictorError> {
        let model = self
            .model
            .ok_or_else(|| PredictorError::BuildError("No model set".to_string()))?;
        let encoder = self
            .encoder
            .ok_or_else(|| PredictorError::BuildError("No encoder set".to_string()))?;
        let schema = self
            .schema
            .ok_or_else(|| PredictorError::BuildError("No feature schema set".to_string()))?;

        if model.n_features() != schema.len() {
            return Err(PredictorError::BuildError(format!(
                "Model expects {} features but the schema has {}",
                model.n_features(),
                schema.len()
            )));
        }

        info!(
            "Predictor built: {} model, {} features, {} category labels",
            model.kind(),
            schema.len(),
            encoder.labels().len()
        );

        Ok(Predictor {
            model,
            encoder,
            schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::features::{AGE, FARE, PARCH, PCLASS, SEX, SIBSP};
    use crate::predictor::{LabelEncoder, LogisticModel};

    fn parts() -> (
        Arc<dyn SurvivalModel>,
        Arc<dyn CategoryEncoder>,
        Arc<FeatureSchema>,
    ) {
        let model =
            LogisticModel::new(vec![-1.1, -2.6, -0.04, -0.36, -0.06, 0.002], 4.6, [0, 1]).unwrap();
        let encoder =
            LabelEncoder::new(vec!["female".to_string(), "male".to_string()]).unwrap();
        let schema = FeatureSchema::new(
            [PCLASS, SEX, AGE, SIBSP, PARCH, FARE]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        (Arc::new(model), Arc::new(encoder), Arc::new(schema))
    }

    #[test]
    fn test_missing_parts_rejected() {
        let (model, encoder, _) = parts();
        let result = PredictorBuilder::new()
            .with_model(model)
            .with_encoder(encoder)
            .build();
        assert!(matches!(result, Err(PredictorError::BuildError(_))));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let (_, encoder, schema) = parts();
        let narrow_model = LogisticModel::new(vec![1.0], 0.0, [0, 1]).unwrap();
        let result = PredictorBuilder::new()
            .with_model(Arc::new(narrow_model))
            .with_encoder(encoder)
            .with_schema(schema)
            .build();
        assert!(matches!(result, Err(PredictorError::BuildError(_))));
    }

    #[test]
    fn test_full_build() {
        let (model, encoder, schema) = parts();
        let predictor = PredictorBuilder::new()
            .with_model(model)
            .with_encoder(encoder)
            .with_schema(schema)
            .build();
        assert!(predictor.is_ok());
    }
}
