use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::predictor::{
    CategoryEncoder, FeatureSchema, LabelEncoder, LabelEncoderData, LogisticModel,
    LogisticModelData, SurvivalModel,
};

/// Default directory the artifact files are read from, relative to the
/// process working directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

const MODEL_FILE: &str = "titanic_model.json";
const ENCODER_FILE: &str = "sex_encoder.json";
const FEATURE_NAMES_FILE: &str = "feature_names.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Malformed artifact {path}: {reason}")]
    Malformed { path: String, reason: String },
    #[error("Invalid artifact {path}: {reason}")]
    Invalid { path: String, reason: String },
    #[error("Model expects {model} features but the feature list has {schema}")]
    ShapeMismatch { model: usize, schema: usize },
}

/// The three immutable objects the external training pipeline persists:
/// a trained model, a categorical encoder and the ordered feature name list.
///
/// Loaded once, shared read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: Arc<dyn SurvivalModel>,
    pub encoder: Arc<dyn CategoryEncoder>,
    pub schema: Arc<FeatureSchema>,
}

/// Locates and deserializes the artifact files.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifacts_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store over the default artifacts directory
    pub fn new_default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> Self {
        Self {
            artifacts_dir: artifacts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts_dir.join(MODEL_FILE)
    }

    pub fn encoder_path(&self) -> PathBuf {
        self.artifacts_dir.join(ENCODER_FILE)
    }

    pub fn feature_names_path(&self) -> PathBuf {
        self.artifacts_dir.join(FEATURE_NAMES_FILE)
    }

    /// Reports whether all three artifact files exist, without
    /// deserializing them.
    pub fn is_ready(&self) -> bool {
        let model_path = self.model_path();
        let encoder_path = self.encoder_path();
        let names_path = self.feature_names_path();
        log::info!("Checking artifact files:");
        log::info!("  Model path: {:?} (exists: {})", model_path, model_path.exists());
        log::info!("  Encoder path: {:?} (exists: {})", encoder_path, encoder_path.exists());
        log::info!("  Feature names path: {:?} (exists: {})", names_path, names_path.exists());
        model_path.exists() && encoder_path.exists() && names_path.exists()
    }

    /// Deserializes all three artifacts and validates their joint shape.
    ///
    /// A missing, unreadable or malformed file fails the load; at process
    /// startup that failure is fatal since no prediction can be served
    /// without the full bundle.
    pub fn load(&self) -> Result<Artifacts, ArtifactError> {
        log::info!("Loading artifacts from {:?}", self.artifacts_dir);

        let model = self.load_model()?;
        let encoder = self.load_encoder()?;
        let schema = self.load_feature_names()?;

        if model.n_features() != schema.len() {
            log::error!(
                "Artifact shape mismatch: model has {} coefficients, feature list has {} names",
                model.n_features(),
                schema.len()
            );
            return Err(ArtifactError::ShapeMismatch {
                model: model.n_features(),
                schema: schema.len(),
            });
        }

        log::info!(
            "Artifacts loaded: {} model, features {:?}, labels {:?}",
            model.kind(),
            schema.names(),
            encoder.labels()
        );

        Ok(Artifacts {
            model: Arc::new(model),
            encoder: Arc::new(encoder),
            schema: Arc::new(schema),
        })
    }

    fn load_model(&self) -> Result<LogisticModel, ArtifactError> {
        let path = self.model_path();
        let data: LogisticModelData = self.read_json(&path)?;
        LogisticModel::try_from(data).map_err(|e| ArtifactError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn load_encoder(&self) -> Result<LabelEncoder, ArtifactError> {
        let path = self.encoder_path();
        let data: LabelEncoderData = self.read_json(&path)?;
        LabelEncoder::try_from(data).map_err(|e| ArtifactError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn load_feature_names(&self) -> Result<FeatureSchema, ArtifactError> {
        let path = self.feature_names_path();
        let names: Vec<String> = self.read_json(&path)?;
        FeatureSchema::new(names).map_err(|e| ArtifactError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ArtifactError> {
        if !path.exists() {
            log::error!("Artifact file does not exist: {:?}", path);
            return Err(ArtifactError::NotFound(path.display().to_string()));
        }
        let file = fs::File::open(path)?;
        serde_json::from_reader(io::BufReader::new(file)).map_err(|e| ArtifactError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

lazy_static! {
    static ref ARTIFACT_CACHE: Mutex<Option<Artifacts>> = Mutex::new(None);
}

/// Loads the artifact bundle at most once per process.
///
/// The first successful call performs the load and caches the bundle; every
/// later call hands out shared references to the same objects regardless of
/// the store it is given. The guard also prevents a concurrent first use
/// from loading twice. A failed load caches nothing.
pub fn load_cached(store: &ArtifactStore) -> Result<Artifacts, ArtifactError> {
    let mut slot = ARTIFACT_CACHE
        .lock()
        .expect("artifact cache lock poisoned");
    if let Some(artifacts) = slot.as_ref() {
        log::debug!("Reusing cached artifacts");
        return Ok(artifacts.clone());
    }
    let artifacts = store.load()?;
    *slot = Some(artifacts.clone());
    Ok(artifacts)
}
