use super::predictor::PricePredictor;
use crate::domain::errors::{InferenceError, ModelLoadError};
use crate::domain::features::FeatureRecord;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::DecisionTreeClassifier;
use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Per-feature standardization applied before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn transform(&self, values: &mut [f64]) {
        for ((value, mean), scale) in values.iter_mut().zip(&self.mean).zip(&self.scale) {
            // Constant columns are stored with scale 0
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *value = (*value - mean) / scale;
        }
    }
}

/// Serialized smartcore classifier, tagged by kind in the artifact.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum Classifier {
    RandomForest(RandomForestClassifier<f64, i64, DenseMatrix<f64>, Vec<i64>>),
    DecisionTree(DecisionTreeClassifier<f64, i64, DenseMatrix<f64>, Vec<i64>>),
}

impl Classifier {
    pub fn kind(&self) -> &'static str {
        match self {
            Classifier::RandomForest(_) => "random_forest",
            Classifier::DecisionTree(_) => "decision_tree",
        }
    }

    /// Column count the classifier was fitted on, read back from its serialized trees.
    fn input_width(&self) -> Option<usize> {
        let value = serde_json::to_value(self).ok()?;
        let model = value.get("model")?;
        let width = match self {
            Classifier::DecisionTree(_) => model.get("num_features")?.as_u64()?,
            Classifier::RandomForest(_) => model
                .get("trees")?
                .as_array()?
                .iter()
                .filter_map(|tree| tree.get("num_features").and_then(|n| n.as_u64()))
                .max()?,
        };
        usize::try_from(width).ok()
    }

    fn predict(&self, input: &DenseMatrix<f64>) -> Result<Vec<i64>, InferenceError> {
        // smartcore panics rather than erroring when a row is narrower than the fitted trees
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self {
            Classifier::RandomForest(model) => model.predict(input),
            Classifier::DecisionTree(model) => model.predict(input),
        }));

        match outcome {
            Ok(result) => {
                result.map_err(|e| InferenceError::Model(format!("Prediction failed: {}", e)))
            }
            Err(_) => {
                error!("{} classifier panicked during prediction", self.kind());
                Err(InferenceError::Model(format!(
                    "{} classifier rejected the input row",
                    self.kind()
                )))
            }
        }
    }
}

/// On-disk layout of the trained pipeline.
#[derive(Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub classifier: Classifier,
}

/// Trained pipeline backed by a smartcore classifier.
pub struct SmartCorePipeline {
    artifact: PipelineArtifact,
    model_path: PathBuf,
}

impl SmartCorePipeline {
    /// Reads and validates the artifact. Any failure here is fatal to the session.
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let model_path = model_path.as_ref().to_path_buf();

        if !model_path.exists() {
            error!("ML Model file not found at {:?}", model_path);
            return Err(ModelLoadError::NotFound { path: model_path });
        }

        let mut buffer = Vec::new();
        if let Err(e) = File::open(&model_path).and_then(|mut file| file.read_to_end(&mut buffer)) {
            error!("Failed to read model file: {}", e);
            return Err(ModelLoadError::Unreadable {
                path: model_path,
                source: e,
            });
        }

        let artifact: PipelineArtifact = match serde_json::from_slice(&buffer) {
            Ok(artifact) => artifact,
            Err(e) => {
                error!("Failed to deserialize ML model: {}", e);
                return Err(ModelLoadError::Malformed {
                    path: model_path,
                    reason: e.to_string(),
                });
            }
        };

        let pipeline = Self::from_artifact(artifact, model_path)?;
        info!(
            "Successfully loaded {} pipeline from {:?}",
            pipeline.artifact.classifier.kind(),
            pipeline.model_path
        );
        Ok(pipeline)
    }

    pub fn from_artifact(
        artifact: PipelineArtifact,
        model_path: PathBuf,
    ) -> Result<Self, ModelLoadError> {
        if artifact.feature_names.is_empty() {
            return Err(ModelLoadError::InvalidSchema {
                path: model_path,
                reason: "no feature names declared".to_string(),
            });
        }

        let width = artifact.feature_names.len();
        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != width || scaler.scale.len() != width {
                return Err(ModelLoadError::InvalidSchema {
                    path: model_path,
                    reason: format!(
                        "scaler has {} means and {} scales for {} features",
                        scaler.mean.len(),
                        scaler.scale.len(),
                        width
                    ),
                });
            }
        }

        match artifact.classifier.input_width() {
            Some(trained) if trained == width => {}
            Some(trained) => {
                return Err(ModelLoadError::InvalidSchema {
                    path: model_path,
                    reason: format!(
                        "{} classifier was trained on {} features but {} are declared",
                        artifact.classifier.kind(),
                        trained,
                        width
                    ),
                });
            }
            None => {
                return Err(ModelLoadError::InvalidSchema {
                    path: model_path,
                    reason: format!(
                        "{} classifier does not record its input width",
                        artifact.classifier.kind()
                    ),
                });
            }
        }

        // Dry run so a classifier that cannot score a row of this width fails at startup
        let zero_row = DenseMatrix::from_2d_vec(&vec![vec![0.0; width]]).map_err(|e| {
            ModelLoadError::InvalidSchema {
                path: model_path.clone(),
                reason: format!("cannot build a {}-column row: {}", width, e),
            }
        })?;
        if let Err(e) = artifact.classifier.predict(&zero_row) {
            return Err(ModelLoadError::InvalidSchema {
                path: model_path,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            artifact,
            model_path,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    fn check_schema(&self, record: &FeatureRecord) -> Result<(), InferenceError> {
        let matches = record.len() == self.artifact.feature_names.len()
            && record
                .names()
                .zip(&self.artifact.feature_names)
                .all(|(actual, expected)| actual == expected);

        if matches {
            Ok(())
        } else {
            Err(InferenceError::SchemaMismatch {
                expected: self.artifact.feature_names.clone(),
                actual: record.names().map(str::to_string).collect(),
            })
        }
    }
}

impl PricePredictor for SmartCorePipeline {
    fn predict(&self, record: &FeatureRecord) -> Result<i64, InferenceError> {
        self.check_schema(record)?;

        let mut input_vec = record.to_f64_vector();
        if let Some(scaler) = &self.artifact.scaler {
            scaler.transform(&mut input_vec);
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| InferenceError::Model(format!("Matrix creation failed: {}", e)))?;

        let predictions = self.artifact.classifier.predict(&input_matrix)?;
        predictions.first().copied().ok_or(InferenceError::EmptyOutput)
    }

    fn name(&self) -> &str {
        match self.artifact.classifier {
            Classifier::RandomForest(_) => "SmartCore Random Forest",
            Classifier::DecisionTree(_) => "SmartCore Decision Tree",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::{FEATURE_NAMES, FeatureValue};
    use crate::domain::phone_specs::PhoneSpecs;
    use smartcore::ensemble::random_forest_classifier::RandomForestClassifierParameters;
    use smartcore::tree::decision_tree_classifier::DecisionTreeClassifierParameters;

    /// Rows where only RAM varies; the class is the RAM bucket.
    fn ram_bucket_dataset() -> (DenseMatrix<f64>, Vec<i64>) {
        let samples = [
            (300, 0),
            (500, 0),
            (700, 0),
            (1600, 1),
            (1800, 1),
            (2100, 1),
            (2200, 1),
            (2800, 2),
            (3000, 2),
            (3600, 3),
            (3900, 3),
        ];

        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for (ram, class) in samples {
            let specs = PhoneSpecs {
                ram,
                ..PhoneSpecs::default()
            };
            rows.push(FeatureRecord::from_specs(&specs).to_f64_vector());
            labels.push(class);
        }

        (DenseMatrix::from_2d_vec(&rows).unwrap(), labels)
    }

    fn decision_tree_artifact() -> PipelineArtifact {
        let (x, y) = ram_bucket_dataset();
        let model =
            DecisionTreeClassifier::fit(&x, &y, DecisionTreeClassifierParameters::default())
                .unwrap();
        PipelineArtifact {
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            scaler: None,
            classifier: Classifier::DecisionTree(model),
        }
    }

    fn temp_model_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "phone_price_predictor_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = SmartCorePipeline::load(temp_model_path("does_not_exist"));
        assert!(matches!(result, Err(ModelLoadError::NotFound { .. })));
    }

    #[test]
    fn test_garbage_file_is_malformed() {
        let path = temp_model_path("garbage");
        std::fs::write(&path, b"definitely not a model").unwrap();

        let result = SmartCorePipeline::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ModelLoadError::Malformed { .. })));
    }

    #[test]
    fn test_roundtrip_through_disk_predicts_bucket() {
        let path = temp_model_path("decision_tree");
        let file = File::create(&path).unwrap();
        serde_json::to_writer(file, &decision_tree_artifact()).unwrap();

        let loaded = SmartCorePipeline::load(&path);
        let _ = std::fs::remove_file(&path);
        let pipeline = loaded.unwrap();

        assert_eq!(pipeline.name(), "SmartCore Decision Tree");
        let default_record = FeatureRecord::from_specs(&PhoneSpecs::default());
        assert_eq!(pipeline.predict(&default_record).unwrap(), 1);

        let flagship = FeatureRecord::from_specs(&PhoneSpecs {
            ram: 3962,
            ..PhoneSpecs::default()
        });
        assert_eq!(pipeline.predict(&flagship).unwrap(), 3);
    }

    #[test]
    fn test_random_forest_returns_known_class() {
        let (x, y) = ram_bucket_dataset();
        let params = RandomForestClassifierParameters::default().with_n_trees(10);
        let model = RandomForestClassifier::fit(&x, &y, params).unwrap();
        let pipeline = SmartCorePipeline::from_artifact(
            PipelineArtifact {
                feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                scaler: None,
                classifier: Classifier::RandomForest(model),
            },
            PathBuf::from("in-memory"),
        )
        .unwrap();

        let code = pipeline
            .predict(&FeatureRecord::from_specs(&PhoneSpecs::default()))
            .unwrap();
        assert!((0..=3).contains(&code));
    }

    #[test]
    fn test_schema_mismatch_is_reported() {
        let pipeline =
            SmartCorePipeline::from_artifact(decision_tree_artifact(), PathBuf::from("in-memory"))
                .unwrap();

        let short = FeatureRecord::from_entries(vec![("ram", FeatureValue::Int(2000))]);
        let err = pipeline.predict(&short).unwrap_err();
        assert!(matches!(err, InferenceError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_reordered_record_is_rejected() {
        let pipeline =
            SmartCorePipeline::from_artifact(decision_tree_artifact(), PathBuf::from("in-memory"))
                .unwrap();

        let mut entries: Vec<_> = FeatureRecord::from_specs(&PhoneSpecs::default())
            .iter()
            .copied()
            .collect();
        entries.swap(0, 1);
        let err = pipeline
            .predict(&FeatureRecord::from_entries(entries))
            .unwrap_err();
        assert!(matches!(err, InferenceError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_scaler_width_is_validated() {
        let mut artifact = decision_tree_artifact();
        artifact.scaler = Some(StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        });

        let result = SmartCorePipeline::from_artifact(artifact, PathBuf::from("in-memory"));
        assert!(matches!(result, Err(ModelLoadError::InvalidSchema { .. })));
    }

    /// A tree fitted on 25 columns whose only split is on the last one.
    fn wide_tree_artifact() -> PipelineArtifact {
        let rows: Vec<Vec<f64>> = (0..8)
            .map(|i| {
                let mut row = vec![0.0; 25];
                row[24] = i as f64;
                row
            })
            .collect();
        let labels: Vec<i64> = (0..8).map(|i| if i < 4 { 0 } else { 3 }).collect();
        let x = DenseMatrix::from_2d_vec(&rows).unwrap();
        let model =
            DecisionTreeClassifier::fit(&x, &labels, DecisionTreeClassifierParameters::default())
                .unwrap();

        PipelineArtifact {
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            scaler: None,
            classifier: Classifier::DecisionTree(model),
        }
    }

    #[test]
    fn test_classifier_width_must_match_declared_features() {
        let result = SmartCorePipeline::from_artifact(wide_tree_artifact(), PathBuf::from("wide"));
        match result {
            Err(ModelLoadError::InvalidSchema { reason, .. }) => {
                assert!(reason.contains("25"), "{reason}");
                assert!(reason.contains("20"), "{reason}");
            }
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("a 25-column model must not load behind 20 names"),
        }
    }

    #[test]
    fn test_classifier_panic_becomes_inference_error() {
        // Skips load-time validation to reach the inference guard directly
        let pipeline = SmartCorePipeline {
            artifact: wide_tree_artifact(),
            model_path: PathBuf::from("wide"),
        };

        let record = FeatureRecord::from_specs(&PhoneSpecs::default());
        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| pipeline.predict(&record)));
        let result = outcome.expect("prediction must not unwind into the caller");
        assert!(matches!(result, Err(InferenceError::Model(_))));
    }

    #[test]
    fn test_input_width_is_read_from_trees() {
        assert_eq!(decision_tree_artifact().classifier.input_width(), Some(20));
        assert_eq!(wide_tree_artifact().classifier.input_width(), Some(25));

        let (x, y) = ram_bucket_dataset();
        let params = RandomForestClassifierParameters::default().with_n_trees(3);
        let forest = Classifier::RandomForest(RandomForestClassifier::fit(&x, &y, params).unwrap());
        assert_eq!(forest.input_width(), Some(20));
    }

    #[test]
    fn test_directory_path_is_unreadable() {
        let dir = std::env::temp_dir().join(format!(
            "phone_price_predictor_dir_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let result = SmartCorePipeline::load(&dir);
        let _ = std::fs::remove_dir(&dir);

        match result {
            Err(err @ ModelLoadError::Unreadable { .. }) => {
                assert!(err.guidance().ends_with(crate::domain::errors::REGENERATE_MODEL_HINT));
            }
            other => panic!("unexpected result {:?}", other.err()),
        }
    }

    #[test]
    fn test_scaler_transform() {
        let scaler = StandardScaler {
            mean: vec![10.0, 5.0],
            scale: vec![2.0, 0.0],
        };
        let mut values = vec![14.0, 7.0];
        scaler.transform(&mut values);
        assert_eq!(values, vec![2.0, 2.0]);
    }
}
