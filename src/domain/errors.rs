use std::path::PathBuf;
use thiserror::Error;

/// Shown to the operator whenever the model cannot be loaded.
pub const REGENERATE_MODEL_HINT: &str =
    "Please run the Jupyter Notebook first to train and save the model.";

/// Errors raised while loading the trained pipeline at startup. All are fatal.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode model file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Invalid model schema in {path}: {reason}")]
    InvalidSchema { path: PathBuf, reason: String },
}

impl ModelLoadError {
    /// User-facing text for the startup failure screen.
    pub fn guidance(&self) -> String {
        match self {
            ModelLoadError::NotFound { .. } => {
                format!("Model file not found. {}", REGENERATE_MODEL_HINT)
            }
            other => format!("{}. {}", other, REGENERATE_MODEL_HINT),
        }
    }
}

/// Errors raised by a single inference call. Recoverable.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("feature schema mismatch: model expects {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("model returned no prediction")]
    EmptyOutput,

    #[error("model failure: {0}")]
    Model(String),
}

/// Anything that keeps a submission from producing a price band.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("unknown price category code {0}")]
    UnknownCategory(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_guidance() {
        let error = ModelLoadError::NotFound {
            path: PathBuf::from("price_prediction_pipeline.json"),
        };
        assert_eq!(
            error.guidance(),
            "Model file not found. Please run the Jupyter Notebook first to train and save the model."
        );
    }

    #[test]
    fn test_malformed_guidance_keeps_reason() {
        let error = ModelLoadError::Malformed {
            path: PathBuf::from("model.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = error.guidance();
        assert!(msg.contains("model.json"));
        assert!(msg.contains("line 1 column 1"));
        assert!(msg.ends_with(REGENERATE_MODEL_HINT));
    }

    #[test]
    fn test_prediction_error_formatting() {
        let error = PredictionError::UnknownCategory(7);
        assert_eq!(error.to_string(), "unknown price category code 7");

        let error: PredictionError = InferenceError::EmptyOutput.into();
        assert_eq!(error.to_string(), "model returned no prediction");
    }
}
