use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureRecord;

/// Interface for trained price-range classifiers
pub trait PricePredictor: Send + Sync {
    /// Predict the raw class code for one record.
    /// The code is not checked against the price table here.
    fn predict(&self, record: &FeatureRecord) -> Result<i64, InferenceError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
